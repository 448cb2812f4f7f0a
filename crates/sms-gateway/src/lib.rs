//! Verification code delivery.
//!
//! [`CodeSender`] is the seam between the registration flow and whatever
//! actually reaches the handset. [`LogSender`] is the development default;
//! [`SmsCodeSender`] goes through an HTTP SMS gateway.

mod client;
mod error;
mod sender;
mod types;

pub use client::{SmsGatewayClient, DEFAULT_TIMEOUT};
pub use error::SmsError;
pub use sender::{CodeSender, LogSender, SmsCodeSender};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer, api_key: Option<&str>) -> SmsGatewayClient {
        SmsGatewayClient::new(
            mock_server.uri(),
            api_key.map(String::from),
            "SOSTXI",
            DEFAULT_TIMEOUT,
        )
        .unwrap()
    }

    fn secret(code: &str) -> SecretString {
        SecretString::new(code.to_string())
    }

    #[tokio::test]
    async fn test_health_check_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server, None);
        assert!(client.health_check().await);
    }

    #[tokio::test]
    async fn test_health_check_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server, None);
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    async fn test_send_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(serde_json::json!({
                "to": "+919876543210",
                "from": "SOSTXI",
                "body": "Hello"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message_id": "msg-1",
                "status": "queued"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server, Some("test-key"));
        let receipt = client.send("+919876543210", "Hello").await.unwrap();

        assert_eq!(receipt.message_id, "msg-1");
        assert_eq!(receipt.status.as_deref(), Some("queued"));
    }

    #[tokio::test]
    async fn test_send_message_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid recipient"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server, None);
        let result = client.send("+910000000000", "Hello").await;

        match result {
            Err(SmsError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "Invalid recipient");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sms_code_sender_renders_template() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(body_json(serde_json::json!({
                "to": "+919876543210",
                "from": "SOSTXI",
                "body": "Your code is 483920"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message_id": "msg-2"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sender = SmsCodeSender::new(
            create_test_client(&mock_server, None),
            MessageTemplate::new("Your code is {code}").unwrap(),
        );

        assert_eq!(sender.name(), "sms_gateway");
        assert_ok!(sender.deliver("+919876543210", &secret("483920")).await);
    }

    #[tokio::test]
    async fn test_sms_code_sender_propagates_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let sender = SmsCodeSender::new(
            create_test_client(&mock_server, None),
            MessageTemplate::new("{code}").unwrap(),
        );

        assert_err!(sender.deliver("+919876543210", &secret("483920")).await);
    }

    #[tokio::test]
    async fn test_log_sender_always_succeeds() {
        let sender = LogSender;
        assert_eq!(sender.name(), "log");
        assert_ok!(sender.deliver("+919876543210", &secret("483920")).await);
        assert!(sender.health_check().await);
    }

    #[tokio::test]
    async fn test_sms_code_sender_health_follows_gateway() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let sender = SmsCodeSender::new(
            create_test_client(&mock_server, None),
            MessageTemplate::new("{code}").unwrap(),
        );
        assert!(!sender.health_check().await);

        mock_server.reset().await;
        Mock::given(method("GET"))
            .and(path("/v1/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        assert!(sender.health_check().await);
    }

    #[test]
    fn test_template_requires_placeholder() {
        assert!(matches!(
            MessageTemplate::new("no placeholder"),
            Err(SmsError::InvalidTemplate(_))
        ));

        let template = MessageTemplate::new("Code {code}, again {code}").unwrap();
        assert_eq!(template.render("123456"), "Code 123456, again 123456");
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_trimmed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = SmsGatewayClient::new(
            format!("{}/", mock_server.uri()),
            None,
            "SOSTXI",
            DEFAULT_TIMEOUT,
        )
        .unwrap();
        assert!(client.health_check().await);
    }
}
