//! Configuration for the registration service.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Registration session configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Code delivery configuration
    #[serde(default)]
    pub delivery: DeliveryConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[serde(default)]
    pub cors_permissive: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Idle time after which a session is dropped
    #[serde(default = "default_session_ttl", with = "humantime_serde")]
    pub ttl: Duration,
}

/// How one-time codes reach the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Write the code to the service log (development only)
    #[default]
    Log,
    /// Send through an HTTP SMS gateway
    SmsGateway,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub mode: DeliveryMode,

    /// SMS gateway base URL (required for `sms_gateway`)
    #[serde(default)]
    pub gateway_url: Option<String>,

    /// SMS gateway API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender ID shown on the handset
    #[serde(default = "default_sender_id")]
    pub sender_id: String,

    /// Message body; `{code}` is replaced with the code
    #[serde(default = "default_message_template")]
    pub message_template: String,

    /// Gateway request timeout
    #[serde(default = "default_delivery_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
            cors_permissive: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: default_session_ttl(),
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            mode: DeliveryMode::default(),
            gateway_url: None,
            api_key: None,
            sender_id: default_sender_id(),
            message_template: default_message_template(),
            timeout: default_delivery_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_session_ttl() -> Duration {
    Duration::from_secs(30 * 60)
}

fn default_sender_id() -> String {
    "SOSTXI".into()
}

fn default_message_template() -> String {
    "Your SOS Taxi verification code is {code}".into()
}

fn default_delivery_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_env()
    }

    /// Build configuration from the process environment only.
    pub fn from_env() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.server.listen_addr, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(!config.server.cors_permissive);
        assert_eq!(config.session.ttl, Duration::from_secs(1800));
        assert_eq!(config.delivery.mode, DeliveryMode::Log);
        assert!(config.delivery.message_template.contains("{code}"));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_humantime_durations() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "session": { "ttl": "5m" },
            "delivery": {
                "mode": "sms_gateway",
                "gateway_url": "http://sms.local",
                "timeout": "10s"
            }
        }))
        .unwrap();

        assert_eq!(config.session.ttl, Duration::from_secs(300));
        assert_eq!(config.delivery.mode, DeliveryMode::SmsGateway);
        assert_eq!(config.delivery.gateway_url.as_deref(), Some("http://sms.local"));
        assert_eq!(config.delivery.timeout, Duration::from_secs(10));
    }
}
