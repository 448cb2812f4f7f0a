//! The registration form page.

use axum::response::Html;
use registration_flow::{UserType, OTP_LENGTH};
use std::sync::OnceLock;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>SOS Taxi Service</title>
<style>
  body { font-family: sans-serif; }
  .card { max-width: 400px; margin: auto; padding: 20px; background-color: #f4f4f4; border-radius: 10px; }
  h2 { text-align: center; color: #FF6D00; font-weight: bold; }
  .prefix { padding: 10px; background-color: #FF6D00; color: white; border-radius: 4px 0 0 4px; }
  .row { display: flex; align-items: center; }
  .row input { flex: 1; padding: 10px; border-radius: 0 4px 4px 0; }
  select, .full { width: 100%; padding: 10px; margin-top: 10px; box-sizing: border-box; }
  button { width: 100%; padding: 10px; background-color: #FF6D00; color: white; border: none; border-radius: 4px; margin-top: 15px; }
  .terms { font-size: 0.8em; color: #666; text-align: center; margin-top: 15px; }
  [hidden] { display: none; }
</style>
</head>
<body>
<div class="card">
  <h2>🚕 SOS Taxi Service</h2>

  <form id="phone-form">
    <div>
      <label for="phone">Mobile Number:</label>
      <div class="row">
        <span class="prefix">+91</span>
        <input type="tel" id="phone" name="phone" placeholder="Enter 10-digit mobile number" maxlength="10" required>
      </div>
    </div>
    <div>
      <label for="user_type">User Type:</label>
      <select id="user_type" name="user_type">
{{USER_TYPE_OPTIONS}}
      </select>
    </div>
    <button type="submit">Send OTP</button>
  </form>

  <form id="otp-form" hidden>
    <div>
      <label for="otp">Enter OTP:</label>
      <input type="text" id="otp" name="otp" class="full" placeholder="Enter {{OTP_LENGTH}}-digit OTP" maxlength="{{OTP_LENGTH}}" required>
    </div>
    <button type="submit">Verify</button>
  </form>

  <p class="terms">By registering, you agree to our terms of service</p>
</div>
<script>
  let sessionId = null;

  async function api(method, path, body) {
    const res = await fetch(path, {
      method,
      headers: { 'Content-Type': 'application/json' },
      body: body === undefined ? undefined : JSON.stringify(body),
    });
    const data = res.status === 204 ? null : await res.json().catch(() => null);
    if (!res.ok) {
      const err = new Error(data && data.error ? data.error : 'Something went wrong. Please try again.');
      err.code = data && data.code;
      throw err;
    }
    return data;
  }

  function sessionGone(err) {
    return err.code === 'SESSION_NOT_FOUND';
  }

  function showPhoneStage() {
    document.getElementById('otp-form').hidden = true;
    document.getElementById('phone-form').hidden = false;
  }

  async function session() {
    if (!sessionId) {
      sessionId = (await api('POST', '/v1/sessions')).session_id;
    }
    return sessionId;
  }

  document.getElementById('phone-form').addEventListener('submit', async (e) => {
    e.preventDefault();
    const body = {
      phone: document.getElementById('phone').value,
      user_type: document.getElementById('user_type').value,
    };
    try {
      try {
        await api('POST', `/v1/sessions/${await session()}/phone`, body);
      } catch (err) {
        if (!sessionGone(err)) throw err;
        // Idle session was dropped; start a new one and try once more
        sessionId = null;
        await api('POST', `/v1/sessions/${await session()}/phone`, body);
      }
      document.getElementById('phone-form').hidden = true;
      document.getElementById('otp-form').hidden = false;
    } catch (err) {
      alert(err.message);
    }
  });

  document.getElementById('otp-form').addEventListener('submit', async (e) => {
    e.preventDefault();
    try {
      const id = await session();
      const result = await api('POST', `/v1/sessions/${id}/otp`, {
        code: document.getElementById('otp').value,
      });
      alert(result.message);
    } catch (err) {
      if (sessionGone(err)) {
        sessionId = null;
        showPhoneStage();
        alert('Your session expired. Please enter your mobile number again.');
      } else {
        alert(err.message);
      }
    }
  });
</script>
</body>
</html>
"#;

fn render() -> String {
    let options = UserType::ALL
        .iter()
        .map(|t| format!("        <option value=\"{}\">{}</option>", t.as_str(), t.label()))
        .collect::<Vec<_>>()
        .join("\n");

    INDEX_TEMPLATE
        .replace("{{USER_TYPE_OPTIONS}}", &options)
        .replace("{{OTP_LENGTH}}", &OTP_LENGTH.to_string())
}

/// Serve the registration form.
pub async fn index() -> Html<&'static str> {
    static PAGE: OnceLock<String> = OnceLock::new();
    Html(PAGE.get_or_init(render).as_str())
}
