//! Minimal Twilio REST API client for placing outbound calls
//!
//! Covers the single operation this service needs: creating a call whose
//! control flow is delegated to a TwiML callback URL. Authentication is HTTP
//! basic auth with the account SID and auth token, and the request body is
//! form-encoded, per the Twilio Calls API.

use serde::Deserialize;
use thiserror::Error;

use crate::config::ServerConfig;

/// Errors from the Twilio call-creation request
#[derive(Debug, Error)]
pub enum TwilioError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("Twilio request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Twilio answered with a non-success status (bad credentials, invalid
    /// number, rate limit, ...)
    #[error("Twilio API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// The subset of the Twilio call resource this service consumes
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedCall {
    /// Vendor-assigned call identifier (CAxxxx...)
    pub sid: String,
}

/// Shared, read-only Twilio API client
///
/// Constructed once at startup and shared across request handlers through
/// [`crate::state::AppState`]; never mutated after construction.
#[derive(Debug, Clone)]
pub struct TwilioClient {
    http: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
    api_base: String,
}

impl TwilioClient {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            account_sid: config.twilio_account_sid.clone(),
            auth_token: config.twilio_auth_token.clone(),
            from_number: config.twilio_phone_number.clone(),
            api_base: config.twilio_api_base.clone(),
        }
    }

    /// Place an outbound call to `to`, instructing Twilio to fetch its call
    /// control instructions from `callback_url` once the call connects.
    ///
    /// The caller ID is always the configured account phone number. No retry
    /// is attempted; a failure is surfaced to the caller as-is.
    pub async fn create_call(
        &self,
        to: &str,
        callback_url: &str,
    ) -> Result<CreatedCall, TwilioError> {
        let endpoint = format!(
            "{}/2010-04-01/Accounts/{}/Calls.json",
            self.api_base, self.account_sid
        );

        let response = self
            .http
            .post(&endpoint)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", to),
                ("From", self.from_number.as_str()),
                ("Url", callback_url),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TwilioError::Api { status, body });
        }

        let call: CreatedCall = response.json().await?;
        Ok(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_call_deserializes_sid() {
        // Twilio returns many more fields; only the sid is consumed
        let json = r#"{
            "sid": "CA42d2b2dd3e003f34752b436ae07b3f5a",
            "status": "queued",
            "direction": "outbound-api"
        }"#;

        let call: CreatedCall = serde_json::from_str(json).unwrap();
        assert_eq!(call.sid, "CA42d2b2dd3e003f34752b436ae07b3f5a");
    }

    #[test]
    fn test_api_error_display_includes_status() {
        let err = TwilioError::Api {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "rate limited".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("429"));
        assert!(message.contains("rate limited"));
    }
}
