//! Handler for POST /outbound-call
//!
//! Validates the destination number, builds the TwiML callback URL from the
//! inbound Host header, and asks Twilio to place the call.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::extract::JsonOrForm;

/// Inbound request body. `number` is required by contract but optional in
/// the wire type so its absence surfaces as a 400 rather than a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutboundCallRequest {
    pub number: Option<String>,
    pub prompt: Option<String>,
    pub greeting: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutboundCallResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "callSid")]
    pub call_sid: String,
}

pub async fn initiate_call(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    JsonOrForm(request): JsonOrForm<OutboundCallRequest>,
) -> AppResult<Json<OutboundCallResponse>> {
    let number = request
        .number
        .as_deref()
        .filter(|number| !number.is_empty())
        .ok_or(AppError::MissingNumber)?;

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::MissingHost)?;

    let callback_url = build_callback_url(
        host,
        request.prompt.as_deref(),
        request.greeting.as_deref(),
    )?;

    let call = state.twilio.create_call(number, callback_url.as_str()).await?;
    tracing::info!(call_sid = %call.sid, to = %number, "Outbound call initiated");

    Ok(Json(OutboundCallResponse {
        success: true,
        message: "Call initiated successfully".to_string(),
        call_sid: call.sid,
    }))
}

/// Build the TwiML callback URL Twilio will fetch once the call connects.
///
/// Always https against the inbound request host. `prompt` and `greeting`
/// are appended as query parameters only when supplied and non-empty; no
/// empty-string defaults are injected here.
fn build_callback_url(
    host: &str,
    prompt: Option<&str>,
    greeting: Option<&str>,
) -> Result<Url, AppError> {
    let mut url = Url::parse(&format!("https://{host}/outbound-call-twiml"))
        .map_err(|_| AppError::MissingHost)?;

    {
        let mut pairs = url.query_pairs_mut();
        if let Some(prompt) = prompt.filter(|value| !value.is_empty()) {
            pairs.append_pair("prompt", prompt);
        }
        if let Some(greeting) = greeting.filter(|value| !value.is_empty()) {
            pairs.append_pair("greeting", greeting);
        }
    }

    // query_pairs_mut leaves an empty query ("...twiml?") when nothing was
    // appended; clear it so the bare path round-trips exactly
    if url.query().is_some_and(str::is_empty) {
        url.set_query(None);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_url_with_prompt_and_greeting() {
        let url = build_callback_url("example.com", Some("Hi"), Some("Hello")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/outbound-call-twiml?prompt=Hi&greeting=Hello"
        );
    }

    #[test]
    fn test_callback_url_without_parameters_has_no_query_string() {
        let url = build_callback_url("example.com", None, None).unwrap();
        assert_eq!(url.as_str(), "https://example.com/outbound-call-twiml");
    }

    #[test]
    fn test_callback_url_with_only_prompt() {
        let url = build_callback_url("example.com", Some("Hi"), None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/outbound-call-twiml?prompt=Hi"
        );
    }

    #[test]
    fn test_callback_url_empty_parameters_are_omitted() {
        let url = build_callback_url("example.com", Some(""), Some("")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/outbound-call-twiml");
    }

    #[test]
    fn test_callback_url_keeps_host_port() {
        let url = build_callback_url("example.com:8443", None, None).unwrap();
        assert_eq!(url.as_str(), "https://example.com:8443/outbound-call-twiml");
    }

    #[test]
    fn test_callback_url_encodes_parameter_values() {
        let url = build_callback_url("example.com", Some("hello world"), None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/outbound-call-twiml?prompt=hello+world"
        );
    }

    #[test]
    fn test_callback_url_rejects_unparsable_host() {
        assert!(build_callback_url("not a host", None, None).is_err());
    }
}
