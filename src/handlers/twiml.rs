//! Handler for the /outbound-call-twiml call-control document
//!
//! Twilio fetches this endpoint after the outbound call connects. The query
//! string may carry `prompt` and `greeting`; anything absent, empty, or
//! malformed falls back to the fixed defaults, so this handler has no error
//! path.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::core::twiml::{self, DEFAULT_GREETING, DEFAULT_PROMPT};
use crate::state::AppState;

#[derive(Debug, Default)]
struct TwimlQuery {
    prompt: Option<String>,
    greeting: Option<String>,
}

impl TwimlQuery {
    /// Parse the raw query string, keeping the last occurrence of each known
    /// key and ignoring everything else
    fn from_raw(raw: Option<&str>) -> Self {
        let mut query = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "prompt" => query.prompt = Some(value.into_owned()),
                "greeting" => query.greeting = Some(value.into_owned()),
                _ => {}
            }
        }
        query
    }
}

pub async fn connect_relay_twiml(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = TwimlQuery::from_raw(raw.as_deref());

    let prompt = query
        .prompt
        .as_deref()
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_PROMPT);
    let greeting = query
        .greeting
        .as_deref()
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_GREETING);

    let body = twiml::render_connect_relay(&state.config.voice_config(), prompt, greeting);

    ([(header::CONTENT_TYPE, "text/xml")], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parses_known_keys() {
        let query = TwimlQuery::from_raw(Some("prompt=Test&greeting=Yo"));
        assert_eq!(query.prompt.as_deref(), Some("Test"));
        assert_eq!(query.greeting.as_deref(), Some("Yo"));
    }

    #[test]
    fn test_query_ignores_unknown_keys() {
        let query = TwimlQuery::from_raw(Some("foo=bar&prompt=Hi"));
        assert_eq!(query.prompt.as_deref(), Some("Hi"));
        assert!(query.greeting.is_none());
    }

    #[test]
    fn test_query_handles_missing_query_string() {
        let query = TwimlQuery::from_raw(None);
        assert!(query.prompt.is_none());
        assert!(query.greeting.is_none());
    }

    #[test]
    fn test_query_decodes_percent_encoding() {
        let query = TwimlQuery::from_raw(Some("prompt=hello%20world"));
        assert_eq!(query.prompt.as_deref(), Some("hello world"));
    }

    #[test]
    fn test_query_last_occurrence_wins() {
        let query = TwimlQuery::from_raw(Some("prompt=first&prompt=second"));
        assert_eq!(query.prompt.as_deref(), Some("second"));
    }
}
