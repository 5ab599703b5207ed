//! Configuration module for the relay-dialer server
//!
//! Configuration comes from environment variables (with .env support via
//! `dotenvy`, loaded in main.rs before this module runs). The Twilio
//! credentials are mandatory; the server refuses to start without them.
//!
//! # Example
//! ```rust,no_run
//! use relay_dialer::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Default ElevenLabs voice: "Amelia".
/// Other voice IDs: https://elevenlabs.io/voice-library
const DEFAULT_ELEVENLABS_VOICE_ID: &str = "ZF6FPAbjXT4488VcRRnw";

/// Fixed model and quality parameters appended to the voice ID when building
/// the ConversationRelay `voice` attribute: model tag, then
/// stability/similarity/speed.
const VOICE_MODEL_PARAMS: &str = "flash_v2_5-1.2_1.0_1.0";

/// Errors produced while loading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are absent or empty
    #[error("missing required environment variables: {0}")]
    MissingVars(String),

    /// PORT is set but is not a valid port number
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Server configuration
///
/// Contains everything needed to run the relay-dialer server:
/// - Server settings (host, port)
/// - Twilio credentials and the provisioned phone number calls are placed from
/// - The ElevenLabs voice used by the ConversationRelay TwiML
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Twilio settings
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    /// E.164 number provisioned in the Twilio account; used as the caller ID
    /// for every outbound call
    pub twilio_phone_number: String,
    /// Base URL of the Twilio REST API. Overridable via TWILIO_API_BASE so
    /// tests can point the client at a local mock server.
    pub twilio_api_base: String,

    /// ElevenLabs voice ID interpolated into the TwiML voice attribute
    pub elevenlabs_voice_id: String,
}

/// Read an environment variable, treating an empty value as unset
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error naming every missing required variable
    /// (TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN, TWILIO_PHONE_NUMBER), or an
    /// error if PORT is set to something that is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut missing = Vec::new();

        let twilio_account_sid = non_empty_var("TWILIO_ACCOUNT_SID");
        let twilio_auth_token = non_empty_var("TWILIO_AUTH_TOKEN");
        let twilio_phone_number = non_empty_var("TWILIO_PHONE_NUMBER");

        if twilio_account_sid.is_none() {
            missing.push("TWILIO_ACCOUNT_SID");
        }
        if twilio_auth_token.is_none() {
            missing.push("TWILIO_AUTH_TOKEN");
        }
        if twilio_phone_number.is_none() {
            missing.push("TWILIO_PHONE_NUMBER");
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing.join(", ")));
        }

        let port = match non_empty_var("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: non_empty_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            // Required variables were checked above
            twilio_account_sid: twilio_account_sid.unwrap_or_default(),
            twilio_auth_token: twilio_auth_token.unwrap_or_default(),
            twilio_phone_number: twilio_phone_number.unwrap_or_default(),
            twilio_api_base: non_empty_var("TWILIO_API_BASE")
                .unwrap_or_else(|| DEFAULT_TWILIO_API_BASE.to_string()),
            elevenlabs_voice_id: non_empty_var("ELEVENLABS_VOICE_ID")
                .unwrap_or_else(|| DEFAULT_ELEVENLABS_VOICE_ID.to_string()),
        })
    }

    /// Get the server address as a string in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the composite ConversationRelay voice string:
    /// `{voice_id}-{model}-{stability}_{similarity}_{speed}`
    pub fn voice_config(&self) -> String {
        format!("{}-{}", self.elevenlabs_voice_id, VOICE_MODEL_PARAMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            twilio_account_sid: "AC0123456789abcdef0123456789abcdef".to_string(),
            twilio_auth_token: "token".to_string(),
            twilio_phone_number: "+15550001111".to_string(),
            twilio_api_base: DEFAULT_TWILIO_API_BASE.to_string(),
            elevenlabs_voice_id: DEFAULT_ELEVENLABS_VOICE_ID.to_string(),
        }
    }

    #[test]
    fn test_address_formats_host_and_port() {
        assert_eq!(sample_config().address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_voice_config_appends_fixed_model_params() {
        assert_eq!(
            sample_config().voice_config(),
            "ZF6FPAbjXT4488VcRRnw-flash_v2_5-1.2_1.0_1.0"
        );
    }

    #[test]
    fn test_voice_config_uses_configured_voice_id() {
        let mut config = sample_config();
        config.elevenlabs_voice_id = "customVoice123".to_string();
        assert_eq!(config.voice_config(), "customVoice123-flash_v2_5-1.2_1.0_1.0");
    }
}
