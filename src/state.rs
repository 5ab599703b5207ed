//! Shared application state
//!
//! Built once at startup and handed to every handler behind an `Arc`.
//! Nothing here is mutated after construction, so no synchronization is
//! needed.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::twilio::TwilioClient;

pub struct AppState {
    pub config: ServerConfig,
    pub twilio: TwilioClient,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let twilio = TwilioClient::new(&config);
        Arc::new(Self { config, twilio })
    }
}
