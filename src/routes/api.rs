use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{api, calls, twiml};
use crate::state::AppState;

/// Create the API router
///
/// The TwiML route accepts any method because Twilio's callback method is
/// configurable on the account side.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(api::health_check))
        .route("/outbound-call", post(calls::initiate_call))
        .route("/outbound-call-twiml", any(twiml::connect_relay_twiml))
        .layer(TraceLayer::new_for_http())
}
