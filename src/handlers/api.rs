use axum::response::Json;
use serde_json::{Value, json};

/// Handler for GET / - health check
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "message": "Outbound call relay server is running (ConversationRelay + ElevenLabs)"
    }))
}
