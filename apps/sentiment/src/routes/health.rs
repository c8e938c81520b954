use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Static liveness payload; touches no state.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "Sentic-API is online and healthy"
    }))
}
