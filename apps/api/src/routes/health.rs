use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service banner.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "EvolvPath API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational"
    }))
}

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
