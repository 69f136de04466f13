use axum::Json;
use serde_json::{json, Value};

/// GET /health
///
/// Liveness check; reports the crate version so deploys can be verified.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-interview-api"
    }))
}
