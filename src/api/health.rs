use axum::response::Json;
use serde_json::{Value, json};

pub const LIVENESS_MESSAGE: &str = "Server is running";

pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
