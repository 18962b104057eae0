use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET / - service banner
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Zyarat API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Museum dashboard REST API",
        "endpoints": {
            "public": ["/", "/health", "/api/auth/login"],
            "protected": ["/api/auth/whoami", "/api/institutions/:id/*"],
            "admin": ["/api/admin/*"]
        }
    }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339()
    }))
}
