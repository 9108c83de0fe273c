use axum::response::{IntoResponse, Json};

// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Backend is live and running",
        "service": "conceptlab-backend"
    }))
}
