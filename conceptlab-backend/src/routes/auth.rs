use axum::{routing::any, Router};

use crate::{error::AppError, AppState};

async fn pending() -> AppError {
    AppError::NotImplemented("auth")
}

// Local credential auth. Endpoints are enumerated (no catch-all) because
// the Google OAuth router shares the /api/auth prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", any(pending))
        .route("/login", any(pending))
        .route("/logout", any(pending))
        .route("/me", any(pending))
}
