use axum::{routing::any, Router};

use crate::{error::AppError, AppState};

async fn pending() -> AppError {
    AppError::NotImplemented("auth/google")
}

// Google OAuth flow, merged with the local auth router under /api/auth.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/google", any(pending))
        .route("/google/callback", any(pending))
}
