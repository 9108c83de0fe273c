use axum::{routing::any, Router};

use crate::{error::AppError, AppState};

async fn pending() -> AppError {
    AppError::NotImplemented("admin")
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(pending))
        .route("/*rest", any(pending))
}
