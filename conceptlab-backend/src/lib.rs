use axum::{middleware, routing::get, Router};
use mongodb::Client;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod cors;
pub mod database;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod startup;

use config::Config;

// Application state shared across all handlers. The mongodb client is the
// single shared handle; pooling is the driver's concern.
#[derive(Clone)]
pub struct AppState {
    pub db: Client,
    pub config: Config,
}

pub fn create_app(state: AppState) -> Router {
    let admission = middleware::from_fn_with_state(state.config.clone(), cors::admission_filter);

    Router::new()
        .nest("/api/ml", routes::ml::router())
        // Local auth and the Google OAuth flow both live under /api/auth.
        .nest(
            "/api/auth",
            routes::auth::router().merge(routes::google::router()),
        )
        .nest("/api/quiz", routes::quiz::router())
        .nest("/api/concept", routes::concept::router())
        .nest("/api/concept-map", routes::concept_map::router())
        .nest("/api/admin", routes::admin::router())
        .nest("/api/user", routes::user::router())
        .nest("/api/remediation", routes::remediation::router())
        .nest("/api/search", routes::search::router())
        .nest(
            "/api/chemical-equations",
            routes::chemical_equations::router(),
        )
        // Health check
        .route("/", get(handlers::health_check))
        // Outermost first: trace, then the admission filter, so every
        // request clears CORS before body handling or dispatch.
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(admission),
        )
        .with_state(state)
}
