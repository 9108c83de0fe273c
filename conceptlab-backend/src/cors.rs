use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::Config;
use crate::error::{AppError, Result};

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization, X-Requested-With, Accept, Origin";

// Cross-origin admission filter. Runs ahead of body handling and route
// dispatch for every request:
//
// - no Origin header: granted (mobile apps, curl, server-to-server)
// - Origin exactly matching the allow-list: granted, with credentials
// - anything else: logged and answered 403
//
// Preflight OPTIONS requests are answered here directly so that every path
// prefix gets a successful preflight without per-route wiring.
pub async fn admission_filter(
    State(config): State<Config>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let origin = request.headers().get(header::ORIGIN).cloned();

    if let Some(value) = &origin {
        let declared = value.to_str().unwrap_or("");
        if !config.origin_allowed(declared) {
            let rejected = String::from_utf8_lossy(value.as_bytes()).into_owned();
            tracing::warn!("🚫 CORS blocked for origin: {}", rejected);
            return Err(AppError::OriginNotAllowed(rejected));
        }
    }

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        grant_origin(headers, origin.as_ref());
        return Ok(response);
    }

    let mut response = next.run(request).await;
    grant_origin(response.headers_mut(), origin.as_ref());
    Ok(response)
}

fn grant_origin(headers: &mut HeaderMap, origin: Option<&HeaderValue>) {
    if let Some(origin) = origin {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.append(header::VARY, HeaderValue::from_static("Origin"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, middleware, routing::get, Router};
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            mongo_uri: "mongodb://localhost:27017".to_string(),
            port: 5000,
            allowed_origins: vec![
                "https://app.conceptlab.io".to_string(),
                "http://localhost:3000".to_string(),
            ],
            connect_timeout: Duration::from_secs(10),
        }
    }

    fn app() -> Router {
        Router::new()
            .route("/api/quiz/list", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(
                test_config(),
                admission_filter,
            ))
    }

    #[tokio::test]
    async fn allowed_origin_preflight_succeeds_on_any_path() {
        for path in ["/api/quiz/list", "/api/search/anything", "/nowhere"] {
            let request = Request::builder()
                .method(Method::OPTIONS)
                .uri(path)
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap();
            let response = app().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::NO_CONTENT);
            assert_eq!(
                response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
                "http://localhost:3000"
            );
            assert_eq!(
                response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
                "true"
            );
            assert_eq!(
                response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
                ALLOWED_METHODS
            );
            assert_eq!(
                response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
                ALLOWED_HEADERS
            );
        }
    }

    #[tokio::test]
    async fn disallowed_origin_is_rejected() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/quiz/list")
            .header(header::ORIGIN, "https://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn disallowed_origin_preflight_is_rejected() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/quiz/list")
            .header(header::ORIGIN, "https://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn missing_origin_is_granted() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/quiz/list")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn allowed_origin_response_carries_cors_headers() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/quiz/list")
            .header(header::ORIGIN, "https://app.conceptlab.io")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://app.conceptlab.io"
        );
        assert_eq!(response.headers()[header::VARY], "Origin");
    }
}
