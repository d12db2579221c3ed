//! Application router: health probe, versioned villa number APIs, and the
//! HTTP middleware they share.
//!
//! `main.rs` and the integration tests both build through
//! [`build_app_router`], so tests run against the production stack.

use std::any::Any;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::response::ApiResponse;
use crate::routes;
use crate::state::AppState;

/// Route tree:
///
/// ```text
/// /health                 liveness and storage probe
/// /api/v1/villanumbers    v1 resource
/// /api/v2/villanumbers    v2 resource (placeholder collection GET)
/// ```
///
/// Layers, outermost first: CORS, request id assignment, tracing, request id
/// echo, timeout, panic recovery. A panicking handler still answers with the
/// failure envelope.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(CatchPanicLayer::custom(panic_envelope));

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_v1_routes())
        .nest("/api/v2", routes::api_v2_routes())
        .layer(middleware)
        // CORS gets its own `Router::layer` call so axum re-boxes the inner
        // body; `Cors` needs a `Default` body, which `Trace`'s lacks.
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the configured origins. Panics on an unparsable origin.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Turn a handler panic into an in-band 500 envelope. The panic message is
/// logged, never returned to the client.
fn panic_envelope(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "Handler panicked");

    ApiResponse::<()>::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        .into_response()
}
