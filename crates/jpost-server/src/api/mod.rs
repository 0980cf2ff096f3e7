mod archetypes;
mod journal;

use std::any::Any;
use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use jpost_core::RouteTable;
use jpost_poster::PlatformPoster;
use serde::Serialize;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

pub const SERVICE_NAME: &str = "jpost-server";

#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub poster: Arc<PlatformPoster>,
}

/// Handler error rendered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input, unknown archetype or platform (400).
    BadRequest(String),
    /// Anything unexpected (500); the message is passed through.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error", "message": message })),
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    timestamp: DateTime<Utc>,
    service: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

/// Converts a handler panic into the standard 500 body.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(message = %message, "request handler panicked");
    ApiError::Internal(message).into_response()
}

/// Outer middleware shared by every route. The request-id layer sits outside
/// the panic catcher so a 500 from a panicking handler still carries its id.
fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(request_id))
            .layer(build_cors())
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http()),
    )
}

pub fn build_app(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/webhook/journal", post(journal::receive_journal_entry))
        .route("/api/v1/archetypes", get(archetypes::list_archetypes))
        .route(
            "/api/v1/platforms/{platform}/routes",
            get(archetypes::list_platform_routes),
        );
    with_middleware(router).with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData {
        status: "healthy",
        timestamp: Utc::now(),
        service: SERVICE_NAME,
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
