//! Application route configuration.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::student_routes;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::Environment;
use crate::domain;
use crate::types::Envelope;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let environment = state.environment;

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/students", student_routes())
        // Global middleware
        .layer(CatchPanicLayer::custom(move |panic| {
            panic_response(environment, panic)
        }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Student Registry API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint. The dataset lives in process memory, so
/// reachable means healthy.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Turn an escaped panic into the standard 500 envelope.
///
/// The panic detail is only exposed in development; production gets
/// the generic message.
fn panic_response(environment: Environment, panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    tracing::error!("Unhandled panic: {detail}");

    let message = if environment.is_production() {
        "Internal server error".to_string()
    } else {
        format!("Exception: {detail}")
    };

    let envelope = Envelope::error(&domain::Error::internal_server_error(message), None);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
}
