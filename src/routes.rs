//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/students/*` - Student CRUD
//! - `/courses/*`  - Course CRUD and enrollment management
//! - anything else - JSON 404 fallback
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Unmatched routes return `404 {"error": "Not Found"}` instead of the
/// framework's empty-body default.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// The route tree without the trailing-slash normalization wrapper.
///
/// Integration tests mount this directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::student_routes())
        .merge(api::routes::course_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// JSON body for unmatched routes.
async fn fallback_handler() -> AppError {
    AppError::not_found("Not Found")
}
