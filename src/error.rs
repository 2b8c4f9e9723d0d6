use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error body returned for every failed request: `{"error": "<message>"}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Application error taxonomy.
///
/// Every fallible store and handler operation returns one of these variants.
/// The [`IntoResponse`] impl maps each variant to its HTTP status; internal
/// detail is logged server-side and never surfaced in the response body.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required request field is missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The requested entity id does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The email is already used by another student.
    #[error("{0}")]
    DuplicateEmail(String),

    /// An unexpected fault inside the request pipeline.
    #[error("Internal Server Error")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn duplicate_email(message: impl Into<String>) -> Self {
        Self::DuplicateEmail(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::DuplicateEmail(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(detail) => {
                tracing::error!(detail, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Collapses validator output into a single uniform `Validation` error so
/// malformed input is rejected at the boundary with a 400.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();

        AppError::validation(format!(
            "Missing or invalid field(s): {}",
            fields.join(", ")
        ))
    }
}
