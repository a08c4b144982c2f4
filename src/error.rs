use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::utils::response::ApiResponse;
use crate::utils::validation::flatten_errors;

pub type Result<T> = std::result::Result<T, Error>;

/// Semantic error kinds. Lower layers tag the kind; only `into_response`
/// decides the HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            Error::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::validation_failure("Validation failed", errors),
            ),
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiResponse::error(msg)),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, ApiResponse::error(msg)),
            Error::Conflict(msg) => (StatusCode::CONFLICT, ApiResponse::error(msg)),
            Error::Database(err) => {
                tracing::error!(error = ?err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error(format!("Database error: {}", err)),
                )
            }
            Error::Config(msg) | Error::Internal(msg) => {
                tracing::error!(%msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, ApiResponse::error(msg))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                // Loser of the pre-check/insert race hits the UNIQUE
                // constraint; surface it as a conflict, not a 500.
                Error::Conflict("Email already in use".to_string())
            }
            other => Error::Database(other),
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Error::Validation(flatten_errors(&errors))
    }
}

/// Process-wide fallback: anything that panics past the handlers still
/// answers with the JSON envelope. The panic message is hidden in production.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unhandled panic".to_string()
    };
    tracing::error!(%detail, "request handler panicked");

    let message = if crate::config::is_production() {
        "Internal Server Error".to_string()
    } else {
        detail
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(message)),
    )
        .into_response()
}
