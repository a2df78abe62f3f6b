//! Error handling boundary - maps workflow errors to HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ErrorBody;
use std::fmt;

/// Application-level error type covering the full failure taxonomy.
/// Every workflow error is converted here and serialized as `{"error": ...}`.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    InvalidArgument(String),
    InvalidCredentials,
    Forbidden(String),
    Conflict(String),
    AlreadyPublished,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::InvalidArgument(msg) => write!(f, "{}", msg),
            AppError::InvalidCredentials => write!(f, "Invalid email or password"),
            AppError::Forbidden(msg) => write!(f, "{}", msg),
            AppError::Conflict(msg) => write!(f, "{}", msg),
            AppError::AlreadyPublished => write!(f, "Blog is already published"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::AlreadyPublished => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Internal(detail) => {
                // Internal details are logged, never returned to the caller.
                tracing::error!("Internal error: {}", detail);
                ErrorBody::new("An error occurred!")
            }
            other => ErrorBody::new(other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<quill_core::error::DomainError> for AppError {
    fn from(err: quill_core::error::DomainError) -> Self {
        use quill_core::error::DomainError;
        match err {
            DomainError::NotFound => AppError::NotFound("Blog not found".to_string()),
            DomainError::InvalidCredentials => AppError::InvalidCredentials,
            DomainError::Forbidden(msg) => AppError::Forbidden(msg.to_string()),
            DomainError::Conflict(msg) => AppError::Conflict(msg.to_string()),
            DomainError::InvalidArgument(msg) => AppError::InvalidArgument(msg),
            DomainError::AlreadyPublished => AppError::AlreadyPublished,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<quill_core::error::RepoError> for AppError {
    fn from(err: quill_core::error::RepoError) -> Self {
        use quill_core::error::RepoError;
        match err {
            RepoError::NotFound => AppError::NotFound("Blog not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AlreadyPublished.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
