use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Event with id {0} not found.")]
    EventNotFound(i64),

    #[error("Ticket with code {code} for event id {event_id} already registered.")]
    DuplicateTicket { event_id: i64, code: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors surfaced by the services and returned to HTTP clients.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error(transparent)]
    Storage(StorageError),
}

impl AppError {
    pub fn event_not_found(id: i64) -> Self {
        StorageError::EventNotFound(id).into()
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "unauthorized",
            AppError::Forbidden(_) => "forbidden",
            AppError::Conflict(_) => "conflict",
            AppError::NotFound(_) => "not_found",
            AppError::UnprocessableEntity(_) => "unprocessable_entity",
            AppError::Storage(_) => "unknown",
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::EventNotFound(_) => AppError::NotFound(err.to_string()),
            StorageError::DuplicateTicket { .. } => AppError::Conflict(err.to_string()),
            StorageError::Database(_) => AppError::Storage(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::UnprocessableEntity(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = ?self, "{}", message);
        } else {
            tracing::warn!(kind = self.kind(), status = status.as_u16(), "{}", message);
        }

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                AppError::UnprocessableEntity("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Storage(StorageError::Database(sqlx::Error::PoolClosed)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{}", err.kind());
        }
    }

    #[test]
    fn test_duplicate_ticket_becomes_conflict() {
        let err: AppError = StorageError::DuplicateTicket {
            event_id: 3,
            code: "1234".to_string(),
        }
        .into();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(
            err.to_string(),
            "Ticket with code 1234 for event id 3 already registered."
        );
    }

    #[test]
    fn test_missing_event_becomes_not_found() {
        let err: AppError = StorageError::EventNotFound(9).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Event with id 9 not found.");
    }

    #[test]
    fn test_event_not_found_matches_storage_message() {
        let err = AppError::event_not_found(9);
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), StorageError::EventNotFound(9).to_string());
    }

    #[test]
    fn test_message_is_response_body_source() {
        let err = AppError::Forbidden("The event has already happened.".to_string());
        assert_eq!(err.to_string(), "The event has already happened.");
        assert_eq!(err.kind(), "forbidden");
    }
}
