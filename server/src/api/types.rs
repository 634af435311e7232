//! Shared API types
//!
//! The error response used by every endpoint and its mapping from domain
//! errors.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::DomainError;

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn from_domain(e: DomainError) -> Self {
        let message = e.to_string();
        match e {
            DomainError::Input(_) => Self::bad_request("INVALID_PARAMETER", message),
            DomainError::MissingField { .. } => Self::bad_request("MISSING_FIELD", message),
            DomainError::DuplicateCase { .. } => Self::conflict("DUPLICATE_CASE", message),
            DomainError::NotFound { .. } => Self::not_found("INCIDENT_NOT_FOUND", message),
            DomainError::Storage(err) => {
                tracing::error!(error = %err, transient = err.is_transient(), "Data error");
                Self::internal("Database operation failed")
            }
        }
    }

    pub fn from_json_rejection(e: JsonRejection) -> Self {
        Self::bad_request("INVALID_BODY", e.body_text())
    }

    pub fn from_query_rejection(e: QueryRejection) -> Self {
        Self::bad_request("INVALID_QUERY", e.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, "bad_request", code, message)
            }
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, "not_found", code, message),
            Self::Conflict { code, message } => (StatusCode::CONFLICT, "conflict", code, message),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "INTERNAL".to_string(),
                message,
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": error_type,
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;
    use crate::data::filters::InputError;

    fn status_and_code(err: ApiError) -> (StatusCode, String) {
        match err {
            ApiError::BadRequest { code, .. } => (StatusCode::BAD_REQUEST, code),
            ApiError::NotFound { code, .. } => (StatusCode::NOT_FOUND, code),
            ApiError::Conflict { code, .. } => (StatusCode::CONFLICT, code),
            ApiError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL".to_string())
            }
        }
    }

    #[test]
    fn test_domain_error_mapping() {
        let cases = vec![
            (
                DomainError::Input(InputError::new("code", "abc", "not an integer")),
                StatusCode::BAD_REQUEST,
                "INVALID_PARAMETER",
            ),
            (
                DomainError::missing("block"),
                StatusCode::BAD_REQUEST,
                "MISSING_FIELD",
            ),
            (
                DomainError::DuplicateCase { case_number: 1 },
                StatusCode::CONFLICT,
                "DUPLICATE_CASE",
            ),
            (
                DomainError::NotFound { case_number: 1 },
                StatusCode::NOT_FOUND,
                "INCIDENT_NOT_FOUND",
            ),
            (
                DomainError::Storage(DataError::Sqlite(sqlx::Error::PoolClosed)),
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
            ),
        ];

        for (err, status, code) in cases {
            assert_eq!(status_and_code(ApiError::from_domain(err)), (status, code.to_string()));
        }
    }

    #[test]
    fn test_storage_error_message_is_generic() {
        let err = ApiError::from_domain(DomainError::Storage(DataError::decode(
            "secret path",
            "unreadable",
        )));
        match err {
            ApiError::Internal { message } => assert_eq!(message, "Database operation failed"),
            other => panic!("expected internal error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::conflict("DUPLICATE_CASE", "exists").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
