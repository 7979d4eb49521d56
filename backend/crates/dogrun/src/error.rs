//! Dogrun Error Types
//!
//! Domain error variants that integrate with the unified
//! `kernel::error::AppError` system.

use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Dogrun-specific result type alias
pub type DogrunResult<T> = Result<T, DogrunError>;

/// Message shared by every authentication failure
pub const AUTHENTICATION_FAILED: &str = "Could not validate credentials";

/// One rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct InvalidField {
    pub field: &'static str,
    pub reason: String,
}

impl InvalidField {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Dogrun-specific error variants
#[derive(Debug, Error)]
pub enum DogrunError {
    /// Malformed input; `details` maps field name to reason
    #[error("{message}")]
    Validation {
        message: String,
        details: BTreeMap<String, String>,
    },

    /// Bad credentials, bad token or unknown subject
    #[error("Could not validate credentials")]
    Authentication,

    /// Caller lacks rights. Reserved: ownership failures report `NotFound`
    #[error("Access denied")]
    Authorization,

    /// Entity absent or not owned by the caller
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Duplicate unique value
    #[error("{0}")]
    Conflict(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Upload rejected by size or type
    #[error("{message}")]
    FileUpload {
        message: String,
        details: BTreeMap<String, String>,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DogrunError {
    /// Validation failure for a single field
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        DogrunError::Validation {
            message: format!("Invalid {}", field),
            details: BTreeMap::from([(field.to_string(), reason.into())]),
        }
    }

    /// Registration with an email that is already taken
    pub fn email_taken() -> Self {
        DogrunError::Conflict("Email is already registered".to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DogrunError::Validation { .. } | DogrunError::FileUpload { .. } => {
                ErrorKind::BadRequest
            }
            DogrunError::Authentication => ErrorKind::Unauthorized,
            DogrunError::Authorization => ErrorKind::Forbidden,
            DogrunError::NotFound(_) => ErrorKind::NotFound,
            DogrunError::Conflict(_) => ErrorKind::Conflict,
            DogrunError::Database(_) | DogrunError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures are reported with a generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            DogrunError::Validation { message, details }
            | DogrunError::FileUpload { message, details } => {
                AppError::new(self.kind(), message.clone()).with_details(
                    details
                        .iter()
                        .map(|(field, reason)| (field.clone(), serde_json::Value::from(reason.as_str()))),
                )
            }
            DogrunError::Authentication => AppError::unauthorized(AUTHENTICATION_FAILED)
                .with_action("Sign in again to obtain a new access token"),
            DogrunError::Database(_) => AppError::internal("Database error"),
            DogrunError::Internal(_) => AppError::internal("Internal error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DogrunError::Database(e) => {
                tracing::error!(error = %e, "Dogrun database error");
            }
            DogrunError::Internal(msg) => {
                tracing::error!(message = %msg, "Dogrun internal error");
            }
            DogrunError::Authentication => {
                tracing::warn!("Authentication failed");
            }
            DogrunError::Authorization => {
                tracing::warn!("Authorization failed");
            }
            _ => {
                tracing::debug!(error = %self, "Dogrun error");
            }
        }
    }
}

impl IntoResponse for DogrunError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<InvalidField> for DogrunError {
    fn from(err: InvalidField) -> Self {
        DogrunError::invalid(err.field, err.reason)
    }
}

impl From<platform::upload::UploadError> for DogrunError {
    fn from(err: platform::upload::UploadError) -> Self {
        use platform::upload::UploadError;

        let reason = match &err {
            UploadError::Empty => "empty",
            UploadError::TooLarge { .. } => "too_large",
            UploadError::UnsupportedType(_) | UploadError::MissingContentType => {
                "unsupported_type"
            }
        };

        DogrunError::FileUpload {
            message: err.to_string(),
            details: BTreeMap::from([("file".to_string(), reason.to_string())]),
        }
    }
}

impl From<platform::password::PasswordHashError> for DogrunError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        DogrunError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for DogrunError {
    fn from(err: platform::token::TokenError) -> Self {
        DogrunError::Internal(err.to_string())
    }
}

impl From<std::io::Error> for DogrunError {
    fn from(err: std::io::Error) -> Self {
        DogrunError::Internal(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for DogrunError {
    fn from(err: serde_json::Error) -> Self {
        DogrunError::Internal(format!("Serialization error: {}", err))
    }
}

impl From<crate::domain::value_object::entry_pass::InvalidEntryPass> for DogrunError {
    fn from(err: crate::domain::value_object::entry_pass::InvalidEntryPass) -> Self {
        DogrunError::invalid("qrData", err.to_string())
    }
}

// ============================================================================
// Extractor rejections
// ============================================================================

fn malformed_request(message: &str, part: &str, reason: String) -> DogrunError {
    DogrunError::Validation {
        message: message.to_string(),
        details: BTreeMap::from([(part.to_string(), reason)]),
    }
}

impl From<JsonRejection> for DogrunError {
    fn from(rejection: JsonRejection) -> Self {
        malformed_request("Invalid request body", "body", rejection.body_text())
    }
}

impl From<QueryRejection> for DogrunError {
    fn from(rejection: QueryRejection) -> Self {
        malformed_request("Invalid query string", "query", rejection.body_text())
    }
}

/// Non-id path segments only; unparsable ids go through `ResourceId`
impl From<PathRejection> for DogrunError {
    fn from(rejection: PathRejection) -> Self {
        malformed_request("Invalid path parameter", "path", rejection.body_text())
    }
}
