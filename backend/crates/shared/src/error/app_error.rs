//! Application Error
//!
//! Domain crates keep their own `thiserror` enums and convert into
//! [`AppError`] at the HTTP boundary. Only caller-safe text lives here:
//! internal causes are logged by the domain crate before conversion.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::BadRequest, "Invalid phoneNumber")
///     .with_detail("phoneNumber", "invalid format");
/// assert_eq!(err.status_code(), 400);
/// assert_eq!(err.details()["phoneNumber"], "invalid format");
/// ```
#[derive(Debug, Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    details: BTreeMap<String, Value>,
}

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            details: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// ユーザー向けアクションを設定
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Later calls with the same key overwrite earlier ones.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn with_details<I, K>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.details
            .extend(details.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[inline]
    pub fn details(&self) -> &BTreeMap<String, Value> {
        &self.details
    }

    /// RFC 7807 problem document
    pub fn problem_body(&self) -> Value {
        let mut body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind.title(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });
        if !self.details.is_empty() {
            body["details"] = Value::Object(
                self.details
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            );
        }
        body
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "Dog not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Dog not found");
        assert!(err.action().is_none());
        assert!(err.details().is_empty());
    }

    #[test]
    fn test_details_builder() {
        let err = AppError::new(ErrorKind::BadRequest, "Validation failed")
            .with_detail("field", "phoneNumber")
            .with_detail("field", "email")
            .with_details([("dogWeight", Value::from("out of range"))]);

        assert_eq!(err.details().len(), 2);
        assert_eq!(err.details()["field"], "email");
        assert_eq!(err.details()["dogWeight"], "out of range");
    }

    #[test]
    fn test_display() {
        let err = AppError::new(ErrorKind::Conflict, "Email is already registered");
        assert_eq!(err.to_string(), "[Conflict] Email is already registered");

        let err = AppError::unauthorized("Could not validate credentials")
            .with_action("Sign in again");
        assert!(err.to_string().ends_with("(Action: Sign in again)"));
    }

    #[test]
    fn test_problem_body_shape() {
        let body = AppError::internal("Internal error").problem_body();
        assert_eq!(body["status"], 500);
        assert_eq!(body["title"], "Internal Server Error");
        assert_eq!(body["detail"], "Internal error");
        assert!(body["action"].is_null());
        assert!(body.get("details").is_none());

        let body = AppError::new(ErrorKind::BadRequest, "Invalid email")
            .with_detail("email", "invalid format")
            .problem_body();
        assert_eq!(body["details"]["email"], "invalid format");
    }
}
