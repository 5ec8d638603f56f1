//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. Each variant corresponds to one member of the error taxonomy
//! the handlers surface, and `AppError` implements
//! `actix_web::error::ResponseError` so handler results convert straight into
//! HTTP responses with JSON bodies.
//!
//! Two pairs of failures are deliberately indistinguishable on the wire:
//! a login against an unknown email and a login with a wrong password share
//! one body (no account enumeration), and a task that does not exist and a
//! task owned by someone else share one body (no owner leakage).

use crate::store::StoreError;
use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// A required input field was missing or empty (HTTP 400).
    Validation,
    /// Signup collided with an existing account's email (HTTP 400).
    DuplicateEmail,
    /// Login failed, for either an unknown email or a wrong password
    /// (HTTP 400). The two causes share this single variant on purpose.
    InvalidCredentials,
    /// No task matched the given owner and task identifiers (HTTP 404).
    NotFound,
    /// The storage backend was unavailable or faulted unexpectedly
    /// (HTTP 500). The detail is logged server-side, never sent to the
    /// client.
    Backend(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation => write!(f, "Missing required fields."),
            AppError::DuplicateEmail => write!(f, "Email already exists."),
            AppError::InvalidCredentials => write!(f, "Invalid email or password."),
            AppError::NotFound => write!(f, "Task not found."),
            AppError::Backend(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// The body shape `{"message": ...}` is the API's error envelope across
/// every endpoint.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation => HttpResponse::BadRequest().json(json!({
                "message": "Missing required fields."
            })),
            AppError::DuplicateEmail => HttpResponse::BadRequest().json(json!({
                "message": "Email already exists."
            })),
            AppError::InvalidCredentials => HttpResponse::BadRequest().json(json!({
                "message": "Invalid email or password."
            })),
            AppError::NotFound => HttpResponse::NotFound().json(json!({
                "message": "Task not found."
            })),
            AppError::Backend(msg) => {
                log::error!("backend error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "message": "Internal server error."
                }))
            }
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::Validation`.
///
/// Input validation here is presence-only, so every validation failure
/// collapses to the one missing-fields response.
impl From<ValidationErrors> for AppError {
    fn from(_: ValidationErrors) -> AppError {
        AppError::Validation
    }
}

/// Converts `StoreError` into `AppError`.
///
/// A unique-index collision on signup is a client error; everything else
/// from the store is a backend fault.
impl From<StoreError> for AppError {
    fn from(error: StoreError) -> AppError {
        match error {
            StoreError::DuplicateEmail => AppError::DuplicateEmail,
            StoreError::Closed => AppError::Backend(error.to_string()),
        }
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::Backend`.
///
/// This handles errors during password hashing or verification.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Backend(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_responses() {
        let error = AppError::Validation;
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::DuplicateEmail;
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::InvalidCredentials;
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::NotFound;
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::Backend("store is closed".into());
        assert_eq!(error.error_response().status(), 500);
    }

    #[test]
    fn test_store_error_mapping() {
        let error: AppError = StoreError::DuplicateEmail.into();
        assert!(matches!(error, AppError::DuplicateEmail));

        let error: AppError = StoreError::Closed.into();
        assert!(matches!(error, AppError::Backend(_)));
    }
}
