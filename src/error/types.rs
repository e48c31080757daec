/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP API.
 * Every failure a handler can produce is represented here and can be
 * converted to an HTTP response.
 *
 * # Error Categories
 *
 * - `Validation` - request body failed schema validation, 400 with
 *   per-field messages
 * - `InvalidCredentials` - signin failed, 400 (email and password
 *   failures are indistinguishable)
 * - `Authentication` - missing/invalid/expired token, 403
 * - `NotFound` - resource absent (or not owned by the caller), 404
 * - `Conflict` - unique constraint violated (duplicate email), 409
 * - `Database` / `Token` / `Hash` - infrastructure failures, 500 with a
 *   generic message; the underlying error is logged, never returned
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::validation::FieldError;

/// API error type
///
/// This enum represents all possible errors that can occur while serving
/// a request. Each variant maps to an HTTP status code and a JSON error
/// body via the `IntoResponse` implementation in `conversion.rs`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation
    ///
    /// Carries the machine-readable list of per-field violations that is
    /// serialized into the response body.
    #[error("validation failed")]
    Validation {
        /// Per-field violations (field path + message)
        errors: Vec<FieldError>,
    },

    /// Signin failed
    ///
    /// Unknown email and wrong password both collapse into this variant so
    /// the response cannot be used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Caller is not authenticated (missing, malformed, or expired token)
    #[error("{message}")]
    Authentication {
        /// Human-readable error message
        message: String,
    },

    /// Resource absent, or not owned by the caller
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Unique constraint violated (e.g. duplicate email at signup)
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Database failure not otherwise classified
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JWT signing or verification failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ApiError {
    /// Create a validation error from a list of field violations
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    /// Create an authentication error (403)
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a conflict error (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Authentication { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) | Self::Token(_) | Self::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::validation(vec![FieldError::new("title", "Title is required")]);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_credentials_status() {
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_authentication_error_status() {
        let error = ApiError::authentication("You are not logged in");
        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::not_found("Blog not found");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_status() {
        let error = ApiError::conflict("Email already registered");
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_status() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
