/**
 * Request Body Validation
 *
 * This module validates the shape of incoming request payloads before any
 * handler logic or persistence call runs. Each operation has an explicit
 * validation function returning a discriminated result: `Ok` with the
 * parsed value, or `Err` with the list of per-field violations that is
 * serialized into the 400 response.
 *
 * # Validated Operations
 *
 * - `validate_signup` - name, email, password
 * - `validate_signin` - email, password
 * - `validate_create_post` - title, content
 * - `validate_update_post` - id (parsed to UUID), optional title/content
 *
 * A validation failure short-circuits the handler: no persistence call is
 * attempted.
 */

use serde::Serialize;
use uuid::Uuid;

use crate::auth::handlers::types::{SigninRequest, SignupRequest};
use crate::blog::handlers::types::{CreatePostRequest, UpdatePostRequest};

/// Minimum accepted password length at signup
pub const MIN_PASSWORD_LEN: usize = 8;

/// A single field-level validation violation
///
/// Serialized into the 400 response body as `{"field": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path of the offending field in the request body
    pub field: String,
    /// Human-readable violation message
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a signup request
///
/// Requires a non-empty `name`, an email that contains `@`, and a password
/// of at least [`MIN_PASSWORD_LEN`] characters.
pub fn validate_signup(request: &SignupRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if request.name.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if request.email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !request.email.contains('@') {
        errors.push(FieldError::new("email", "Invalid email format"));
    }
    if request.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if request.password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 8 characters",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a signin request
///
/// Requires non-empty `email` and `password`. Format checks are left to
/// the credential comparison itself.
pub fn validate_signin(request: &SigninRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if request.email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    }
    if request.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a create-post request
pub fn validate_create_post(request: &CreatePostRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if request.title.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if request.content.is_empty() {
        errors.push(FieldError::new("content", "Content is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A validated update-post request with the id parsed to a UUID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePost {
    /// Target post id
    pub id: Uuid,
    /// New title, if the request carries one
    pub title: Option<String>,
    /// New content, if the request carries one
    pub content: Option<String>,
}

/// Validate an update-post request
///
/// Requires a non-empty `id` that parses as a UUID; `title` and `content`
/// are optional but must be non-empty when present. Returns the parsed
/// update on success.
pub fn validate_update_post(request: UpdatePostRequest) -> Result<UpdatePost, Vec<FieldError>> {
    let mut errors = Vec::new();

    let id = if request.id.is_empty() {
        errors.push(FieldError::new("id", "ID is required"));
        None
    } else {
        match Uuid::parse_str(&request.id) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(FieldError::new("id", "ID must be a valid UUID"));
                None
            }
        }
    };

    if matches!(request.title.as_deref(), Some("")) {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if matches!(request.content.as_deref(), Some("")) {
        errors.push(FieldError::new("content", "Content is required"));
    }

    match (id, errors.is_empty()) {
        (Some(id), true) => Ok(UpdatePost {
            id,
            title: request.title,
            content: request.content,
        }),
        _ => Err(errors),
    }
}
