/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the signup
 * and signin handlers.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Contains the name, email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's display name
    pub name: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Sign in request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct SigninRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against the stored hash)
    pub password: String,
}

/// Auth response
///
/// Returned by the signup and signin handlers. Contains a status message
/// and the JWT token for subsequent authenticated requests.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Human-readable status message
    pub message: String,
    /// JWT token for authentication (30-day expiration)
    pub token: String,
}
