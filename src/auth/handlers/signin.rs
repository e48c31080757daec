/**
 * Signin Handler
 *
 * This module implements the user authentication handler for
 * POST /api/v1/user/signin.
 *
 * # Authentication Process
 *
 * 1. Validate the request body (email, password)
 * 2. Look up the user by email
 * 3. Verify the password using bcrypt
 * 4. Generate a JWT token
 * 5. Return the token alongside a success message
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 400 response, so
 *   the API cannot be used to enumerate accounts
 * - Password verification uses constant-time comparison (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, SigninRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::validate_signin;

/// Sign in handler
///
/// Verifies the email and password, and returns a JWT token if
/// authentication succeeds.
///
/// # Errors
///
/// * `400 Bad Request` - If the body fails validation, or the credentials
///   do not match ("Invalid email or password" in both cases)
/// * `500 Internal Server Error` - If the database query or token
///   generation fails
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Signin request for email: {}", request.email);

    validate_signin(&request).map_err(ApiError::validation)?;

    let user = get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Invalid credentials for email: {}", request.email);
            ApiError::InvalidCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid credentials for email: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(user.id, &state.jwt_secret)?;

    tracing::info!("User signed in successfully: {}", user.email);

    Ok(Json(AuthResponse {
        message: "User signed in successfully".to_string(),
        token,
    }))
}
