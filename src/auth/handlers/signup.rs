/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/v1/user/signup.
 *
 * # Registration Process
 *
 * 1. Validate the request body (name, email, password)
 * 2. Hash the password using bcrypt
 * 3. Create the user in the database
 * 4. Generate a JWT token embedding the new user's id
 * 5. Return the token alongside a success message
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 * - A duplicate email is detected from the unique-constraint violation on
 *   the INSERT itself (no separate existence check), and answered with 409
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::create_user;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::validate_signup;

/// Sign up handler
///
/// Validates the input, creates a new user account, and returns a JWT
/// token for immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - If the body fails validation (per-field errors)
/// * `409 Conflict` - If a user with this email already exists
/// * `500 Internal Server Error` - If hashing, user creation, or token
///   generation fails
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Signup request for email: {}", request.email);

    validate_signup(&request).map_err(ApiError::validation)?;

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(&state.db_pool, &request.name, &request.email, &password_hash)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
                tracing::warn!("Email already registered: {}", request.email);
                ApiError::conflict("Email already registered")
            } else {
                ApiError::Database(e)
            }
        })?;

    let token = create_token(user.id, &state.jwt_secret)?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok(Json(AuthResponse {
        message: "User created successfully".to_string(),
        token,
    }))
}
