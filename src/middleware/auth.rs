/**
 * Authentication Middleware
 *
 * This module provides the auth gate protecting the blog resource
 * routes. It extracts the token from the Authorization header, verifies
 * it, and binds the resolved user id into the request extensions for
 * downstream handlers.
 *
 * Verification is self-contained: token claims carry everything needed,
 * so there is no database access here. A verification failure is
 * terminal for the request and is never retried.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    /// Verified user id
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the `Authorization` header (empty string if absent)
/// 2. Strips an optional `Bearer ` prefix
/// 3. Verifies the token with the configured secret
/// 4. Attaches [`AuthenticatedUser`] to the request extensions
///
/// Returns 403 Forbidden with a JSON error body when the token is
/// missing, malformed, expired, or carries a bad signature; the
/// downstream handler is not invoked in that case.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    // Accept both "Bearer <token>" and a bare token
    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    let claims = verify_token(token, &state.jwt_secret).map_err(|e| {
        tracing::warn!("Token verification failed: {:?}", e);
        ApiError::authentication("You are not logged in")
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user id in token: {:?}", e);
        ApiError::authentication("You are not logged in")
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter to read the identity bound by
/// [`auth_middleware`]. Rejects with 403 if the middleware did not run.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::authentication("You are not logged in")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn empty_parts() -> Parts {
        Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_extract_authenticated_user() {
        let mut parts = empty_parts();
        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
        };
        parts.extensions.insert(user.clone());

        let extracted = AuthUser::from_request_parts(&mut parts, &()).await;
        assert_eq!(extracted.unwrap().0.user_id, user.user_id);
    }

    #[tokio::test]
    async fn test_extract_authenticated_user_missing() {
        let mut parts = empty_parts();

        let extracted = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(extracted.is_err());
    }
}
