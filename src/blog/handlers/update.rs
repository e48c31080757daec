/**
 * Update Post Handler
 *
 * This module implements the update handler for PUT /api/v1/blog.
 *
 * Authorization is enforced by the update statement itself: it matches on
 * `(id, author_id)`, so a post that exists but belongs to someone else
 * produces the same 404 as a post that does not exist.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::blog::handlers::types::{UpdatePostRequest, UpdatePostResponse};
use crate::blog::posts;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::validation::validate_update_post;

/// Update post handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body fails validation (per-field errors)
/// * `403 Forbidden` - Rejected by the auth gate before this handler runs
/// * `404 Not Found` - If no post matches `(id, caller)`; absent and
///   not-owned are indistinguishable
/// * `500 Internal Server Error` - If the update fails
pub async fn update_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<UpdatePostResponse>, ApiError> {
    let update = validate_update_post(request).map_err(ApiError::validation)?;

    let rows = posts::update_post(
        &pool,
        update.id,
        user.user_id,
        update.title.as_deref(),
        update.content.as_deref(),
    )
    .await?;

    if rows == 0 {
        tracing::warn!("Update matched no rows: {} by {}", update.id, user.user_id);
        return Err(ApiError::not_found("Blog not found"));
    }

    tracing::info!("Blog updated: {} by {}", update.id, user.user_id);

    Ok(Json(UpdatePostResponse {
        message: "updated post".to_string(),
    }))
}
