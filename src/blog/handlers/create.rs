/**
 * Create Post Handler
 *
 * This module implements the create handler for POST /api/v1/blog.
 *
 * The author of the new post is the verified identity bound by the auth
 * gate; the request body cannot set it.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::blog::handlers::types::{CreatePostRequest, CreatePostResponse};
use crate::blog::posts;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::validation::validate_create_post;

/// Create post handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body fails validation (per-field errors)
/// * `403 Forbidden` - Rejected by the auth gate before this handler runs
/// * `500 Internal Server Error` - If the insert fails
pub async fn create_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<CreatePostResponse>, ApiError> {
    validate_create_post(&request).map_err(ApiError::validation)?;

    let post = posts::insert_post(&pool, &request.title, &request.content, user.user_id).await?;

    tracing::info!("Blog created: {} by {}", post.id, user.user_id);

    Ok(Json(CreatePostResponse { id: post.id }))
}
