/**
 * Get Post Handler
 *
 * This module implements the fetch-one handler for GET /api/v1/blog/{id}.
 * Reads require authentication but are not ownership-restricted.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::blog::posts::{self, Post};
use crate::error::ApiError;

/// Get post handler
///
/// A syntactically invalid id is treated the same as an absent row.
///
/// # Errors
///
/// * `403 Forbidden` - Rejected by the auth gate before this handler runs
/// * `404 Not Found` - If no post has this id
/// * `500 Internal Server Error` - If the lookup fails
pub async fn get_post(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    tracing::info!("Fetching blog with id: {}", id);

    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Blog not found"))?;

    let post = posts::get_post_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Blog not found"))?;

    Ok(Json(post))
}
