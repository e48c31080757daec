/**
 * List Posts Handler
 *
 * This module implements the paginated list handler for
 * GET /api/v1/blog/bulk?page=N&limit=M.
 *
 * An empty page is a valid result: the response is 200 with an empty
 * `blogs` array and accurate metadata.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use sqlx::PgPool;

use crate::blog::handlers::types::{BlogListResponse, ListQuery};
use crate::blog::pagination::{PageMeta, PageParams};
use crate::blog::posts;
use crate::error::ApiError;

/// List posts handler
///
/// Parses `page` (default 1) and `limit` (default 10) from the query
/// string, clamps them to sane bounds, and returns the slice plus
/// `{totalCount, totalPages, currentPage, pageSize}`.
///
/// # Errors
///
/// * `403 Forbidden` - Rejected by the auth gate before this handler runs
/// * `500 Internal Server Error` - If either query fails
pub async fn list_posts(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> Result<Json<BlogListResponse>, ApiError> {
    let params = PageParams::from_query(query.page, query.limit);

    tracing::info!(
        "Fetching blogs page {} (limit {})",
        params.page,
        params.limit
    );

    let blogs = posts::list_posts(&pool, params.limit, params.offset()).await?;
    let total_count = posts::count_posts(&pool).await?;

    Ok(Json(BlogListResponse {
        blogs,
        meta: PageMeta::new(total_count, params),
    }))
}
