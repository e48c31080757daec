/**
 * Post Model and Database Operations
 *
 * This module handles blog post data and database operations. Ownership
 * is enforced at the query level: the update statement filters on
 * `(id, author_id)` in one statement, so there is no fetch-then-compare
 * window and an unowned post is indistinguishable from an absent one.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Post struct representing a blog post in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID (UUID)
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// Post content
    pub content: String,
    /// ID of the user who created the post (immutable after creation)
    pub author_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new post
///
/// `author_id` comes from the verified identity of the request, never
/// from client-supplied input.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `title` - Post title
/// * `content` - Post content
/// * `author_id` - Verified identity of the caller
///
/// # Returns
/// Created post or error
pub async fn insert_post(
    pool: &PgPool,
    title: &str,
    content: &str,
    author_id: Uuid,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, content, author_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .bind(author_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Update a post, constrained to its author
///
/// The statement matches on `(id, author_id)` so the ownership check is
/// evaluated atomically by the database. `None` fields keep their current
/// value.
///
/// # Returns
/// Number of rows updated: 0 means the post does not exist or does not
/// belong to `author_id` (the two are indistinguishable by design)
pub async fn update_post(
    pool: &PgPool,
    id: Uuid,
    author_id: Uuid,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET title = COALESCE($3, title),
            content = COALESCE($4, content),
            updated_at = $5
        WHERE id = $1 AND author_id = $2
        "#,
    )
    .bind(id)
    .bind(author_id)
    .bind(title)
    .bind(content)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Get post by ID
///
/// Reads are not ownership-restricted.
///
/// # Returns
/// Post or None if not found
pub async fn get_post_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Fetch one page of posts, newest first
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `limit` - Page size
/// * `offset` - Rows to skip, `(page - 1) * limit`
pub async fn list_posts(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Count all posts
pub async fn count_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
