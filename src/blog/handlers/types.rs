/**
 * Blog Handler Types
 *
 * This module defines the request and response types used by the blog
 * resource handlers.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blog::pagination::PageMeta;
use crate::blog::posts::Post;

/// Create post request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreatePostRequest {
    /// Post title
    pub title: String,
    /// Post content
    pub content: String,
}

/// Update post request
///
/// `id` selects the target post; `title` and `content` are optional and
/// only the present fields are changed. The id arrives as a string and is
/// parsed during validation.
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdatePostRequest {
    /// Target post id
    pub id: String,
    /// New title, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New content, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Create post response: the id of the new post
#[derive(Serialize, Deserialize, Debug)]
pub struct CreatePostResponse {
    /// ID of the created post
    pub id: Uuid,
}

/// Update post response
#[derive(Serialize, Deserialize, Debug)]
pub struct UpdatePostResponse {
    /// Human-readable status message
    pub message: String,
}

/// Raw pagination query parameters for the list endpoint
#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    /// 1-based page number (default 1)
    pub page: Option<i64>,
    /// Page size (default 10, capped)
    pub limit: Option<i64>,
}

/// List response: one page of posts plus pagination metadata
#[derive(Serialize, Deserialize, Debug)]
pub struct BlogListResponse {
    /// The posts on this page (may be empty)
    pub blogs: Vec<Post>,
    /// Pagination metadata
    pub meta: PageMeta,
}
