//! Blog Handlers Module
//!
//! This module contains the HTTP handlers for the blog resource
//! endpoints. All of them sit behind the auth gate.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── create.rs   - Create post handler
//! ├── update.rs   - Update post handler (author-scoped)
//! ├── get.rs      - Fetch single post handler
//! └── list.rs     - Paginated list handler
//! ```
//!
//! # Handlers
//!
//! - **`create_post`** - POST /api/v1/blog
//! - **`update_post`** - PUT /api/v1/blog
//! - **`get_post`** - GET /api/v1/blog/{id}
//! - **`list_posts`** - GET /api/v1/blog/bulk

/// Request and response types
pub mod types;

/// Create post handler
pub mod create;

/// Update post handler
pub mod update;

/// Get post handler
pub mod get;

/// List posts handler
pub mod list;

// Re-export commonly used types
pub use types::{
    BlogListResponse, CreatePostRequest, CreatePostResponse, ListQuery, UpdatePostRequest,
    UpdatePostResponse,
};

// Re-export handlers
pub use create::create_post;
pub use get::get_post;
pub use list::list_posts;
pub use update::update_post;
