//! Blog Module
//!
//! This module handles blog posts: the data model, database operations,
//! pagination, and the HTTP handlers for the resource endpoints.
//!
//! # Module Structure
//!
//! ```text
//! blog/
//! ├── mod.rs          - Module exports
//! ├── posts.rs        - Post model and database operations
//! ├── pagination.rs   - Page/limit clamping and metadata
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── create.rs   - Create post handler
//!     ├── update.rs   - Update post handler
//!     ├── get.rs      - Fetch single post handler
//!     └── list.rs     - Paginated list handler
//! ```
//!
//! # Ownership
//!
//! A post's `author_id` is set exactly once, from the verified identity of
//! the request that created it. Updates are constrained to
//! `(id, author_id)` inside the SQL statement, so "not found" and "not
//! yours" are indistinguishable to the caller.

/// Post data model and database operations
pub mod posts;

/// Pagination parameters and metadata
pub mod pagination;

/// HTTP handlers for blog endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{create_post, get_post, list_posts, update_post};
pub use pagination::{PageMeta, PageParams};
pub use posts::Post;
