//! Inkpost - Main Library
//!
//! Inkpost is a minimal blogging backend built on Axum and PostgreSQL:
//! user signup/signin with bcrypt password hashing and JWT issuance, and
//! create/update/fetch/list operations over blog posts scoped to an
//! authenticated author.
//!
//! # Module Structure
//!
//! - **`auth`** - User registration, authentication, and session tokens
//! - **`blog`** - Post model, pagination, and the resource handlers
//! - **`middleware`** - The auth gate protecting blog routes
//! - **`validation`** - Request body validation with per-field errors
//! - **`error`** - API error taxonomy and HTTP response conversion
//! - **`routes`** - Route tables and router assembly
//! - **`server`** - Configuration, application state, initialization
//!
//! # Request Flow
//!
//! ```text
//! request → auth gate (blog routes only) → handler → validation
//!         → persistence (PgPool) → response
//! ```
//!
//! Signup/signin bypass the gate (they establish identity): validation →
//! bcrypt hash/verify → persistence → token issuance → response.

/// User registration, authentication, and session tokens
pub mod auth;

/// Blog posts: model, pagination, handlers
pub mod blog;

/// API error taxonomy
pub mod error;

/// HTTP middleware (the auth gate)
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server configuration, state, and initialization
pub mod server;

/// Request body validation
pub mod validation;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState, Config};
