//! Middleware Module
//!
//! This module contains the HTTP middleware for the server.
//!
//! - **`auth`** - The authentication gate protecting blog routes

pub mod auth;

pub use auth::{auth_middleware, AuthenticatedUser, AuthUser};
