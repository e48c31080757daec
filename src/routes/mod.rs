//! Route Configuration Module
//!
//! This module configures the HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - User and blog route tables
//! ```
//!
//! # Route Organization
//!
//! User routes (signup/signin) are public; blog routes are wrapped in
//! the auth gate, which rejects unauthenticated requests with 403 before
//! any handler runs.

/// Main router creation
pub mod router;

/// API endpoint route tables
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
