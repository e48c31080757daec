//! Error Module
//!
//! This module defines the API error taxonomy and its conversion to HTTP
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError definition and constructors
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! All handlers return `Result<_, ApiError>`; errors propagate with `?`
//! and are converted to JSON responses at the framework boundary.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
