//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── signin.rs   - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/user/signup - User registration
//! - **`signin`** - POST /api/v1/user/signin - User authentication

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

// Re-export commonly used types
pub use types::{AuthResponse, SigninRequest, SignupRequest};

// Re-export handlers
pub use signin::signin;
pub use signup::signup;
