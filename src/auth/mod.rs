//! Authentication Module
//!
//! This module handles user registration, authentication, and session
//! tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     └── signin.rs   - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name + email + password → user created → JWT token returned
//! 2. **Signin**: email + password → credentials verified → JWT token returned
//! 3. Subsequent blog requests carry the token in the `Authorization`
//!    header, where the auth gate verifies it
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are stateless; no session store lookup on verification
//! - Tokens expire after 30 days
//! - Invalid credentials return a single indistinguishable 400 response

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, SigninRequest, SignupRequest};
pub use handlers::{signin, signup};
