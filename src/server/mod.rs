//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (database URL, secret, port)
//! └── init.rs         - Pool creation, migrations, app assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. `Config::from_env()` - required variables, hard failure if missing
//! 2. `create_app(config)` - pool + migrations + router

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::Config;
pub use init::create_app;
pub use state::AppState;
