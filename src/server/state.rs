/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the explicit request context shared by all handlers:
 * the database connection pool (built once at startup, never
 * per-request) and the token signing secret. The verified identity
 * travels separately, in request extensions, bound by the auth gate.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers that only touch the
 * database extract `State<PgPool>` directly instead of the whole
 * `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup
    pub db_pool: PgPool,
    /// Server-side token signing secret
    pub jwt_secret: String,
}

impl AppState {
    /// Create the application state
    pub fn new(db_pool: PgPool, jwt_secret: String) -> Self {
        Self {
            db_pool,
            jwt_secret,
        }
    }
}

/// Allow handlers to extract `State<PgPool>` directly from `AppState`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
