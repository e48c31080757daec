//! Common test utilities
//!
//! Builds a `TestServer` around the real router. The database pool
//! connects lazily, so tests that never reach the persistence layer
//! (auth-gate rejections, validation failures) run without a database.

use axum_test::TestServer;
use sqlx::PgPool;
use uuid::Uuid;

use inkpost::routes::create_router;
use inkpost::server::state::AppState;

/// Signing secret used by all test tokens
pub const TEST_SECRET: &str = "inkpost-test-secret";

/// Create a test server over the full application router
pub fn test_server() -> TestServer {
    let pool = PgPool::connect_lazy("postgres://postgres@localhost/inkpost_test")
        .expect("Failed to create lazy test pool");
    let state = AppState::new(pool, TEST_SECRET.to_string());
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

/// Issue a valid token for an arbitrary user id
pub fn token_for(user_id: Uuid) -> String {
    inkpost::auth::sessions::create_token(user_id, TEST_SECRET)
        .expect("Failed to create test token")
}
