/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum application:
 * connecting the database pool, running migrations, and assembling the
 * router.
 *
 * Unlike services that can degrade gracefully, this server has no mode
 * without a database: a connection or migration failure aborts startup.
 */

use axum::Router;
use sqlx::PgPool;

use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. Connect the PostgreSQL pool (shared by all requests)
/// 2. Run pending database migrations
/// 3. Build the application state and router
///
/// # Errors
///
/// Returns the underlying `sqlx` error if the connection or a migration
/// fails.
pub async fn create_app(config: Config) -> Result<Router, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    let state = AppState::new(pool, config.jwt_secret);

    Ok(create_router(state))
}
