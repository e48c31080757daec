/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the route tables into a single Axum router.
 *
 * # Route Order
 *
 * 1. Welcome route (`GET /`)
 * 2. User routes (signup/signin, public)
 * 3. Blog routes (wrapped in the auth gate)
 * 4. Fallback handler (404)
 *
 * The whole router is wrapped in `TraceLayer` for request-level logging.
 */

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::api_routes::{configure_blog_routes, configure_user_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state (database pool + token secret)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(welcome));

    // Public user routes
    let router = configure_user_routes(router);

    // Blog routes behind the auth gate
    let router = configure_blog_routes(router, state.clone());

    router
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Welcome handler for `GET /`
async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Inkpost API"
    }))
}

/// Fallback handler for unknown routes
async fn fallback() -> ApiError {
    ApiError::not_found("Not found")
}
