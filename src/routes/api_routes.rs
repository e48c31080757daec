/**
 * API Route Handlers
 *
 * This module defines the route tables for the API endpoints.
 *
 * # Routes
 *
 * ## User (public)
 * - `POST /api/v1/user/signup` - User registration
 * - `POST /api/v1/user/signin` - User authentication
 *
 * ## Blog (behind the auth gate)
 * - `GET /api/v1/blog/bulk` - Paginated post list
 * - `GET /api/v1/blog/{id}` - Fetch single post
 * - `POST /api/v1/blog` - Create post
 * - `PUT /api/v1/blog` - Update post (author-scoped)
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth::{signin, signup};
use crate::blog::{create_post, get_post, list_posts, update_post};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Configure the public user routes
///
/// Signup and signin establish identity, so they sit outside the auth
/// gate.
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/v1/user/signup", post(signup))
        .route("/api/v1/user/signin", post(signin))
}

/// Configure the blog resource routes
///
/// Every route here is wrapped in the auth gate: requests without a
/// valid token are rejected with 403 before any handler runs.
pub fn configure_blog_routes(router: Router<AppState>, state: AppState) -> Router<AppState> {
    let blog_routes = Router::new()
        // /bulk is registered before the dynamic {id} route
        .route("/api/v1/blog/bulk", get(list_posts))
        .route("/api/v1/blog/{id}", get(get_post))
        .route("/api/v1/blog", post(create_post).put(update_post))
        // The trailing-slash form is accepted as well
        .route("/api/v1/blog/", post(create_post).put(update_post))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    router.merge(blog_routes)
}
