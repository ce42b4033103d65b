//! HTTP router setup.

use crate::handlers;
use crate::middleware::{inject_request_id, require_session};
use crate::state::AppState;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the application router.
///
/// The session guard wraps each mutating route individually so that
/// `GET /posts` stays public while `POST /posts` requires a token.
pub fn create(state: Arc<AppState>) -> Router {
    let guard = || from_fn_with_state(state.clone(), require_session);

    let router = Router::new()
        .route("/auth/request_nonce", post(handlers::request_nonce))
        .route("/auth/verify", post(handlers::verify))
        .route(
            "/posts",
            get(handlers::list_posts).merge(post(handlers::create_post).route_layer(guard())),
        )
        .route(
            "/posts/{post_id}/replies",
            post(handlers::create_reply).route_layer(guard()),
        )
        .route(
            "/posts/{post_id}/upvote",
            post(handlers::upvote).route_layer(guard()),
        )
        .route(
            "/posts/{post_id}/downvote",
            post(handlers::downvote).route_layer(guard()),
        )
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(from_fn_with_state(state.clone(), inject_request_id))
        .layer(TraceLayer::new_for_http());

    let router = if state.config.allow_any_origin {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}
