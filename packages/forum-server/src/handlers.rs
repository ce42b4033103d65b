//! HTTP request handlers.

use crate::metrics::{Gauges, METRICS};
use crate::middleware::Identity;
use crate::response::{
    HealthResponse, NonceResponse, PostResponse, PostsResponse, ReplyResponse, TokenResponse,
};
use crate::schemas::{ContentRequest, NonceRequest, VerifyRequest};
use crate::state::AppState;
use crate::store::Vote;
use crate::Error;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::de::DeserializeOwned;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

/// Decode a JSON body. An empty body reads as `{}` so that absent fields
/// produce the endpoint's own missing-field error.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| Error::MalformedBody(e.to_string()))
}

/// Issue a login nonce. `POST /auth/request_nonce`
pub async fn request_nonce(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<NonceResponse>, Error> {
    let request: NonceRequest = parse_body(&body)?;
    let nonce = state
        .auth
        .request_nonce(request.wallet_address.as_deref())?;
    METRICS.nonces_issued.fetch_add(1, Ordering::Relaxed);
    Ok(Json(NonceResponse { nonce }))
}

/// Exchange a signed nonce for a session token. `POST /auth/verify`
pub async fn verify(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<TokenResponse>, Error> {
    let start = std::time::Instant::now();
    let request: VerifyRequest = parse_body(&body)?;

    let result = state.auth.verify(
        request.wallet_address.as_deref(),
        request.signature.as_deref(),
    );
    METRICS.record_verify_duration(start);

    match result {
        Ok(token) => {
            METRICS.login_success.fetch_add(1, Ordering::Relaxed);
            Ok(Json(TokenResponse { token }))
        }
        Err(e) => {
            METRICS.login_failed.fetch_add(1, Ordering::Relaxed);
            Err(e.into())
        }
    }
}

/// Public listing of every post in creation order. `GET /posts`
pub async fn list_posts(State(state): State<Arc<AppState>>) -> Json<PostsResponse> {
    Json(PostsResponse {
        posts: state.posts.list(),
    })
}

/// `POST /posts`
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Extension(Identity(author)): Extension<Identity>,
    body: Bytes,
) -> Result<Json<PostResponse>, Error> {
    let content = parse_body::<ContentRequest>(&body)?.into_content()?;
    let post = state.posts.create_post(&author, content);
    METRICS.posts_created.fetch_add(1, Ordering::Relaxed);
    info!(post_id = %post.id, author = %author, "Post created");
    Ok(Json(PostResponse { post }))
}

/// Content is checked before the post lookup. `POST /posts/{post_id}/replies`
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Extension(Identity(author)): Extension<Identity>,
    Path(post_id): Path<String>,
    body: Bytes,
) -> Result<Json<ReplyResponse>, Error> {
    let content = parse_body::<ContentRequest>(&body)?.into_content()?;
    let reply = state
        .posts
        .add_reply(&post_id, &author, content)
        .inspect_err(|_| warn!(post_id = %post_id, "Reply to unknown post"))?;
    METRICS.replies_created.fetch_add(1, Ordering::Relaxed);
    info!(post_id = %post_id, reply_id = %reply.id, author = %author, "Reply created");
    Ok(Json(ReplyResponse { reply }))
}

/// `POST /posts/{post_id}/upvote`
pub async fn upvote(
    State(state): State<Arc<AppState>>,
    Extension(Identity(voter)): Extension<Identity>,
    Path(post_id): Path<String>,
) -> Result<Json<PostResponse>, Error> {
    cast_vote(&state, &voter, &post_id, Vote::Up)
}

/// `POST /posts/{post_id}/downvote`
pub async fn downvote(
    State(state): State<Arc<AppState>>,
    Extension(Identity(voter)): Extension<Identity>,
    Path(post_id): Path<String>,
) -> Result<Json<PostResponse>, Error> {
    cast_vote(&state, &voter, &post_id, Vote::Down)
}

/// Votes are not recorded per voter; every call counts.
fn cast_vote(
    state: &AppState,
    voter: &forum_types::WalletAddress,
    post_id: &str,
    vote: Vote,
) -> Result<Json<PostResponse>, Error> {
    let post = state.posts.vote(post_id, vote)?;
    let counter = match vote {
        Vote::Up => &METRICS.upvotes,
        Vote::Down => &METRICS.downvotes,
    };
    counter.fetch_add(1, Ordering::Relaxed);
    info!(post_id = %post_id, voter = %voter, vote = ?vote, "Vote cast");
    Ok(Json(PostResponse { post }))
}

/// Health check with uptime and store sizes.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.start_time.elapsed().as_secs(),
        requests: state.request_count.load(Ordering::Relaxed),
        posts: state.posts.len(),
        sessions: state.auth.sessions.len(),
    })
}

/// Prometheus metrics in text exposition format.
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = METRICS.render(&Gauges {
        posts: state.posts.len(),
        sessions: state.auth.sessions.len(),
        pending_nonces: state.auth.nonces.len(),
    });
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4",
        )],
        body,
    )
}
