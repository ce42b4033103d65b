//! Response types for the forum API.

use forum_types::{Post, Reply};
use serde::Serialize;

/// Response from `POST /auth/request_nonce`.
#[derive(Serialize)]
pub struct NonceResponse {
    pub nonce: String,
}

/// Response from `POST /auth/verify`.
#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response carrying a single post (create, upvote, downvote).
#[derive(Serialize)]
pub struct PostResponse {
    pub post: Post,
}

#[derive(Serialize)]
pub struct ReplyResponse {
    pub reply: Reply,
}

#[derive(Serialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// Response from the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    pub requests: u64,
    pub posts: usize,
    pub sessions: usize,
}
