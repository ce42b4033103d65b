//! # Wallet Forum Server
//!
//! In-memory forum backend with wallet-signature login. Clients request a
//! nonce, sign `Login nonce: {nonce}` with their wallet, and exchange the
//! signature for a bearer token that gates every mutating endpoint.
//!
//! ## Quick Start
//! ```bash
//! cargo run --bin forum-server
//! ```
//!
//! ## Endpoints
//! - `POST /auth/request_nonce` - Issue a login nonce
//! - `POST /auth/verify` - Exchange a signed nonce for a session token
//! - `GET /posts` - List all posts with replies
//! - `POST /posts` - Create a post (token)
//! - `POST /posts/{post_id}/replies` - Reply to a post (token)
//! - `POST /posts/{post_id}/upvote` - Upvote a post (token)
//! - `POST /posts/{post_id}/downvote` - Downvote a post (token)
//! - `GET /health` - Health check with counters
//! - `GET /metrics` - Prometheus metrics

pub mod config;
mod error;
mod handlers;
pub mod metrics;
mod middleware;
mod response;
mod schemas;
mod router;
pub mod store;
mod state;

pub use config::Config;
pub use error::Error;
pub use middleware::{Identity, RequestId};
pub use router::create as create_router;
pub use state::AppState;
pub use store::PostStore;
