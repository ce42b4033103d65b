//! Application state shared across handlers.

use crate::config::Config;
use crate::store::PostStore;
use forum_auth::Authenticator;
use std::sync::atomic::AtomicU64;
use std::time::Instant;

/// Shared application state. Everything lives in memory and is dropped on
/// shutdown.
pub struct AppState {
    pub config: Config,
    pub auth: Authenticator,
    pub posts: PostStore,
    pub start_time: Instant,
    pub request_count: AtomicU64,
}

impl AppState {
    /// Create empty stores for `config`.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            auth: Authenticator::new(),
            posts: PostStore::new(),
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }
}
