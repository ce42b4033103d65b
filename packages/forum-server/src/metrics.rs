//! Prometheus metrics (lock-free atomics, zero allocation on hot path).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

pub static METRICS: Metrics = Metrics::new();

pub struct Metrics {
    // --- Login ---
    pub nonces_issued: AtomicU64,
    pub login_success: AtomicU64,
    pub login_failed: AtomicU64,
    pub unauthorized: AtomicU64,

    // --- Verify latency (μs, max updated via CAS) ---
    pub verify_duration_us_sum: AtomicU64,
    pub verify_duration_us_max: AtomicU64,

    // --- Forum ---
    pub posts_created: AtomicU64,
    pub replies_created: AtomicU64,
    pub upvotes: AtomicU64,
    pub downvotes: AtomicU64,
}

/// Point-in-time store sizes reported as gauges.
pub struct Gauges {
    pub posts: usize,
    pub sessions: usize,
    pub pending_nonces: usize,
}

impl Metrics {
    const fn new() -> Self {
        Self {
            nonces_issued: AtomicU64::new(0),
            login_success: AtomicU64::new(0),
            login_failed: AtomicU64::new(0),
            unauthorized: AtomicU64::new(0),
            verify_duration_us_sum: AtomicU64::new(0),
            verify_duration_us_max: AtomicU64::new(0),
            posts_created: AtomicU64::new(0),
            replies_created: AtomicU64::new(0),
            upvotes: AtomicU64::new(0),
            downvotes: AtomicU64::new(0),
        }
    }

    pub fn record_verify_duration(&self, start: Instant) {
        let us = start.elapsed().as_micros() as u64;
        self.verify_duration_us_sum.fetch_add(us, Ordering::Relaxed);
        let mut cur = self.verify_duration_us_max.load(Ordering::Relaxed);
        while us > cur {
            match self.verify_duration_us_max.compare_exchange_weak(
                cur,
                us,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(actual) => cur = actual,
            }
        }
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self, gauges: &Gauges) -> String {
        let nonces_issued = self.nonces_issued.load(Ordering::Relaxed);
        let login_success = self.login_success.load(Ordering::Relaxed);
        let login_failed = self.login_failed.load(Ordering::Relaxed);
        let unauthorized = self.unauthorized.load(Ordering::Relaxed);
        let verify_sum = self.verify_duration_us_sum.load(Ordering::Relaxed);
        let verify_max = self.verify_duration_us_max.swap(0, Ordering::Relaxed);
        let posts_created = self.posts_created.load(Ordering::Relaxed);
        let replies_created = self.replies_created.load(Ordering::Relaxed);
        let upvotes = self.upvotes.load(Ordering::Relaxed);
        let downvotes = self.downvotes.load(Ordering::Relaxed);
        let Gauges {
            posts,
            sessions,
            pending_nonces,
        } = gauges;

        // Convert μs to seconds for Prometheus conventions
        let verify_sum_s = verify_sum as f64 / 1_000_000.0;
        let verify_max_s = verify_max as f64 / 1_000_000.0;

        format!(
            "\
# HELP forum_nonces_issued_total Login nonces issued.\n\
# TYPE forum_nonces_issued_total counter\n\
forum_nonces_issued_total {nonces_issued}\n\
# HELP forum_login_success_total Successful signature logins.\n\
# TYPE forum_login_success_total counter\n\
forum_login_success_total {login_success}\n\
# HELP forum_login_failed_total Rejected login attempts.\n\
# TYPE forum_login_failed_total counter\n\
forum_login_failed_total {login_failed}\n\
# HELP forum_unauthorized_total Guarded requests without a valid token.\n\
# TYPE forum_unauthorized_total counter\n\
forum_unauthorized_total {unauthorized}\n\
# HELP forum_verify_duration_seconds_sum Total verify handler time (seconds).\n\
# TYPE forum_verify_duration_seconds_sum counter\n\
forum_verify_duration_seconds_sum {verify_sum_s:.6}\n\
# HELP forum_verify_duration_seconds_max Max verify handler time since last scrape (seconds).\n\
# TYPE forum_verify_duration_seconds_max gauge\n\
forum_verify_duration_seconds_max {verify_max_s:.6}\n\
# HELP forum_posts_created_total Posts created.\n\
# TYPE forum_posts_created_total counter\n\
forum_posts_created_total {posts_created}\n\
# HELP forum_replies_created_total Replies created.\n\
# TYPE forum_replies_created_total counter\n\
forum_replies_created_total {replies_created}\n\
# HELP forum_upvotes_total Upvotes cast.\n\
# TYPE forum_upvotes_total counter\n\
forum_upvotes_total {upvotes}\n\
# HELP forum_downvotes_total Downvotes cast.\n\
# TYPE forum_downvotes_total counter\n\
forum_downvotes_total {downvotes}\n\
# HELP forum_posts Posts currently stored.\n\
# TYPE forum_posts gauge\n\
forum_posts {posts}\n\
# HELP forum_sessions Live session tokens.\n\
# TYPE forum_sessions gauge\n\
forum_sessions {sessions}\n\
# HELP forum_pending_nonces Nonces awaiting verification.\n\
# TYPE forum_pending_nonces gauge\n\
forum_pending_nonces {pending_nonces}\n"
        )
    }
}
