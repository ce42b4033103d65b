//! Session guard and request correlation middleware.

use crate::metrics::METRICS;
use crate::state::AppState;
use crate::Error;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use forum_types::WalletAddress;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Wallet resolved from the session token, extractable via `Extension<Identity>`.
#[derive(Clone, Debug)]
pub struct Identity(pub WalletAddress);

/// Resolve the `Authorization` header (bare token, `Bearer ` tolerated) to a
/// wallet, or answer 401 without running the handler.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let resolved = {
        let token = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.strip_prefix("Bearer ").unwrap_or(s));
        state.auth.authenticate(token)
    };

    match resolved {
        Ok(wallet) => {
            request.extensions_mut().insert(Identity(wallet));
            next.run(request).await
        }
        Err(e) => {
            METRICS.unauthorized.fetch_add(1, Ordering::Relaxed);
            let req_id = request
                .extensions()
                .get::<RequestId>()
                .map(|r| r.0.as_str())
                .unwrap_or_default();
            debug!(req_id = %req_id, path = %request.uri().path(), "Rejected unauthenticated request");
            Error::from(e).into_response()
        }
    }
}

/// Propagate or generate `x-request-id` for end-to-end correlation.
pub async fn inject_request_id(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| {
            use rand::Rng;
            let mut rng = rand::thread_rng();
            format!("fm-{:016x}", rng.gen::<u64>())
        });

    // Store for handler access.
    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    // Echo back for end-to-end tracing.
    if let Ok(val) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", val);
    }

    response
}

/// Request correlation ID, extractable from `Request::extensions()`.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);
