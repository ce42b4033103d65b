use anyhow::{anyhow, Result};
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use forum_server::{create_router, AppState, Config};
use forum_types::{address_from_secret_key, build_login_message, sign_message, WalletAddress};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// A wallet backed by a fixed secp256k1 key.
pub struct TestWallet {
    secret: [u8; 32],
    pub address: WalletAddress,
}

impl TestWallet {
    pub fn new(seed: u8) -> Self {
        let secret = [seed; 32];
        let address = address_from_secret_key(&secret).expect("seed produces a valid key");
        Self { secret, address }
    }

    /// Address with hex digits uppercased, as a checksumming wallet might send it.
    pub fn shouting_address(&self) -> String {
        format!("0x{}", self.address.as_str()[2..].to_uppercase())
    }

    pub fn sign(&self, message: &str) -> String {
        sign_message(&self.secret, message).expect("valid key signs")
    }
}

pub fn setup_app() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(Config::default()));
    let app = create_router(Arc::clone(&state));
    (state, app)
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&str>,
) -> Result<(StatusCode, HeaderMap, Bytes)> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    let request = builder.body(body.map(|b| Body::from(b.to_string())).unwrap_or_default())?;

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, headers, bytes))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let body = body.map(|b| b.to_string());
    let (status, _, bytes) = send_raw(app, method, uri, token, body.as_deref()).await?;
    let value = serde_json::from_slice(&bytes)?;
    Ok((status, value))
}

pub async fn request_nonce(app: &Router, wallet_address: &str) -> Result<String> {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/request_nonce",
        None,
        Some(json!({ "walletAddress": wallet_address })),
    )
    .await?;
    if status != StatusCode::OK {
        return Err(anyhow!("request_nonce failed: {status} {body}"));
    }
    body["nonce"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("no nonce in {body}"))
}

pub async fn verify(
    app: &Router,
    wallet_address: &str,
    signature: &str,
) -> Result<(StatusCode, Value)> {
    send(
        app,
        Method::POST,
        "/auth/verify",
        None,
        Some(json!({ "walletAddress": wallet_address, "signature": signature })),
    )
    .await
}

/// Full nonce → sign → verify round, returning the session token.
pub async fn login(app: &Router, wallet: &TestWallet) -> Result<String> {
    let nonce = request_nonce(app, wallet.address.as_str()).await?;
    let signature = wallet.sign(&build_login_message(&nonce));
    let (status, body) = verify(app, wallet.address.as_str(), &signature).await?;
    if status != StatusCode::OK {
        return Err(anyhow!("verify failed: {status} {body}"));
    }
    body["token"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("no token in {body}"))
}

/// Create a post and return its JSON.
pub async fn create_post(app: &Router, token: &str, content: &str) -> Result<Value> {
    let (status, body) = send(
        app,
        Method::POST,
        "/posts",
        Some(token),
        Some(json!({ "content": content })),
    )
    .await?;
    if status != StatusCode::OK {
        return Err(anyhow!("create_post failed: {status} {body}"));
    }
    Ok(body["post"].clone())
}

pub async fn list_posts(app: &Router) -> Result<Vec<Value>> {
    let (status, body) = send(app, Method::GET, "/posts", None, None).await?;
    if status != StatusCode::OK {
        return Err(anyhow!("list failed: {status} {body}"));
    }
    body["posts"]
        .as_array()
        .cloned()
        .ok_or_else(|| anyhow!("no posts array in {body}"))
}
