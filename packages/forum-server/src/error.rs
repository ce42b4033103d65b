//! Error types for the forum server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forum_types::AuthError;
use std::fmt;

/// Forum server error type. Every variant maps to one HTTP status and an
/// `{"error": message}` body.
#[derive(Debug)]
pub enum Error {
    /// Login or token failure.
    Auth(AuthError),
    /// Post or reply body without usable `content`.
    MissingContent,
    /// No post with the requested id.
    PostNotFound,
    /// Request body was not valid JSON for the endpoint.
    MalformedBody(String),
    /// Configuration error.
    Config(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Auth(AuthError::SignatureMismatch | AuthError::Unauthorized) => {
                StatusCode::UNAUTHORIZED
            }
            Error::Auth(_) | Error::MissingContent | Error::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::PostNotFound => StatusCode::NOT_FOUND,
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Auth(AuthError::MissingParameter(field)) => write!(f, "Missing {field}"),
            Error::Auth(AuthError::NoNonceFound) => {
                write!(f, "No nonce found, request a nonce first.")
            }
            Error::Auth(AuthError::InvalidSignature(_)) => write!(f, "Error verifying signature"),
            Error::Auth(AuthError::SignatureMismatch) => {
                write!(f, "Signature verification failed")
            }
            Error::Auth(AuthError::Unauthorized) => write!(f, "Unauthorized"),
            Error::MissingContent => write!(f, "Missing content"),
            Error::PostNotFound => write!(f, "Post not found"),
            Error::MalformedBody(msg) => write!(f, "Invalid JSON body: {msg}"),
            Error::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<AuthError> for Error {
    fn from(e: AuthError) -> Self {
        Error::Auth(e)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
