/// Authentication error shared by the auth layer and the HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A required request field was absent or empty. Holds the field label.
    MissingParameter(&'static str),
    /// No pending nonce for the address (never requested, replaced, or consumed).
    NoNonceFound,
    /// Signature bytes could not be decoded or no key could be recovered.
    InvalidSignature(String),
    /// Signature is well-formed but was produced by a different address.
    SignatureMismatch,
    /// Session token missing or unknown.
    Unauthorized,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParameter(field) => write!(f, "missing {field}"),
            Self::NoNonceFound => write!(f, "no pending nonce"),
            Self::InvalidSignature(msg) => write!(f, "invalid signature: {msg}"),
            Self::SignatureMismatch => write!(f, "recovered address does not match"),
            Self::Unauthorized => write!(f, "unauthorized"),
        }
    }
}

impl std::error::Error for AuthError {}
