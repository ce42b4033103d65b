//! Wallet-signature login: single-use nonces, personal-message signature
//! verification and bearer session tokens, all held in process memory.

mod authenticate;
pub mod nonce;
pub mod session;
mod verify;

pub use authenticate::Authenticator;
pub use nonce::NonceStore;
pub use session::{SessionStore, SessionToken};
pub use verify::verify_login_signature;
