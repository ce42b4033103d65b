//! Shared types and pure-logic utilities for the wallet forum.
//! No I/O and no shared state: usable by the server, the auth layer and clients.

mod address;
mod crypto;
mod error;
mod message;
mod post;

pub use address::WalletAddress;
pub use crypto::{address_from_secret_key, recover_address, sign_message, signature_bytes};
pub use error::AuthError;
pub use message::{LOGIN_MESSAGE_PREFIX, build_login_message, keccak256, personal_message_hash};
pub use post::{Post, Reply};
