//! Login message construction and Ethereum personal-message hashing.

use sha3::{Digest, Keccak256};

/// Fixed prefix of the message a wallet signs to log in.
pub const LOGIN_MESSAGE_PREFIX: &str = "Login nonce: ";

/// EIP-191 version `0x45` header.
const PERSONAL_MESSAGE_HEADER: &str = "\x19Ethereum Signed Message:\n";

/// Format: `Login nonce: {nonce}`.
pub fn build_login_message(nonce: &str) -> String {
    format!("{LOGIN_MESSAGE_PREFIX}{nonce}")
}

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let digest = Keccak256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Digest a wallet signs for `personal_sign`:
/// `keccak256("\x19Ethereum Signed Message:\n" ‖ len(message) ‖ message)`,
/// where the length is the decimal byte length.
pub fn personal_message_hash(message: &[u8]) -> [u8; 32] {
    let len = message.len().to_string();
    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_HEADER.as_bytes());
    hasher.update(len.as_bytes());
    hasher.update(message);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}
