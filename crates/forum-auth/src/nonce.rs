//! Pending login nonces, at most one per wallet address.
//! Written by nonce issuance, consumed by a successful verification.

use forum_types::WalletAddress;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Nonces are drawn uniformly from `0..NONCE_UPPER_BOUND`.
pub const NONCE_UPPER_BOUND: u32 = 1_000_000;

/// Random decimal nonce without padding.
pub fn generate_nonce() -> String {
    rand::thread_rng().gen_range(0..NONCE_UPPER_BOUND).to_string()
}

#[derive(Default)]
pub struct NonceStore {
    pending: Mutex<HashMap<WalletAddress, String>>,
}

impl NonceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn pending_map(&self) -> MutexGuard<'_, HashMap<WalletAddress, String>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Generate a nonce for `address`, replacing any pending one.
    pub fn issue(&self, address: &WalletAddress) -> String {
        let nonce = generate_nonce();
        self.insert(address, nonce.clone());
        nonce
    }

    /// Store a specific nonce for `address`, replacing any pending one.
    pub fn insert(&self, address: &WalletAddress, nonce: String) {
        self.pending_map().insert(address.clone(), nonce);
    }

    pub fn pending(&self, address: &WalletAddress) -> Option<String> {
        self.pending_map().get(address).cloned()
    }

    /// Remove the pending nonce only if it is still `expected`.
    /// Returns `false` if it was replaced or consumed in the meantime.
    pub fn consume(&self, address: &WalletAddress, expected: &str) -> bool {
        let mut pending = self.pending_map();
        match pending.get(address) {
            Some(current) if current == expected => {
                pending.remove(address);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pending_map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
