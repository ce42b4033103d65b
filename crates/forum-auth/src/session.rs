//! Bearer session tokens. Sessions never expire and are never revoked;
//! a wallet may hold any number of live tokens.

use forum_types::WalletAddress;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Opaque UUID v4 string.
pub type SessionToken = String;

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionToken, WalletAddress>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_sessions(&self) -> RwLockReadGuard<'_, HashMap<SessionToken, WalletAddress>> {
        self.sessions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_sessions(&self) -> RwLockWriteGuard<'_, HashMap<SessionToken, WalletAddress>> {
        self.sessions.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Mint a new token bound to `address`.
    pub fn create(&self, address: &WalletAddress) -> SessionToken {
        let token = uuid::Uuid::new_v4().to_string();
        self.write_sessions().insert(token.clone(), address.clone());
        token
    }

    pub fn resolve(&self, token: &str) -> Option<WalletAddress> {
        self.read_sessions().get(token).cloned()
    }

    pub fn len(&self) -> usize {
        self.read_sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
