//! Login flow dispatch: nonce issuance, signature verification, and token
//! resolution for guarded requests.

use forum_types::{AuthError, WalletAddress};
use tracing::{info, warn};

use crate::nonce::NonceStore;
use crate::session::{SessionStore, SessionToken};
use crate::verify::verify_login_signature;

/// Owns the nonce and session stores for one server process.
#[derive(Default)]
pub struct Authenticator {
    pub nonces: NonceStore,
    pub sessions: SessionStore,
}

/// Present and non-empty, else `MissingParameter(label)`.
fn required<'a>(value: Option<&'a str>, label: &'static str) -> Result<&'a str, AuthError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingParameter(label))
}

impl Authenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a nonce for `wallet_address`, replacing any pending one.
    pub fn request_nonce(&self, wallet_address: Option<&str>) -> Result<String, AuthError> {
        let raw = required(wallet_address, "walletAddress")?;
        let address =
            WalletAddress::parse(raw).ok_or(AuthError::MissingParameter("walletAddress"))?;
        let nonce = self.nonces.issue(&address);
        info!(wallet = %address, "Nonce issued");
        Ok(nonce)
    }

    /// Check the signature over the pending nonce and mint a session token.
    ///
    /// The nonce is deleted only once the signature matches, and only if it
    /// is still the pending one; a nonce replaced or consumed concurrently
    /// yields `NoNonceFound`.
    pub fn verify(
        &self,
        wallet_address: Option<&str>,
        signature: Option<&str>,
    ) -> Result<SessionToken, AuthError> {
        let raw = required(wallet_address, "parameters")?;
        let signature = required(signature, "parameters")?;
        let address = WalletAddress::parse(raw).ok_or(AuthError::MissingParameter("parameters"))?;

        let nonce = self
            .nonces
            .pending(&address)
            .ok_or(AuthError::NoNonceFound)?;

        if let Err(e) = verify_login_signature(&address, &nonce, signature) {
            warn!(wallet = %address, error = %e, "Login rejected");
            return Err(e);
        }

        if !self.nonces.consume(&address, &nonce) {
            warn!(wallet = %address, "Nonce changed during verification");
            return Err(AuthError::NoNonceFound);
        }

        let token = self.sessions.create(&address);
        info!(wallet = %address, "Session created");
        Ok(token)
    }

    /// Resolve a bearer token to the wallet it was issued for.
    pub fn authenticate(&self, token: Option<&str>) -> Result<WalletAddress, AuthError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::Unauthorized)?;
        self.sessions.resolve(token).ok_or(AuthError::Unauthorized)
    }
}
