//! Login signature check over the fixed nonce message.

use forum_types::{AuthError, WalletAddress, build_login_message, recover_address};

/// Verify that `signature` was produced by `claimed` over `Login nonce: {nonce}`.
///
/// Malformed signatures yield `InvalidSignature`; a valid signature by any
/// other key yields `SignatureMismatch`.
pub fn verify_login_signature(
    claimed: &WalletAddress,
    nonce: &str,
    signature: &str,
) -> Result<(), AuthError> {
    let message = build_login_message(nonce);
    let recovered = recover_address(&message, signature)?;
    if recovered != *claimed {
        return Err(AuthError::SignatureMismatch);
    }
    Ok(())
}
