//! secp256k1 recovery for Ethereum personal-message signatures.

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

use crate::message::{keccak256, personal_message_hash};
use crate::{AuthError, WalletAddress};

/// Decode a hex signature (optional `0x` prefix) into compact `r ‖ s` bytes
/// and a recovery parity (0 or 1).
///
/// Accepts 65-byte `r ‖ s ‖ v` with `v` in {0, 1} or `v >= 27`, and the
/// 64-byte EIP-2098 form where the parity lives in the top bit of `s`.
pub fn signature_bytes(signature: &str) -> Result<([u8; 64], u8), AuthError> {
    let stripped = signature.strip_prefix("0x").unwrap_or(signature);
    let raw = hex::decode(stripped)
        .map_err(|e| AuthError::InvalidSignature(format!("not hex: {e}")))?;

    let mut compact = [0u8; 64];
    match raw.len() {
        65 => {
            compact.copy_from_slice(&raw[..64]);
            let v = match raw[64] {
                v @ (0 | 1) => v + 27,
                v if v < 27 => {
                    return Err(AuthError::InvalidSignature(format!(
                        "invalid recovery byte {v}"
                    )));
                }
                v => v,
            };
            Ok((compact, 1 - (v % 2)))
        }
        64 => {
            compact.copy_from_slice(&raw);
            let parity = compact[32] >> 7;
            compact[32] &= 0x7f;
            Ok((compact, parity))
        }
        n => Err(AuthError::InvalidSignature(format!(
            "expected 64 or 65 bytes, got {n}"
        ))),
    }
}

/// Recover the address that produced `signature` over the personal-message
/// digest of `message`.
pub fn recover_address(message: &str, signature: &str) -> Result<WalletAddress, AuthError> {
    let (compact, parity) = signature_bytes(signature)?;
    let recovery_id = RecoveryId::from_i32(i32::from(parity))
        .map_err(|e| AuthError::InvalidSignature(e.to_string()))?;
    let sig = RecoverableSignature::from_compact(&compact, recovery_id)
        .map_err(|e| AuthError::InvalidSignature(e.to_string()))?;

    let digest = Message::from_digest(personal_message_hash(message.as_bytes()));
    let secp = Secp256k1::verification_only();
    let public_key = secp
        .recover_ecdsa(&digest, &sig)
        .map_err(|e| AuthError::InvalidSignature(e.to_string()))?;

    Ok(address_from_public_key(&public_key))
}

/// `0x` ‖ last 20 bytes of keccak256 over the uncompressed key (sans `0x04`).
fn address_from_public_key(public_key: &PublicKey) -> WalletAddress {
    let uncompressed = public_key.serialize_uncompressed();
    let hash = keccak256(&uncompressed[1..]);
    WalletAddress::from_normalized(format!("0x{}", hex::encode(&hash[12..])))
}

pub fn address_from_secret_key(secret: &[u8; 32]) -> Result<WalletAddress, AuthError> {
    let secp = Secp256k1::signing_only();
    let secret_key = SecretKey::from_slice(secret)
        .map_err(|e| AuthError::InvalidSignature(format!("secret key: {e}")))?;
    Ok(address_from_public_key(&PublicKey::from_secret_key(
        &secp,
        &secret_key,
    )))
}

/// Wallet-side `personal_sign`: 65-byte `r ‖ s ‖ v` hex with `v` in {27, 28}.
pub fn sign_message(secret: &[u8; 32], message: &str) -> Result<String, AuthError> {
    let secp = Secp256k1::signing_only();
    let secret_key = SecretKey::from_slice(secret)
        .map_err(|e| AuthError::InvalidSignature(format!("secret key: {e}")))?;
    let digest = Message::from_digest(personal_message_hash(message.as_bytes()));

    let (recovery_id, compact) = secp
        .sign_ecdsa_recoverable(&digest, &secret_key)
        .serialize_compact();

    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&compact);
    out[64] = 27 + recovery_id.to_i32() as u8;
    Ok(format!("0x{}", hex::encode(out)))
}
