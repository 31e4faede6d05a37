//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Separator between payload and signature in a signed token
const TOKEN_SEPARATOR: char = '.';

/// Generate a random 32-byte signing secret
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    // ThreadRng is a CSPRNG reseeded from the OS
    rand::rng().fill_bytes(&mut secret);
    secret
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8; 32], data: &[u8]) -> [u8; 32] {
    // HMAC: H((K XOR opad) || H((K XOR ipad) || message))
    let mut o_key_pad = [0x5cu8; 64];
    let mut i_key_pad = [0x36u8; 64];

    for i in 0..32 {
        o_key_pad[i] ^= key[i];
        i_key_pad[i] ^= key[i];
    }

    let mut inner_hash = Sha256::new();
    inner_hash.update(i_key_pad);
    inner_hash.update(data);
    let inner_result = inner_hash.finalize();

    let mut outer_hash = Sha256::new();
    outer_hash.update(o_key_pad);
    outer_hash.update(inner_result);
    outer_hash.finalize().into()
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Sign an opaque payload: `base64(payload).base64(hmac(payload))`
pub fn sign_token(secret: &[u8; 32], payload: &[u8]) -> String {
    let signature = hmac_sha256(secret, payload);
    format!(
        "{}{}{}",
        to_base64(payload),
        TOKEN_SEPARATOR,
        to_base64(&signature)
    )
}

/// Verify a token produced by [`sign_token`] and return its payload
///
/// Any malformed or tampered token yields `None`.
pub fn verify_token(secret: &[u8; 32], token: &str) -> Option<Vec<u8>> {
    let (payload_b64, signature_b64) = token.split_once(TOKEN_SEPARATOR)?;
    let payload = from_base64(payload_b64).ok()?;
    let provided_signature = from_base64(signature_b64).ok()?;

    let expected_signature = hmac_sha256(secret, &payload);
    if !constant_time_eq(&provided_signature, &expected_signature) {
        return None;
    }

    Some(payload)
}
