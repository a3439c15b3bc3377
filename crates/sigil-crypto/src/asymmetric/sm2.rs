//! SM2 digital signatures (GB/T 32918.2), operating on caller-supplied
//! digests.

use signature::hazmat::{PrehashSigner, PrehashVerifier};
use sm2::{
    dsa::{Signature, SigningKey, VerifyingKey},
    elliptic_curve::sec1::FromEncodedPoint,
    EncodedPoint, FieldBytes, PublicKey, SecretKey,
};

use crate::error::{Error, Result};

/// Default signer distinguishing identifier from GM/T 0009-2012.
///
/// The identifier only participates in message-level signing (the ZA
/// hash); prehash operations ignore it, but the key construction APIs
/// still require one.
pub const DEFAULT_DIST_ID: &str = "1234567812345678";

/// Sign a pre-hashed digest with the raw SM2 scalar `d`.
///
/// Returns the fixed-width `r || s` signature encoding. A zero or
/// out-of-range scalar is rejected; failures are final and never retried.
pub fn sign_prehash(d: &[u8; 32], digest: &[u8]) -> Result<Vec<u8>> {
    let secret_key = SecretKey::from_slice(d)
        .map_err(|e| Error::KeyError(format!("invalid SM2 scalar: {e}")))?;
    let signing_key = SigningKey::new(DEFAULT_DIST_ID, &secret_key)
        .map_err(|e| Error::KeyError(format!("invalid SM2 signing key: {e}")))?;
    let signature: Signature = signing_key
        .sign_prehash(digest)
        .map_err(|e| Error::SigningError(format!("SM2 signing failed: {e}")))?;
    Ok(signature.to_bytes().to_vec())
}

/// Verify an `r || s` SM2 signature over a pre-hashed digest.
///
/// The outcome is a plain boolean: a point that is not on the curve or a
/// signature that does not decode is an invalid signature, never an error.
pub fn verify_prehash(x: &[u8; 32], y: &[u8; 32], signature: &[u8], digest: &[u8]) -> bool {
    let encoded = EncodedPoint::from_affine_coordinates(
        FieldBytes::from_slice(x),
        FieldBytes::from_slice(y),
        false,
    );
    let public_key = match Option::<PublicKey>::from(PublicKey::from_encoded_point(&encoded)) {
        Some(key) => key,
        None => return false,
    };
    let verifying_key = match VerifyingKey::new(DEFAULT_DIST_ID, public_key) {
        Ok(key) => key,
        Err(_) => return false,
    };
    let signature = match Signature::try_from(signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    verifying_key.verify_prehash(digest, &signature).is_ok()
}
