//! ECDSA over NIST P-256, operating on caller-supplied digests.

use p256::{
    ecdsa::{Signature, SigningKey, VerifyingKey},
    EncodedPoint, FieldBytes,
};
use signature::hazmat::{PrehashSigner, PrehashVerifier};

use crate::error::{Error, Result};

/// Sign a pre-hashed digest with the raw P-256 scalar `d`.
///
/// Returns the signature in ASN.1 DER form. Nonces are derived per
/// RFC 6979. A zero or out-of-range scalar is rejected; failures are
/// final and never retried.
pub fn sign_prehash(d: &[u8; 32], digest: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::from_slice(d)
        .map_err(|e| Error::KeyError(format!("invalid P-256 scalar: {e}")))?;
    let signature: Signature = signing_key
        .sign_prehash(digest)
        .map_err(|e| Error::SigningError(format!("P-256 signing failed: {e}")))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

/// Verify a DER-encoded ECDSA signature over a pre-hashed digest.
///
/// The outcome is a plain boolean: a point that is not on the curve or a
/// signature that does not decode is an invalid signature, never an error.
pub fn verify_prehash(x: &[u8; 32], y: &[u8; 32], signature: &[u8], digest: &[u8]) -> bool {
    let encoded = EncodedPoint::from_affine_coordinates(
        FieldBytes::from_slice(x),
        FieldBytes::from_slice(y),
        false,
    );
    let verifying_key = match VerifyingKey::from_encoded_point(&encoded) {
        Ok(key) => key,
        Err(_) => return false,
    };
    let signature = match Signature::from_der(signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    verifying_key.verify_prehash(digest, &signature).is_ok()
}
