//! Strategies pairing keys with the SM2 scheme.
//!
//! Besides the native SM2 strategies, this module carries the migration
//! strategies that reinterpret ECDSA key material into the SM2 key shape
//! and run it through the SM2 primitive, so existing EC keys can move to
//! the national-standard scheme without re-keying.

use super::{mismatch, Signer, Verifier};
use crate::{
    error::{Error, Result},
    key::{EcPoint, Key, Sm2PrivateKey},
    types::SignerOpts,
};

fn sign_sm2(key: &Sm2PrivateKey, digest: &[u8], _opts: &SignerOpts) -> Result<Vec<u8>> {
    sigil_crypto::asymmetric::sm2::sign_prehash(key.scalar(), digest)
        .map_err(|e| Error::SigningError(e.to_string()))
}

fn verify_sm2(point: &EcPoint, signature: &[u8], digest: &[u8], _opts: &SignerOpts) -> Result<bool> {
    Ok(sigil_crypto::asymmetric::sm2::verify_prehash(
        &point.x, &point.y, signature, digest,
    ))
}

/// Signs digests with an SM2 private key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sm2Signer;

impl Signer for Sm2Signer {
    fn sign(&self, key: &Key, digest: &[u8], opts: &SignerOpts) -> Result<Vec<u8>> {
        match key {
            Key::Sm2Private(k) => sign_sm2(k, digest, opts),
            other => Err(mismatch("SM2 private key", other)),
        }
    }
}

/// Verifies SM2 signatures against the public half embedded in a private
/// key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sm2PrivateKeyVerifier;

impl Verifier for Sm2PrivateKeyVerifier {
    fn verify(
        &self,
        key: &Key,
        signature: &[u8],
        digest: &[u8],
        opts: &SignerOpts,
    ) -> Result<bool> {
        match key {
            Key::Sm2Private(k) => verify_sm2(k.point(), signature, digest, opts),
            other => Err(mismatch("SM2 private key", other)),
        }
    }
}

/// Verifies SM2 signatures with a public key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sm2PublicKeyVerifier;

impl Verifier for Sm2PublicKeyVerifier {
    fn verify(
        &self,
        key: &Key,
        signature: &[u8],
        digest: &[u8],
        opts: &SignerOpts,
    ) -> Result<bool> {
        match key {
            Key::Sm2Public(k) => verify_sm2(k.point(), signature, digest, opts),
            other => Err(mismatch("SM2 public key", other)),
        }
    }
}

/// Signs under the SM2 scheme with an ECDSA private key reinterpreted
/// into the SM2 key shape.
///
/// The reinterpretation copies the key's components verbatim; it is only
/// meaningful for material whose curve parameters the SM2 primitive
/// accepts. Foreign-curve material is rejected by the primitive.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaSm2Signer;

impl Signer for EcdsaSm2Signer {
    fn sign(&self, key: &Key, digest: &[u8], opts: &SignerOpts) -> Result<Vec<u8>> {
        match key {
            Key::EcdsaPrivate(k) => sign_sm2(&k.to_sm2(), digest, opts),
            other => Err(mismatch("ECDSA private key", other)),
        }
    }
}

/// Verifies SM2 signatures against the public half of a reinterpreted
/// ECDSA private key.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaSm2PrivateKeyVerifier;

impl Verifier for EcdsaSm2PrivateKeyVerifier {
    fn verify(
        &self,
        key: &Key,
        signature: &[u8],
        digest: &[u8],
        opts: &SignerOpts,
    ) -> Result<bool> {
        match key {
            Key::EcdsaPrivate(k) => {
                let reinterpreted = k.to_sm2();
                verify_sm2(reinterpreted.point(), signature, digest, opts)
            }
            other => Err(mismatch("ECDSA private key", other)),
        }
    }
}

/// Verifies SM2 signatures with a reinterpreted ECDSA public key.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaSm2PublicKeyVerifier;

impl Verifier for EcdsaSm2PublicKeyVerifier {
    fn verify(
        &self,
        key: &Key,
        signature: &[u8],
        digest: &[u8],
        opts: &SignerOpts,
    ) -> Result<bool> {
        match key {
            Key::EcdsaPublic(k) => {
                let reinterpreted = k.to_sm2();
                verify_sm2(reinterpreted.point(), signature, digest, opts)
            }
            other => Err(mismatch("ECDSA public key", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use sm2::elliptic_curve::rand_core::OsRng;

    use super::*;
    use crate::key::EcdsaPrivateKey;

    fn sm2_private_key() -> Key {
        Key::Sm2Private(Sm2PrivateKey::from_secret_key(&sm2::SecretKey::random(
            &mut OsRng,
        )))
    }

    fn migrated_private_key() -> Key {
        Key::EcdsaPrivate(EcdsaPrivateKey::from_sm2(&sm2::SecretKey::random(
            &mut OsRng,
        )))
    }

    #[test]
    fn test_sign_verify_both_paths() {
        let key = sm2_private_key();
        let digest = [0u8; 32];
        let opts = SignerOpts::default();

        let signature = Sm2Signer.sign(&key, &digest, &opts).unwrap();

        assert!(Sm2PrivateKeyVerifier
            .verify(&key, &signature, &digest, &opts)
            .unwrap());
        assert!(Sm2PublicKeyVerifier
            .verify(&key.public_key(), &signature, &digest, &opts)
            .unwrap());
    }

    #[test]
    fn test_flipped_digest_bit_fails() {
        let key = sm2_private_key();
        let digest = [0u8; 32];
        let opts = SignerOpts::default();

        let signature = Sm2Signer.sign(&key, &digest, &opts).unwrap();

        let mut flipped = digest;
        flipped[17] ^= 0x10;
        assert!(!Sm2PublicKeyVerifier
            .verify(&key.public_key(), &signature, &flipped, &opts)
            .unwrap());
    }

    #[test]
    fn test_reinterpreted_roundtrip() {
        let key = migrated_private_key();
        let digest = [0u8; 32];
        let opts = SignerOpts::default();

        let signature = EcdsaSm2Signer.sign(&key, &digest, &opts).unwrap();

        assert!(EcdsaSm2PrivateKeyVerifier
            .verify(&key, &signature, &digest, &opts)
            .unwrap());
        assert!(EcdsaSm2PublicKeyVerifier
            .verify(&key.public_key(), &signature, &digest, &opts)
            .unwrap());
    }

    #[test]
    fn test_reinterpreted_signature_is_key_bound() {
        let key = migrated_private_key();
        let other = migrated_private_key();
        let digest = [0u8; 32];
        let opts = SignerOpts::default();

        let signature = EcdsaSm2Signer.sign(&key, &digest, &opts).unwrap();

        assert!(!EcdsaSm2PublicKeyVerifier
            .verify(&other.public_key(), &signature, &digest, &opts)
            .unwrap());
    }

    #[test]
    fn test_wrong_variant_is_a_type_mismatch() {
        let ecdsa_key = migrated_private_key();
        let sm2_key = sm2_private_key();
        let digest = [0u8; 32];
        let opts = SignerOpts::default();

        let err = Sm2Signer.sign(&ecdsa_key, &digest, &opts).unwrap_err();
        assert!(matches!(err, Error::TypeMismatchError { .. }));

        let err = EcdsaSm2Signer.sign(&sm2_key, &digest, &opts).unwrap_err();
        assert!(matches!(err, Error::TypeMismatchError { .. }));

        let err = Sm2PublicKeyVerifier
            .verify(&ecdsa_key.public_key(), &[], &digest, &opts)
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatchError { .. }));
    }

    #[test]
    fn test_repeated_verification_is_stable() {
        let key = sm2_private_key();
        let digest = [0u8; 32];
        let opts = SignerOpts::default();

        let signature = Sm2Signer.sign(&key, &digest, &opts).unwrap();
        let public = key.public_key();

        for _ in 0..3 {
            assert!(Sm2PublicKeyVerifier
                .verify(&public, &signature, &digest, &opts)
                .unwrap());
        }
    }
}
