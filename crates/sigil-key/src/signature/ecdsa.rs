//! Strategies pairing ECDSA keys with the ECDSA scheme.

use super::{mismatch, Signer, Verifier};
use crate::{
    error::{Error, Result},
    key::{EcPoint, EcdsaPrivateKey, Key, NamedCurve},
    types::SignerOpts,
};

fn sign_ecdsa(key: &EcdsaPrivateKey, digest: &[u8], _opts: &SignerOpts) -> Result<Vec<u8>> {
    match key.point().curve {
        NamedCurve::P256 => sigil_crypto::asymmetric::ecdsa::sign_prehash(key.scalar(), digest)
            .map_err(|e| Error::SigningError(e.to_string())),
        // no ECDSA instantiation exists for the SM2 curve; such material is
        // only usable through the reinterpreting strategies
        NamedCurve::Sm2P256 => Err(Error::SigningError(
            "ECDSA is not available for SM2-curve material".to_string(),
        )),
    }
}

fn verify_ecdsa(
    point: &EcPoint,
    signature: &[u8],
    digest: &[u8],
    _opts: &SignerOpts,
) -> Result<bool> {
    match point.curve {
        NamedCurve::P256 => Ok(sigil_crypto::asymmetric::ecdsa::verify_prehash(
            &point.x, &point.y, signature, digest,
        )),
        NamedCurve::Sm2P256 => Ok(false),
    }
}

/// Signs digests with an ECDSA private key.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaSigner;

impl Signer for EcdsaSigner {
    fn sign(&self, key: &Key, digest: &[u8], opts: &SignerOpts) -> Result<Vec<u8>> {
        match key {
            Key::EcdsaPrivate(k) => sign_ecdsa(k, digest, opts),
            other => Err(mismatch("ECDSA private key", other)),
        }
    }
}

/// Verifies ECDSA signatures against the public half embedded in a
/// private key.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaPrivateKeyVerifier;

impl Verifier for EcdsaPrivateKeyVerifier {
    fn verify(
        &self,
        key: &Key,
        signature: &[u8],
        digest: &[u8],
        opts: &SignerOpts,
    ) -> Result<bool> {
        match key {
            Key::EcdsaPrivate(k) => verify_ecdsa(k.point(), signature, digest, opts),
            other => Err(mismatch("ECDSA private key", other)),
        }
    }
}

/// Verifies ECDSA signatures with a public key.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaPublicKeyVerifier;

impl Verifier for EcdsaPublicKeyVerifier {
    fn verify(
        &self,
        key: &Key,
        signature: &[u8],
        digest: &[u8],
        opts: &SignerOpts,
    ) -> Result<bool> {
        match key {
            Key::EcdsaPublic(k) => verify_ecdsa(k.point(), signature, digest, opts),
            other => Err(mismatch("ECDSA public key", other)),
        }
    }
}
