//! Signing and verification strategies.
//!
//! One stateless strategy exists per (key variant, scheme) pairing. Each
//! performs a single variant check on the opaque key, unwraps the concrete
//! material and forwards to the scheme's leaf primitive; a variant
//! mismatch is a registration bug and fails fast.

mod ecdsa;
mod sm2;

pub use ecdsa::{EcdsaPrivateKeyVerifier, EcdsaPublicKeyVerifier, EcdsaSigner};
pub use sm2::{
    EcdsaSm2PrivateKeyVerifier, EcdsaSm2PublicKeyVerifier, EcdsaSm2Signer, Sm2PrivateKeyVerifier,
    Sm2PublicKeyVerifier, Sm2Signer,
};

use crate::{
    error::{Error, Result},
    key::Key,
    types::SignerOpts,
};

/// Capability interface for producing a signature over a pre-hashed digest.
pub trait Signer: Send + Sync {
    /// Signs `digest` with `key`, forwarding `opts` to the primitive
    /// unmodified.
    fn sign(&self, key: &Key, digest: &[u8], opts: &SignerOpts) -> Result<Vec<u8>>;
}

/// Capability interface for checking a signature over a pre-hashed digest.
pub trait Verifier: Send + Sync {
    /// Verifies `signature` over `digest` with `key`.
    ///
    /// The outcome is a definite boolean: a signature that does not match
    /// is `Ok(false)`. Errors are reserved for mis-wired keys, never for
    /// failed verification.
    fn verify(&self, key: &Key, signature: &[u8], digest: &[u8], opts: &SignerOpts)
        -> Result<bool>;
}

pub(crate) fn mismatch(expected: &'static str, key: &Key) -> Error {
    Error::TypeMismatchError {
        expected,
        actual: key.variant().name(),
    }
}
