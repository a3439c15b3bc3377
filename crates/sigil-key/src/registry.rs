//! Strategy table resolving keys to their sign/verify implementations.

use std::{collections::HashMap, sync::Arc};

use crate::{
    error::{Error, Result},
    key::Key,
    signature::{
        EcdsaPrivateKeyVerifier, EcdsaPublicKeyVerifier, EcdsaSigner, EcdsaSm2PrivateKeyVerifier,
        EcdsaSm2PublicKeyVerifier, EcdsaSm2Signer, Signer, Sm2PrivateKeyVerifier,
        Sm2PublicKeyVerifier, Sm2Signer, Verifier,
    },
    types::{Algorithm, KeyVariant, SignerOpts},
};

/// Maps a (key variant, scheme) pair to the strategy implementing it.
///
/// Built once at provider initialization and shared read-only afterwards;
/// all registered strategies are stateless, so the registry is safe to use
/// from any number of threads.
pub struct StrategyRegistry {
    signers: HashMap<(KeyVariant, Algorithm), Arc<dyn Signer>>,
    verifiers: HashMap<(KeyVariant, Algorithm), Arc<dyn Verifier>>,
}

impl StrategyRegistry {
    /// Creates a registry with every built-in strategy registered,
    /// including the strategies that reinterpret ECDSA material under the
    /// SM2 scheme.
    pub fn new() -> Self {
        let mut registry = Self {
            signers: HashMap::new(),
            verifiers: HashMap::new(),
        };

        registry.register_signer(KeyVariant::EcdsaPrivate, Algorithm::Ecdsa, Arc::new(EcdsaSigner));
        registry.register_signer(KeyVariant::Sm2Private, Algorithm::Sm2, Arc::new(Sm2Signer));
        registry.register_signer(
            KeyVariant::EcdsaPrivate,
            Algorithm::Sm2,
            Arc::new(EcdsaSm2Signer),
        );

        registry.register_verifier(
            KeyVariant::EcdsaPrivate,
            Algorithm::Ecdsa,
            Arc::new(EcdsaPrivateKeyVerifier),
        );
        registry.register_verifier(
            KeyVariant::EcdsaPublic,
            Algorithm::Ecdsa,
            Arc::new(EcdsaPublicKeyVerifier),
        );
        registry.register_verifier(
            KeyVariant::Sm2Private,
            Algorithm::Sm2,
            Arc::new(Sm2PrivateKeyVerifier),
        );
        registry.register_verifier(
            KeyVariant::Sm2Public,
            Algorithm::Sm2,
            Arc::new(Sm2PublicKeyVerifier),
        );
        registry.register_verifier(
            KeyVariant::EcdsaPrivate,
            Algorithm::Sm2,
            Arc::new(EcdsaSm2PrivateKeyVerifier),
        );
        registry.register_verifier(
            KeyVariant::EcdsaPublic,
            Algorithm::Sm2,
            Arc::new(EcdsaSm2PublicKeyVerifier),
        );

        registry
    }

    /// Registers (or replaces) the signer for a pairing.
    pub fn register_signer(
        &mut self,
        variant: KeyVariant,
        algorithm: Algorithm,
        signer: Arc<dyn Signer>,
    ) {
        self.signers.insert((variant, algorithm), signer);
    }

    /// Registers (or replaces) the verifier for a pairing.
    pub fn register_verifier(
        &mut self,
        variant: KeyVariant,
        algorithm: Algorithm,
        verifier: Arc<dyn Verifier>,
    ) {
        self.verifiers.insert((variant, algorithm), verifier);
    }

    fn scheme_for(key: &Key, opts: &SignerOpts) -> Algorithm {
        opts.scheme.unwrap_or_else(|| key.algorithm())
    }

    /// Signs `digest` with `key` under the scheme selected by `opts`.
    pub fn sign(&self, key: &Key, digest: &[u8], opts: &SignerOpts) -> Result<Vec<u8>> {
        let scheme = Self::scheme_for(key, opts);
        let signer = self.signers.get(&(key.variant(), scheme)).ok_or_else(|| {
            Error::UnsupportedError(format!(
                "no signer for {} under {:?}",
                key.variant().name(),
                scheme
            ))
        })?;
        signer.sign(key, digest, opts)
    }

    /// Verifies `signature` over `digest` with `key` under the scheme
    /// selected by `opts`.
    pub fn verify(
        &self,
        key: &Key,
        signature: &[u8],
        digest: &[u8],
        opts: &SignerOpts,
    ) -> Result<bool> {
        let scheme = Self::scheme_for(key, opts);
        let verifier = self.verifiers.get(&(key.variant(), scheme)).ok_or_else(|| {
            Error::UnsupportedError(format!(
                "no verifier for {} under {:?}",
                key.variant().name(),
                scheme
            ))
        })?;
        verifier.verify(key, signature, digest, opts)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
