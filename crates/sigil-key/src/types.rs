use serde::{Deserialize, Serialize};

/// Signature scheme a key is used under.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// ECDSA over NIST P-256
    Ecdsa,
    /// SM2 digital signatures (GB/T 32918.2)
    Sm2,
}

/// Concrete variant tag of an opaque [`Key`](crate::key::Key).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum KeyVariant {
    EcdsaPrivate,
    EcdsaPublic,
    Sm2Private,
    Sm2Public,
}

impl KeyVariant {
    /// Human-readable name, used in dispatch errors.
    pub fn name(&self) -> &'static str {
        match self {
            KeyVariant::EcdsaPrivate => "ECDSA private key",
            KeyVariant::EcdsaPublic => "ECDSA public key",
            KeyVariant::Sm2Private => "SM2 private key",
            KeyVariant::Sm2Public => "SM2 public key",
        }
    }
}

/// Options threaded through sign and verify calls.
///
/// Strategies forward these without inspecting them; only the
/// [`StrategyRegistry`](crate::registry::StrategyRegistry) reads `scheme`
/// when routing a key to a strategy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SignerOpts {
    /// Scheme override; `None` selects the key's native scheme.
    pub scheme: Option<Algorithm>,
}

impl SignerOpts {
    /// Options selecting an explicit scheme.
    pub fn with_scheme(scheme: Algorithm) -> Self {
        Self {
            scheme: Some(scheme),
        }
    }
}
