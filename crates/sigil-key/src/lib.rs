//! Opaque key handles and sign/verify dispatch for the Sigil provider.
//!
//! A [`Key`] is a tagged handle over ECDSA and SM2 key material. Generic
//! code signs and verifies through the [`Signer`] and [`Verifier`]
//! capability traits; the [`StrategyRegistry`] resolves a key's concrete
//! variant and the requested scheme to the strategy that implements the
//! pairing, including the migration path that reinterprets ECDSA key
//! material under the SM2 scheme.

pub mod error;
pub mod key;
pub mod registry;
pub mod signature;
pub mod types;

// Re-export core functionality
pub use error::{Error, Result};
pub use key::{
    util::{load_private_key_from_pkcs8_der, load_private_key_from_pkcs8_pem},
    EcPoint, EcdsaPrivateKey, EcdsaPublicKey, Key, NamedCurve, Sm2PrivateKey, Sm2PublicKey,
};
pub use registry::StrategyRegistry;
pub use signature::{Signer, Verifier};
pub use types::{Algorithm, KeyVariant, SignerOpts};
