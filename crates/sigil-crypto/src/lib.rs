//! Sigil Cryptography Library
//!
//! Leaf signing and verification primitives for the Sigil provider,
//! covering ECDSA over NIST P-256 and SM2 digital signatures, plus the
//! DER encoding helpers shared by the provider layers.

pub mod asymmetric;
pub mod encoding;
pub mod error;

// Re-export commonly used items for convenience
pub use encoding::certificate_from_der;
pub use error::{Error, Result};
