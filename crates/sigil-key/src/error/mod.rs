use thiserror::Error;

/// Error type for key handling and dispatch
#[derive(Error, Debug)]
pub enum Error {
    /// A strategy received a key variant other than the one it is
    /// registered for. This is a wiring bug upstream, not a recoverable
    /// condition.
    #[error("key type mismatch: expected {expected}, got {actual}")]
    TypeMismatchError {
        expected: &'static str,
        actual: &'static str,
    },

    /// The underlying primitive rejected the key or failed to produce a
    /// signature
    #[error("signing error: {0}")]
    SigningError(String),

    /// Key material error
    #[error("key error: {0}")]
    KeyError(String),

    /// Key import error
    #[error("import error: {0}")]
    ImportError(String),

    /// No strategy is registered for the requested pairing
    #[error("unsupported operation: {0}")]
    UnsupportedError(String),

    /// Error from the crypto primitives
    #[error("crypto error: {0}")]
    CryptoError(#[from] sigil_crypto::error::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
