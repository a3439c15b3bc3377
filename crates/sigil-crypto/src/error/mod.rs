use thiserror::Error;

/// Error type for the crypto primitives
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range key material
    #[error("key error: {0}")]
    KeyError(String),

    /// The underlying primitive failed to produce a signature
    #[error("signing error: {0}")]
    SigningError(String),

    /// DER decoding error
    #[error("DER error: {0}")]
    DerError(#[from] x509_cert::der::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
