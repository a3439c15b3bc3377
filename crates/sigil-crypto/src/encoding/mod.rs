//! DER encoding helpers shared by the provider layers.

use x509_cert::{der::Decode, Certificate};

use crate::error::Result;

/// Parse a DER-encoded X.509 certificate.
pub fn certificate_from_der(der: &[u8]) -> Result<Certificate> {
    Ok(Certificate::from_der(der)?)
}
