use const_oid::ObjectIdentifier;
use pkcs8::{
    der::pem::PemLabel, spki::der::asn1::AnyRef, DecodePrivateKey, PrivateKeyInfo, SecretDocument,
};

use super::{EcdsaPrivateKey, Key, Sm2PrivateKey};
use crate::error::{Error, Result};

/// Curve identifier of the SM2 recommended curve (GB/T 32918.5).
const SM2_CURVE_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.156.10197.1.301");

/// Load a private key from PKCS#8 PEM content.
///
/// The curve is detected from the EC parameters; P-256 keys come back as
/// the ECDSA variant, SM2-curve keys as the SM2 variant.
pub fn load_private_key_from_pkcs8_pem(pem: &str) -> Result<Key> {
    match detect_key_curve_from_pem(pem)? {
        KeyCurve::P256 => {
            let secret_key = p256::SecretKey::from_pkcs8_pem(pem)
                .map_err(|e| Error::ImportError(format!("Failed to parse P-256 key: {e}")))?;
            Ok(Key::EcdsaPrivate(EcdsaPrivateKey::from_p256(&secret_key)))
        }
        KeyCurve::Sm2 => {
            let secret_key = sm2::SecretKey::from_pkcs8_pem(pem)
                .map_err(|e| Error::ImportError(format!("Failed to parse SM2 key: {e}")))?;
            Ok(Key::Sm2Private(Sm2PrivateKey::from_secret_key(&secret_key)))
        }
    }
}

/// Load a private key from PKCS#8 DER data.
pub fn load_private_key_from_pkcs8_der(der: &[u8]) -> Result<Key> {
    match detect_key_curve_from_der(der)? {
        KeyCurve::P256 => {
            let secret_key = p256::SecretKey::from_pkcs8_der(der)
                .map_err(|e| Error::ImportError(format!("Failed to parse P-256 key: {e}")))?;
            Ok(Key::EcdsaPrivate(EcdsaPrivateKey::from_p256(&secret_key)))
        }
        KeyCurve::Sm2 => {
            let secret_key = sm2::SecretKey::from_pkcs8_der(der)
                .map_err(|e| Error::ImportError(format!("Failed to parse SM2 key: {e}")))?;
            Ok(Key::Sm2Private(Sm2PrivateKey::from_secret_key(&secret_key)))
        }
    }
}

enum KeyCurve {
    P256,
    Sm2,
}

fn detect_key_curve(info: &PrivateKeyInfo<'_>) -> Result<KeyCurve> {
    let oid = info.algorithm.oid;

    if oid != const_oid::db::rfc5912::ID_EC_PUBLIC_KEY {
        return Err(Error::ImportError(format!(
            "Unsupported key algorithm OID: {oid}"
        )));
    }

    if let Some(params) = info.algorithm.parameters {
        let curve_oid = parse_curve_oid(params)?;
        if curve_oid == const_oid::db::rfc5912::SECP_256_R_1 {
            return Ok(KeyCurve::P256);
        }
        if curve_oid == SM2_CURVE_OID {
            return Ok(KeyCurve::Sm2);
        }
        Err(Error::ImportError(format!(
            "Unsupported EC curve OID: {curve_oid}"
        )))
    } else {
        Err(Error::ImportError(
            "EC key is missing curve parameters".to_string(),
        ))
    }
}

fn parse_curve_oid(any: AnyRef<'_>) -> Result<ObjectIdentifier> {
    ObjectIdentifier::try_from(any)
        .map_err(|e| Error::ImportError(format!("Failed to parse curve OID: {e}")))
}

fn detect_key_curve_from_pem(pem: &str) -> Result<KeyCurve> {
    let (label, doc) = SecretDocument::from_pem(pem)
        .map_err(|e| Error::ImportError(format!("Failed to decode PEM: {e}")))?;

    if label != PrivateKeyInfo::PEM_LABEL {
        return Err(Error::ImportError(format!("Invalid PKCS#8 label: {label}")));
    }

    let info = PrivateKeyInfo::try_from(doc.as_bytes())
        .map_err(|e| Error::ImportError(format!("Failed to parse PKCS#8: {e}")))?;

    detect_key_curve(&info)
}

fn detect_key_curve_from_der(der: &[u8]) -> Result<KeyCurve> {
    let info = PrivateKeyInfo::try_from(der)
        .map_err(|e| Error::ImportError(format!("Failed to parse PKCS#8: {e}")))?;

    detect_key_curve(&info)
}

#[cfg(test)]
mod tests {
    use p256::elliptic_curve::rand_core::OsRng;
    use pkcs8::{EncodePrivateKey, LineEnding};

    use super::*;
    use crate::types::KeyVariant;

    #[test]
    fn test_load_p256_key_from_der() {
        let secret = p256::SecretKey::random(&mut OsRng);
        let der = secret.to_pkcs8_der().unwrap();

        let key = load_private_key_from_pkcs8_der(der.as_bytes()).unwrap();
        assert_eq!(key.variant(), KeyVariant::EcdsaPrivate);
        assert_eq!(
            key.ski(),
            Key::EcdsaPrivate(EcdsaPrivateKey::from_p256(&secret)).ski()
        );
    }

    #[test]
    fn test_load_sm2_key_from_der() {
        let secret = sm2::SecretKey::random(&mut OsRng);
        let der = secret.to_pkcs8_der().unwrap();

        let key = load_private_key_from_pkcs8_der(der.as_bytes()).unwrap();
        assert_eq!(key.variant(), KeyVariant::Sm2Private);
    }

    #[test]
    fn test_load_p256_key_from_pem() {
        let secret = p256::SecretKey::random(&mut OsRng);
        let pem = secret.to_pkcs8_pem(LineEnding::LF).unwrap();

        let key = load_private_key_from_pkcs8_pem(&pem).unwrap();
        assert_eq!(key.variant(), KeyVariant::EcdsaPrivate);
    }

    #[test]
    fn test_reject_garbage_der() {
        let result = load_private_key_from_pkcs8_der(&[0u8; 20]);
        assert!(matches!(result, Err(Error::ImportError(_))));
    }

    #[test]
    fn test_reject_non_pkcs8_pem() {
        let result = load_private_key_from_pkcs8_pem("not a pem at all");
        assert!(matches!(result, Err(Error::ImportError(_))));
    }
}
