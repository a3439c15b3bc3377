//! Opaque key handles over ECDSA and SM2 key material.
//!
//! Keys are immutable once constructed. Generic code sees only the
//! [`Key`] sum type and its variant tag; the concrete material is reached
//! by matching on the variant, never by unchecked casts.

pub mod util;

use std::fmt;

use p256::elliptic_curve::sec1::{Coordinates, ToEncodedPoint};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::types::{Algorithm, KeyVariant};

/// Curve a key's material lives on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum NamedCurve {
    /// NIST P-256 (secp256r1)
    P256,
    /// SM2 recommended curve (GB/T 32918.5)
    Sm2P256,
}

/// Affine public point together with its curve tag.
///
/// This is the component a private key shares with its derived public key:
/// big-endian 32-byte coordinates plus the curve they belong to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EcPoint {
    pub curve: NamedCurve,
    pub x: [u8; 32],
    pub y: [u8; 32],
}

impl EcPoint {
    fn from_p256(public_key: &p256::PublicKey) -> Self {
        let encoded = public_key.to_encoded_point(false);
        let (x, y) = match encoded.coordinates() {
            Coordinates::Uncompressed { x, y } => (x, y),
            _ => unreachable!("a non-identity point encodes uncompressed coordinates"),
        };

        let mut point = Self {
            curve: NamedCurve::P256,
            x: [0u8; 32],
            y: [0u8; 32],
        };
        point.x.copy_from_slice(x);
        point.y.copy_from_slice(y);
        point
    }

    fn from_sm2(public_key: &sm2::PublicKey) -> Self {
        let encoded = public_key.to_encoded_point(false);
        let (x, y) = match encoded.coordinates() {
            Coordinates::Uncompressed { x, y } => (x, y),
            _ => unreachable!("a non-identity point encodes uncompressed coordinates"),
        };

        let mut point = Self {
            curve: NamedCurve::Sm2P256,
            x: [0u8; 32],
            y: [0u8; 32],
        };
        point.x.copy_from_slice(x);
        point.y.copy_from_slice(y);
        point
    }

    /// SEC1 uncompressed encoding: `0x04 || x || y`.
    pub fn to_uncompressed_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(65);
        bytes.push(0x04);
        bytes.extend_from_slice(&self.x);
        bytes.extend_from_slice(&self.y);
        bytes
    }
}

/// Public half of an ECDSA key pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EcdsaPublicKey {
    point: EcPoint,
}

impl EcdsaPublicKey {
    /// Wrap a P-256 public key.
    pub fn from_p256(public_key: &p256::PublicKey) -> Self {
        Self {
            point: EcPoint::from_p256(public_key),
        }
    }

    /// Wrap SM2-curve material as an ECDSA-typed handle.
    ///
    /// This is the migration shape: the handle dispatches as an ECDSA key
    /// but carries material the SM2 primitive accepts once reinterpreted
    /// via [`to_sm2`](Self::to_sm2).
    pub fn from_sm2(public_key: &sm2::PublicKey) -> Self {
        Self {
            point: EcPoint::from_sm2(public_key),
        }
    }

    pub fn point(&self) -> &EcPoint {
        &self.point
    }

    /// Copy this key's curve, x and y verbatim into the SM2 key shape.
    ///
    /// Total and purely structural: no cryptographic transformation and no
    /// validation happens here. The result is only semantically usable
    /// when the material's curve parameters are ones the SM2 primitive
    /// accepts; anything else fails verification downstream.
    pub fn to_sm2(&self) -> Sm2PublicKey {
        Sm2PublicKey {
            point: self.point.clone(),
        }
    }
}

/// ECDSA private key: the shared public point plus the secret scalar.
///
/// The scalar is wiped on drop and redacted from debug output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EcdsaPrivateKey {
    #[zeroize(skip)]
    point: EcPoint,
    d: [u8; 32],
}

impl EcdsaPrivateKey {
    /// Wrap a P-256 secret key.
    pub fn from_p256(secret_key: &p256::SecretKey) -> Self {
        let point = EcPoint::from_p256(&secret_key.public_key());
        let mut d = [0u8; 32];
        d.copy_from_slice(&secret_key.to_bytes());
        Self { point, d }
    }

    /// Wrap SM2-curve material as an ECDSA-typed handle.
    ///
    /// See [`EcdsaPublicKey::from_sm2`] for when this shape is useful.
    pub fn from_sm2(secret_key: &sm2::SecretKey) -> Self {
        let point = EcPoint::from_sm2(&secret_key.public_key());
        let mut d = [0u8; 32];
        d.copy_from_slice(&secret_key.to_bytes());
        Self { point, d }
    }

    pub fn point(&self) -> &EcPoint {
        &self.point
    }

    pub(crate) fn scalar(&self) -> &[u8; 32] {
        &self.d
    }

    /// The public half, taken from the embedded point. The point is never
    /// recomputed from the scalar, so signer and verifier always agree on
    /// the key's identity.
    pub fn public_key(&self) -> EcdsaPublicKey {
        EcdsaPublicKey {
            point: self.point.clone(),
        }
    }

    /// Copy this key's curve, x, y and d verbatim into the SM2 key shape.
    ///
    /// Total and purely structural; see [`EcdsaPublicKey::to_sm2`] for the
    /// compatibility precondition.
    pub fn to_sm2(&self) -> Sm2PrivateKey {
        Sm2PrivateKey {
            point: self.point.clone(),
            d: self.d,
        }
    }
}

impl fmt::Debug for EcdsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcdsaPrivateKey {{ point: {:?}, d: [REDACTED] }}", self.point)
    }
}

/// Public half of an SM2 key pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sm2PublicKey {
    point: EcPoint,
}

impl Sm2PublicKey {
    /// Wrap an SM2 public key.
    pub fn from_public_key(public_key: &sm2::PublicKey) -> Self {
        Self {
            point: EcPoint::from_sm2(public_key),
        }
    }

    pub fn point(&self) -> &EcPoint {
        &self.point
    }
}

/// SM2 private key: the shared public point plus the secret scalar.
///
/// The scalar is wiped on drop and redacted from debug output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sm2PrivateKey {
    #[zeroize(skip)]
    point: EcPoint,
    d: [u8; 32],
}

impl Sm2PrivateKey {
    /// Wrap an SM2 secret key.
    pub fn from_secret_key(secret_key: &sm2::SecretKey) -> Self {
        let point = EcPoint::from_sm2(&secret_key.public_key());
        let mut d = [0u8; 32];
        d.copy_from_slice(&secret_key.to_bytes());
        Self { point, d }
    }

    pub fn point(&self) -> &EcPoint {
        &self.point
    }

    pub(crate) fn scalar(&self) -> &[u8; 32] {
        &self.d
    }

    /// The public half, taken from the embedded point (never recomputed).
    pub fn public_key(&self) -> Sm2PublicKey {
        Sm2PublicKey {
            point: self.point.clone(),
        }
    }
}

impl fmt::Debug for Sm2PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sm2PrivateKey {{ point: {:?}, d: [REDACTED] }}", self.point)
    }
}

/// Opaque key handle exposing only its type identity to generic code.
///
/// Each variant exclusively owns its material; handles are borrowed for
/// the duration of one operation and never retained by the dispatch layer.
#[derive(Clone, Debug)]
pub enum Key {
    EcdsaPrivate(EcdsaPrivateKey),
    EcdsaPublic(EcdsaPublicKey),
    Sm2Private(Sm2PrivateKey),
    Sm2Public(Sm2PublicKey),
}

impl Key {
    /// Concrete variant tag, the identity generic code dispatches on.
    pub fn variant(&self) -> KeyVariant {
        match self {
            Key::EcdsaPrivate(_) => KeyVariant::EcdsaPrivate,
            Key::EcdsaPublic(_) => KeyVariant::EcdsaPublic,
            Key::Sm2Private(_) => KeyVariant::Sm2Private,
            Key::Sm2Public(_) => KeyVariant::Sm2Public,
        }
    }

    /// The scheme this key natively belongs to.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Key::EcdsaPrivate(_) | Key::EcdsaPublic(_) => Algorithm::Ecdsa,
            Key::Sm2Private(_) | Key::Sm2Public(_) => Algorithm::Sm2,
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Key::EcdsaPrivate(_) | Key::Sm2Private(_))
    }

    /// The shared public point of this key.
    pub fn point(&self) -> &EcPoint {
        match self {
            Key::EcdsaPrivate(k) => k.point(),
            Key::EcdsaPublic(k) => k.point(),
            Key::Sm2Private(k) => k.point(),
            Key::Sm2Public(k) => k.point(),
        }
    }

    /// The corresponding public-key handle.
    ///
    /// For private variants the embedded public point is reused as-is;
    /// public variants return a clone of themselves.
    pub fn public_key(&self) -> Key {
        match self {
            Key::EcdsaPrivate(k) => Key::EcdsaPublic(k.public_key()),
            Key::EcdsaPublic(k) => Key::EcdsaPublic(k.clone()),
            Key::Sm2Private(k) => Key::Sm2Public(k.public_key()),
            Key::Sm2Public(k) => Key::Sm2Public(k.clone()),
        }
    }

    /// Subject key identifier: SHA-256 over the uncompressed public point.
    ///
    /// A private key and its derived public key share the same identifier.
    pub fn ski(&self) -> Vec<u8> {
        Sha256::digest(self.point().to_uncompressed_bytes()).to_vec()
    }

    /// Hex-encoded [`ski`](Self::ski).
    pub fn ski_hex(&self) -> String {
        hex::encode(self.ski())
    }
}

impl From<EcdsaPrivateKey> for Key {
    fn from(key: EcdsaPrivateKey) -> Self {
        Key::EcdsaPrivate(key)
    }
}

impl From<EcdsaPublicKey> for Key {
    fn from(key: EcdsaPublicKey) -> Self {
        Key::EcdsaPublic(key)
    }
}

impl From<Sm2PrivateKey> for Key {
    fn from(key: Sm2PrivateKey) -> Self {
        Key::Sm2Private(key)
    }
}

impl From<Sm2PublicKey> for Key {
    fn from(key: Sm2PublicKey) -> Self {
        Key::Sm2Public(key)
    }
}

#[cfg(test)]
mod tests {
    use p256::elliptic_curve::rand_core::OsRng;

    use super::*;

    #[test]
    fn test_private_and_public_share_identity() {
        let secret = p256::SecretKey::random(&mut OsRng);
        let key = Key::EcdsaPrivate(EcdsaPrivateKey::from_p256(&secret));
        let public = key.public_key();

        assert_eq!(public.variant(), KeyVariant::EcdsaPublic);
        assert_eq!(key.ski(), public.ski());
        assert_eq!(key.point(), public.point());
        assert!(key.is_private());
        assert!(!public.is_private());
    }

    #[test]
    fn test_reinterpretation_preserves_components() {
        let secret = sm2::SecretKey::random(&mut OsRng);
        let ecdsa_key = EcdsaPrivateKey::from_sm2(&secret);

        let shape = ecdsa_key.to_sm2();
        assert_eq!(shape.point(), ecdsa_key.point());
        assert_eq!(shape.scalar(), ecdsa_key.scalar());
        assert_eq!(shape.point().curve, NamedCurve::Sm2P256);

        let public_shape = ecdsa_key.public_key().to_sm2();
        assert_eq!(public_shape.point(), ecdsa_key.point());
    }

    #[test]
    fn test_reinterpretation_keeps_foreign_curve_tag() {
        let secret = p256::SecretKey::random(&mut OsRng);
        let ecdsa_key = EcdsaPrivateKey::from_p256(&secret);

        // the copy is verbatim, including a curve the SM2 primitive rejects
        let shape = ecdsa_key.to_sm2();
        assert_eq!(shape.point().curve, NamedCurve::P256);
    }

    #[test]
    fn test_native_schemes() {
        let p256_secret = p256::SecretKey::random(&mut OsRng);
        let sm2_secret = sm2::SecretKey::random(&mut OsRng);

        let ecdsa_key = Key::EcdsaPrivate(EcdsaPrivateKey::from_p256(&p256_secret));
        let sm2_key = Key::Sm2Private(Sm2PrivateKey::from_secret_key(&sm2_secret));

        assert_eq!(ecdsa_key.algorithm(), Algorithm::Ecdsa);
        assert_eq!(sm2_key.algorithm(), Algorithm::Sm2);
    }

    #[test]
    fn test_debug_redacts_scalar() {
        let secret = p256::SecretKey::random(&mut OsRng);
        let key = EcdsaPrivateKey::from_p256(&secret);

        let rendered = format!("{key:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains(&hex::encode(key.scalar())));
    }

    #[test]
    fn test_uncompressed_encoding_layout() {
        let secret = sm2::SecretKey::random(&mut OsRng);
        let key = Sm2PrivateKey::from_secret_key(&secret);

        let bytes = key.point().to_uncompressed_bytes();
        assert_eq!(bytes.len(), 65);
        assert_eq!(bytes[0], 0x04);
        assert_eq!(&bytes[1..33], &key.point().x[..]);
        assert_eq!(&bytes[33..], &key.point().y[..]);
    }
}
