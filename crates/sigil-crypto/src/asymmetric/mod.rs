//! Asymmetric signature primitives
//!
//! Each module exposes the same two operations — sign a caller-supplied
//! digest, verify a signature over one — for a single scheme. Digests are
//! consumed as-is; no hashing happens here.

pub mod ecdsa;
pub mod sm2;
