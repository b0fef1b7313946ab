//! Common types shared by every curve variant

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

/// Size of a derived shared secret in bytes, identical for both curves.
pub const SHARED_SECRET_SIZE: usize = 32;

/// Curve discriminator carried in every public-key message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CurveType {
    /// NIST P-256 (short Weierstrass)
    P256 = 0,
    /// Curve25519 (X25519 key agreement)
    Curve25519 = 1,
}

impl CurveType {
    /// Wire tag of this curve.
    pub fn to_wire(self) -> u8 {
        self as u8
    }

    /// Parse a wire tag back into a curve type.
    pub fn from_wire(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::P256),
            1 => Ok(Self::Curve25519),
            _ => Err(Error::Unmarshal {
                context: "curve type tag",
            }),
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P256 => f.write_str("P-256"),
            Self::Curve25519 => f.write_str("Curve25519"),
        }
    }
}

/// Transport representation of a public key: curve tag plus raw key bytes.
///
/// The payload encoding is tag-dependent: a 33-byte SEC1 compressed point for
/// [`CurveType::P256`], exactly 32 raw bytes for [`CurveType::Curve25519`].
/// A message is immutable once constructed and never holds secret material;
/// framing for network transport is left to the caller's serialization layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKeyMessage {
    curve_type: CurveType,
    public_key_data: Vec<u8>,
}

impl PublicKeyMessage {
    /// Create a message from a curve tag and raw key bytes.
    ///
    /// No validation happens here; the bytes are checked when a keypair
    /// imports the message or computes a shared secret from it.
    pub fn new(curve_type: CurveType, public_key_data: Vec<u8>) -> Self {
        Self {
            curve_type,
            public_key_data,
        }
    }

    /// Curve tag of the carried key.
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Raw key bytes.
    pub fn public_key_data(&self) -> &[u8] {
        &self.public_key_data
    }
}

/// Shared secret derived from one party's private scalar and the other's
/// public key.
///
/// Always [`SHARED_SECRET_SIZE`] bytes: the raw X25519 output for Curve25519,
/// the SHA-256 digest of the x-coordinate for P-256. Feed it into a key
/// derivation step and discard it; the buffer is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; SHARED_SECRET_SIZE]);

impl SharedSecret {
    /// Wrap derived secret bytes.
    pub fn new(bytes: [u8; SHARED_SECRET_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the secret bytes.
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.0
    }

    /// Export the secret bytes wrapped in [`Zeroizing`].
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_vec())
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Secret bytes never reach format output.
impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}

// Comparison must not leak where two secrets diverge.
impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SharedSecret {}
