// File: crates/dh/src/p256/mod.rs
//! Diffie-Hellman keypair on NIST P-256
//!
//! Public keys travel as SEC1 compressed points (33 bytes). The shared secret
//! is the SHA-256 digest of the x-coordinate of the ECDH result, 32 bytes.
//!
//! # Security Features
//!
//! - Point validation on import prevents invalid-curve attacks; off-curve,
//!   truncated and identity encodings are all rejected by the SEC1 decoder.
//! - Scalar generation uses bounded rejection sampling against a typed
//!   entropy-failure path.
//! - The private scalar is held in a [`SecretKey`] and wiped on drop.

use ::p256::elliptic_curve::sec1::ToEncodedPoint;
use ::p256::{ecdh, PublicKey, SecretKey};
use dkex_api::{CurveType, Error, KeyExchange, PublicKeyMessage, Result, SharedSecret};
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::MAX_KEYGEN_ATTEMPTS;

/// Size of a SEC1 compressed P-256 point in bytes (prefix + x-coordinate).
pub const P256_POINT_COMPRESSED_SIZE: usize = 33;

/// Size of a P-256 private scalar in bytes.
pub const P256_SCALAR_SIZE: usize = 32;

/// Diffie-Hellman keypair on the NIST P-256 curve.
///
/// The public-key slot holds the local public key after generation; a
/// successful [`KeyExchange::import_public_key`] replaces it with the peer's
/// key, leaving the private scalar untouched.
#[derive(Clone, Debug)]
pub struct P256Keypair {
    secret: SecretKey,
    public: PublicKey,
}

/// Decodes a SEC1 compressed point, rejecting every other encoding.
///
/// Only the 33-byte compressed form (prefix `0x02` or `0x03`) is accepted;
/// uncompressed and compact encodings fail even though the underlying SEC1
/// decoder would take them.
fn decode_compressed_point(data: &[u8], context: &'static str) -> Result<PublicKey> {
    if data.len() != P256_POINT_COMPRESSED_SIZE || !matches!(data[0], 0x02 | 0x03) {
        return Err(Error::Unmarshal { context });
    }
    PublicKey::from_sec1_bytes(data).map_err(|_| Error::Unmarshal { context })
}

impl KeyExchange for P256Keypair {
    fn name() -> &'static str {
        "DH-P256"
    }

    fn curve_type() -> CurveType {
        CurveType::P256
    }

    fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        for _ in 0..MAX_KEYGEN_ATTEMPTS {
            let mut scalar_bytes = Zeroizing::new([0u8; P256_SCALAR_SIZE]);
            rng.try_fill_bytes(scalar_bytes.as_mut_slice())?;

            // Zero and out-of-range scalars are redrawn.
            if let Ok(secret) = SecretKey::from_slice(scalar_bytes.as_slice()) {
                let public = secret.public_key();
                return Ok(Self { secret, public });
            }
        }
        Err(Error::RandomSource {
            context: "P-256 keypair generation",
            #[cfg(feature = "std")]
            message: "scalar rejection budget exhausted".to_string(),
        })
    }

    fn export_public_key(&self) -> PublicKeyMessage {
        PublicKeyMessage::new(
            CurveType::P256,
            self.public.to_encoded_point(true).as_bytes().to_vec(),
        )
    }

    fn import_public_key(&mut self, message: &PublicKeyMessage) -> Result<()> {
        if message.curve_type() != CurveType::P256 {
            return Err(Error::WrongCurveType {
                expected: CurveType::P256,
                actual: message.curve_type(),
            });
        }

        // Covers truncated payloads, off-curve x-coordinates, bad prefix
        // bytes and the identity encoding.
        self.public = decode_compressed_point(message.public_key_data(), "P-256 public key import")?;
        Ok(())
    }

    fn compute_shared_secret(&self, peer: &PublicKeyMessage) -> Result<SharedSecret> {
        if peer.curve_type() != CurveType::P256 {
            return Err(Error::CurveMismatch {
                local: CurveType::P256,
                peer: peer.curve_type(),
            });
        }

        let peer_key = decode_compressed_point(peer.public_key_data(), "P-256 peer public key")?;

        let shared = ecdh::diffie_hellman(self.secret.to_nonzero_scalar(), peer_key.as_affine());
        let digest = Sha256::digest(shared.raw_secret_bytes());
        Ok(SharedSecret::new(digest.into()))
    }
}

#[cfg(test)]
mod tests;
