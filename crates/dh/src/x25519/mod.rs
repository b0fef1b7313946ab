// File: crates/dh/src/x25519/mod.rs
//! Diffie-Hellman keypair on Curve25519 (X25519)
//!
//! Public keys travel as the raw 32-byte u-coordinate. The shared secret is
//! the raw 32-byte X25519 output.
//!
//! # Security Features
//!
//! - Every imported public key is screened against the known-degenerate
//!   encodings in [`validate`] before it is stored, blocking small-subgroup
//!   confinement attacks.
//! - Freshly generated public keys pass the same screen; a rejection triggers
//!   a bounded regeneration loop rather than unbounded recursion.
//! - An all-zero (non-contributory) shared secret is surfaced as an error,
//!   never returned to the caller.

use dkex_api::{CurveType, Error, KeyExchange, PublicKeyMessage, Result, SharedSecret};
use rand::{CryptoRng, RngCore};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

use crate::MAX_KEYGEN_ATTEMPTS;

pub mod validate;

/// Size of an X25519 public key in bytes.
pub const X25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of an X25519 private scalar in bytes.
pub const X25519_SCALAR_SIZE: usize = 32;

/// Diffie-Hellman keypair on Curve25519.
///
/// The public-key slot holds the local public key after generation; a
/// successful [`KeyExchange::import_public_key`] replaces it with the peer's
/// key, leaving the private scalar untouched.
#[derive(Clone)]
pub struct X25519Keypair {
    secret: StaticSecret,
    public: PublicKey,
}

impl core::fmt::Debug for X25519Keypair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // StaticSecret has no Debug impl; never expose the private scalar.
        f.debug_struct("X25519Keypair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl KeyExchange for X25519Keypair {
    fn name() -> &'static str {
        "DH-X25519"
    }

    fn curve_type() -> CurveType {
        CurveType::Curve25519
    }

    fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        for _ in 0..MAX_KEYGEN_ATTEMPTS {
            let mut secret_bytes = Zeroizing::new([0u8; X25519_SCALAR_SIZE]);
            rng.try_fill_bytes(secret_bytes.as_mut_slice())?;

            // Clamping happens inside the scalar multiplication.
            let secret = StaticSecret::from(*secret_bytes);
            let public = PublicKey::from(&secret);
            if validate::is_valid(public.as_bytes()) {
                return Ok(Self { secret, public });
            }
        }
        Err(Error::RandomSource {
            context: "X25519 keypair generation",
            #[cfg(feature = "std")]
            message: "degenerate public key retry budget exhausted".to_string(),
        })
    }

    fn export_public_key(&self) -> PublicKeyMessage {
        PublicKeyMessage::new(CurveType::Curve25519, self.public.as_bytes().to_vec())
    }

    fn import_public_key(&mut self, message: &PublicKeyMessage) -> Result<()> {
        if message.curve_type() != CurveType::Curve25519 {
            return Err(Error::WrongCurveType {
                expected: CurveType::Curve25519,
                actual: message.curve_type(),
            });
        }

        let bytes = decode_public_bytes("X25519 public key import", message.public_key_data())?;
        if !validate::is_valid(&bytes) {
            return Err(Error::KeyVerification {
                context: "X25519 public key import",
            });
        }

        self.public = PublicKey::from(bytes);
        Ok(())
    }

    fn compute_shared_secret(&self, peer: &PublicKeyMessage) -> Result<SharedSecret> {
        if peer.curve_type() != CurveType::Curve25519 {
            return Err(Error::CurveMismatch {
                local: CurveType::Curve25519,
                peer: peer.curve_type(),
            });
        }

        let peer_bytes = decode_public_bytes("X25519 peer public key", peer.public_key_data())?;
        let shared = self.secret.diffie_hellman(&PublicKey::from(peer_bytes));

        // A low-order peer key confines the result to zero; refuse it.
        if !shared.was_contributory() {
            return Err(Error::KeyVerification {
                context: "X25519 shared secret is zero",
            });
        }

        Ok(SharedSecret::new(*shared.as_bytes()))
    }
}

fn decode_public_bytes(context: &'static str, data: &[u8]) -> Result<[u8; X25519_PUBLIC_KEY_SIZE]> {
    if data.len() != X25519_PUBLIC_KEY_SIZE {
        return Err(Error::InvalidLength {
            context,
            expected: X25519_PUBLIC_KEY_SIZE,
            actual: data.len(),
        });
    }
    let mut bytes = [0u8; X25519_PUBLIC_KEY_SIZE];
    bytes.copy_from_slice(data);
    Ok(bytes)
}
