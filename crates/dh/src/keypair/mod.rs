//! Curve-agnostic keypair dispatch
//!
//! Callers that pick the curve at runtime go through [`Keypair`]; callers
//! that know it statically use [`P256Keypair`] or [`X25519Keypair`] directly
//! through the [`KeyExchange`] trait. Exactly two variants exist and no more
//! are anticipated, so flat enum dispatch is used instead of trait objects.

use dkex_api::{CurveType, KeyExchange, PublicKeyMessage, Result, SharedSecret};
use rand::{CryptoRng, RngCore};

use crate::p256::P256Keypair;
use crate::x25519::X25519Keypair;

/// A Diffie-Hellman keypair over either supported curve.
#[derive(Clone)]
pub enum Keypair {
    /// NIST P-256 variant
    P256(P256Keypair),
    /// Curve25519 variant
    Curve25519(X25519Keypair),
}

impl Keypair {
    /// Generate a fresh keypair on the requested curve.
    pub fn generate<R: CryptoRng + RngCore>(curve: CurveType, rng: &mut R) -> Result<Self> {
        match curve {
            CurveType::P256 => Ok(Self::P256(P256Keypair::generate(rng)?)),
            CurveType::Curve25519 => Ok(Self::Curve25519(X25519Keypair::generate(rng)?)),
        }
    }

    /// Curve this keypair operates on.
    pub fn curve_type(&self) -> CurveType {
        match self {
            Self::P256(_) => CurveType::P256,
            Self::Curve25519(_) => CurveType::Curve25519,
        }
    }

    /// Encode the current public key for transport.
    pub fn export_public_key(&self) -> PublicKeyMessage {
        match self {
            Self::P256(keypair) => keypair.export_public_key(),
            Self::Curve25519(keypair) => keypair.export_public_key(),
        }
    }

    /// Validate a peer's message and store its key in the public-key slot.
    pub fn import_public_key(&mut self, message: &PublicKeyMessage) -> Result<()> {
        match self {
            Self::P256(keypair) => keypair.import_public_key(message),
            Self::Curve25519(keypair) => keypair.import_public_key(message),
        }
    }

    /// Combine the local private scalar with a peer's public key.
    pub fn compute_shared_secret(&self, peer: &PublicKeyMessage) -> Result<SharedSecret> {
        match self {
            Self::P256(keypair) => keypair.compute_shared_secret(peer),
            Self::Curve25519(keypair) => keypair.compute_shared_secret(peer),
        }
    }
}

#[cfg(test)]
mod tests;
