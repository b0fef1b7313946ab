//! Trait definition for the curve-agnostic keypair contract
//!
//! Both curve variants satisfy this contract, letting callers drive a key
//! exchange without knowing which curve is underneath.

use rand::{CryptoRng, RngCore};

use crate::error::Result;
use crate::types::{CurveType, PublicKeyMessage, SharedSecret};

/// Diffie-Hellman keypair contract shared by both curve variants.
///
/// # Security Design
///
/// Imported public keys are validated before they are stored or used, so a
/// malicious peer cannot steer the exchange onto a degenerate point. All
/// failures are typed results; no operation panics on peer-controlled input.
pub trait KeyExchange: Sized {
    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Curve this variant operates on.
    fn curve_type() -> CurveType;

    /// Generate a fresh keypair.
    ///
    /// # Security Requirements
    /// - Must draw all randomness from the provided CSPRNG.
    /// - Must fail with [`crate::Error::RandomSource`] if the entropy source
    ///   is unavailable, never silently degrade.
    fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self>;

    /// Encode the current public key for transport.
    ///
    /// Pure and deterministic: exporting twice from an unmodified keypair
    /// yields byte-identical messages.
    fn export_public_key(&self) -> PublicKeyMessage;

    /// Validate a peer's message and store its key in the public-key slot.
    ///
    /// Checks the curve tag, decodes the payload and screens it for
    /// known-degenerate values before anything is stored. Never consults or
    /// mutates the private scalar.
    fn import_public_key(&mut self, message: &PublicKeyMessage) -> Result<()>;

    /// Combine the local private scalar with a peer's public key.
    ///
    /// The peer message's curve tag must match [`Self::curve_type`];
    /// anything else is a precondition violation surfaced as
    /// [`crate::Error::CurveMismatch`].
    fn compute_shared_secret(&self, peer: &PublicKeyMessage) -> Result<SharedSecret>;
}
