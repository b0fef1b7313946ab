//! Diffie-Hellman keypair variants
//!
//! This crate implements the two curve variants of the dkex key-exchange
//! contract, NIST P-256 and Curve25519, plus the curve-agnostic [`Keypair`]
//! dispatch type. The underlying field and group arithmetic comes from the
//! `p256` and `x25519-dalek` crates; this crate owns key generation, the
//! transport encoding, and the validation of imported public keys.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Exported public keys carry heap-allocated payloads.
#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("dkex-dh requires either the `std` or the `alloc` feature");

pub mod keypair;
pub mod p256;
pub mod x25519;

#[cfg(test)]
pub(crate) mod test_rng;

// Re-exports
pub use self::keypair::Keypair;
pub use self::p256::P256Keypair;
pub use self::x25519::X25519Keypair;

/// Upper bound on key-generation attempts before giving up.
///
/// Honest randomness hits a rejected scalar or a degenerate public key with
/// negligible probability; the bound exists so a broken entropy source fails
/// deterministically instead of looping.
pub const MAX_KEYGEN_ATTEMPTS: usize = 16;
