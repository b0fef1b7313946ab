//! # dkex
//!
//! A curve-agnostic elliptic-curve Diffie-Hellman key exchange library.
//!
//! Two curve variants are supported, NIST P-256 and Curve25519, behind one
//! shared contract: generate a keypair, export the public key for transport,
//! import and validate a peer's public key, and derive a 32-byte shared
//! secret. Imported keys are screened against invalid-curve and
//! small-subgroup confinement attacks before use.
//!
//! ## Usage
//!
//! ```
//! use dkex::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let mut rng = OsRng;
//!
//! let alice = Keypair::generate(CurveType::Curve25519, &mut rng)?;
//! let bob = Keypair::generate(CurveType::Curve25519, &mut rng)?;
//!
//! // Public keys cross the wire as curve tag + raw bytes
//! let alice_shared = alice.compute_shared_secret(&bob.export_public_key())?;
//! let bob_shared = bob.compute_shared_secret(&alice.export_public_key())?;
//! assert_eq!(alice_shared, bob_shared);
//! # Ok::<(), dkex::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from two sub-crates:
//!
//! - `dkex-api`: the keypair contract, error taxonomy and transport types
//! - `dkex-dh`: the P-256 and Curve25519 keypair variants and the public-key
//!   validator

#![cfg_attr(not(feature = "std"), no_std)]

pub mod dh;

// Re-exports
pub use dkex_api as api;
pub use dkex_api::{CurveType, Error, KeyExchange, PublicKeyMessage, Result, SharedSecret};

/// Re-exports commonly used items
pub mod prelude {
    pub use dkex_api::{
        CurveType, Error, KeyExchange, PublicKeyMessage, Result, SharedSecret,
        SHARED_SECRET_SIZE,
    };

    pub use crate::dh::{Keypair, P256Keypair, X25519Keypair};
}
