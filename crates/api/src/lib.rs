//! Public API traits and types for the dkex library
//!
//! This crate provides the public API surface shared by every curve variant:
//! the keypair contract, the error taxonomy, and the transport types carried
//! across the wire.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// The transport types carry heap-allocated payloads.
#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("dkex-api requires either the `std` or the `alloc` feature");

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::KeyExchange;
pub use types::{CurveType, PublicKeyMessage, SharedSecret, SHARED_SECRET_SIZE};
