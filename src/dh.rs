//! Facade for the Diffie-Hellman keypair variants
//!
//! Re-exports the curve variants and validator from `dkex-dh`.

pub use dkex_dh::keypair::Keypair;
pub use dkex_dh::p256::{P256Keypair, P256_POINT_COMPRESSED_SIZE, P256_SCALAR_SIZE};
pub use dkex_dh::x25519::{validate, X25519Keypair, X25519_PUBLIC_KEY_SIZE, X25519_SCALAR_SIZE};
pub use dkex_dh::MAX_KEYGEN_ATTEMPTS;
