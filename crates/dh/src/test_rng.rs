// File: crates/dh/src/test_rng.rs
//! RNG stubs shared by the keypair test modules.

use core::num::NonZeroU32;

use rand::{CryptoRng, Error, RngCore};

/// An entropy source that is permanently unavailable.
///
/// Every `try_fill_bytes` call fails, modelling a CSPRNG outage.
pub(crate) struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        unimplemented!("FailingRng only serves try_fill_bytes")
    }

    fn next_u64(&mut self) -> u64 {
        unimplemented!("FailingRng only serves try_fill_bytes")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unimplemented!("FailingRng only serves try_fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> core::result::Result<(), Error> {
        let code = NonZeroU32::new(Error::CUSTOM_START).unwrap();
        Err(Error::from(code))
    }
}

impl CryptoRng for FailingRng {}
