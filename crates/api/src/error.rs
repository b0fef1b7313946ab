//! Error type definitions for key-exchange operations

#[cfg(feature = "std")]
use std::string::String;

use crate::types::CurveType;

/// Primary error type for key-exchange operations
///
/// Every failure surfaces to the immediate caller as one of these variants;
/// nothing is logged or swallowed internally. Callers must treat any error
/// as a hard stop for that key-exchange attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Entropy source unavailable, or a generation retry budget was exhausted
    RandomSource {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Curve tag of an imported message does not match the importing keypair
    WrongCurveType {
        expected: CurveType,
        actual: CurveType,
    },

    /// Peer key handed to shared-secret computation lives on a different curve
    CurveMismatch {
        local: CurveType,
        peer: CurveType,
    },

    /// Point decoding failed (malformed or truncated payload)
    Unmarshal {
        context: &'static str,
    },

    /// Payload length does not match the curve's encoding
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Payload decodes structurally but matches a known-degenerate value
    KeyVerification {
        context: &'static str,
    },
}

/// Result type for key-exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::RandomSource { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::RandomSource { context } => {
                write!(f, "Random generation error: {}", context)
            }
            Self::WrongCurveType { expected, actual } => {
                write!(f, "Wrong curve type: expected {}, got {}", expected, actual)
            }
            Self::CurveMismatch { local, peer } => {
                write!(
                    f,
                    "Curve mismatch: local keypair is {}, peer key is {}",
                    local, peer
                )
            }
            Self::Unmarshal { context } => {
                write!(f, "Unmarshal failed: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::KeyVerification { context } => {
                write!(f, "Public key verification failed: {}", context)
            }
        }
    }
}

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<rand::Error> for Error {
    #[cfg_attr(not(feature = "std"), allow(unused_variables))]
    fn from(e: rand::Error) -> Self {
        Self::RandomSource {
            context: "entropy source",
            #[cfg(feature = "std")]
            message: e.to_string(),
        }
    }
}
