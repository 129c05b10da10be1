use thiserror::Error;

use crate::primitives::Algorithm;

/// Errors reported by the primitive interface.
///
/// The cascade itself has no error path: every byte sequence is a valid input.
/// These only surface when a primitive is driven directly with parameters it
/// does not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{algorithm} does not support a {requested}-byte digest")]
    UnsupportedOutputLength {
        algorithm: Algorithm,
        requested: usize,
    },

    #[error("unknown hash algorithm (expected blake, groestl, jh, keccak or skein)")]
    UnknownAlgorithm,
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;
