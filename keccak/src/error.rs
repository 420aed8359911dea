//! Error types.
//!
//! The permutation itself is total over its fixed-size input, so these only
//! surface at the boundaries where a caller hands in unchecked data.

use thiserror::Error;

/// Errors raised when converting caller data into the crate's fixed types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeccakError {
    /// A byte slice offered as a state does not hold exactly 200 bytes.
    #[error("invalid Keccak-f[1600] state length: expected 200 bytes, got {len}")]
    InvalidStateLength {
        /// Length of the rejected slice.
        len: usize,
    },

    /// A mode name was not recognised.
    #[error("unknown permutation mode, expected \"full\" or \"half\"")]
    UnknownMode,
}

/// Result type alias for fallible conversions in this crate.
pub type KeccakResult<T> = core::result::Result<T, KeccakError>;
