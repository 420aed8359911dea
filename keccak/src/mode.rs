use core::fmt;
use core::str::FromStr;

use crate::constants::{HALF_ROUNDS, NUM_ROUNDS};
use crate::error::KeccakError;

/// Which suffix of the 24-round schedule a permutation call runs.
///
/// `Half` is not interchangeable with the standard Keccak-f[1600] used by
/// SHA-3 and SHAKE. It is provided as a building block for constructions that
/// specify a 12-round permutation themselves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Rounds 0 through 23.
    #[default]
    Full,
    /// Rounds 12 through 23.
    Half,
}

impl Mode {
    /// Absolute index of the first round executed.
    #[inline]
    pub const fn first_round(self) -> usize {
        NUM_ROUNDS - self.num_rounds()
    }

    /// Number of rounds executed.
    #[inline]
    pub const fn num_rounds(self) -> usize {
        match self {
            Self::Full => NUM_ROUNDS,
            Self::Half => HALF_ROUNDS,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Half => f.write_str("half"),
        }
    }
}

impl FromStr for Mode {
    type Err = KeccakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("full") || s == "24" {
            Ok(Self::Full)
        } else if s.eq_ignore_ascii_case("half") || s == "12" {
            Ok(Self::Half)
        } else {
            Err(KeccakError::UnknownMode)
        }
    }
}
