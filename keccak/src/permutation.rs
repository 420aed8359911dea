//! Trait-level access to the permutation, for sponge layers generic over it.

use crate::f1600::{permute, permute_lanes};
use crate::mode::Mode;
use crate::state::{Lanes, State};

/// A permutation in the mathematical sense.
pub trait Permutation<T: Clone>: Clone {
    fn permute(&self, mut input: T) -> T {
        self.permute_mut(&mut input);
        input
    }

    fn permute_mut(&self, input: &mut T);
}

/// A permutation thought to be cryptographically secure, in the sense that it is thought to be
/// difficult to distinguish (in a nontrivial way) from a random permutation.
pub trait CryptographicPermutation<T: Clone>: Permutation<T> {}

/// The 24-round Keccak-f[1600] permutation.
#[derive(Copy, Clone, Debug, Default)]
pub struct KeccakF;

/// The last 12 rounds of Keccak-f[1600].
#[derive(Copy, Clone, Debug, Default)]
pub struct KeccakFHalf;

macro_rules! impl_keccak_permutation {
    ($name:ident, $mode:expr) => {
        impl $name {
            /// The round schedule this permutation runs.
            pub const MODE: Mode = $mode;
        }

        impl Permutation<State> for $name {
            #[inline]
            fn permute_mut(&self, input: &mut State) {
                permute(input, Self::MODE);
            }
        }

        impl CryptographicPermutation<State> for $name {}

        impl Permutation<Lanes> for $name {
            #[inline]
            fn permute_mut(&self, input: &mut Lanes) {
                permute_lanes(input, Self::MODE);
            }
        }

        impl CryptographicPermutation<Lanes> for $name {}
    };
}

impl_keccak_permutation!(KeccakF, Mode::Full);
impl_keccak_permutation!(KeccakFHalf, Mode::Half);
