//! The canonical byte layout of the 1600-bit state.
//!
//! Lane `(x, y)` is stored little-endian at bytes `8 * (x + 5 * y)..8 * (x + 5 * y) + 8`.
//! Conversions assemble each lane from its bytes explicitly, so the layout is
//! the same on every host regardless of native byte order.

use core::array;

use crate::error::{KeccakError, KeccakResult};

/// Size of the state in bytes.
pub const STATE_BYTES: usize = 200;

/// Number of 64-bit lanes in the state.
pub const NUM_LANES: usize = 25;

const LANE_BYTES: usize = 8;

/// The permutation state as bytes, in the canonical layout.
pub type State = [u8; STATE_BYTES];

/// The permutation state as lanes, lane `(x, y)` at index `x + 5 * y`.
pub type Lanes = [u64; NUM_LANES];

/// Position of lane `(x, y)` within [`Lanes`].
#[inline(always)]
pub const fn lane_index(x: usize, y: usize) -> usize {
    debug_assert!(x < 5 && y < 5);
    x + 5 * y
}

/// Decodes the 25 lanes of `state`.
#[inline]
pub fn load_lanes(state: &State) -> Lanes {
    array::from_fn(|i| {
        let mut bytes = [0u8; LANE_BYTES];
        bytes.copy_from_slice(&state[i * LANE_BYTES..(i + 1) * LANE_BYTES]);
        u64::from_le_bytes(bytes)
    })
}

/// Encodes `lanes` into `state`.
#[inline]
pub fn store_lanes(lanes: &Lanes, state: &mut State) {
    for (chunk, lane) in state.chunks_exact_mut(LANE_BYTES).zip(lanes) {
        chunk.copy_from_slice(&lane.to_le_bytes());
    }
}

/// Copies a borrowed byte slice into an owned [`State`].
///
/// Fails unless `bytes` is exactly [`STATE_BYTES`] long.
pub fn state_from_slice(bytes: &[u8]) -> KeccakResult<State> {
    bytes
        .try_into()
        .map_err(|_| KeccakError::InvalidStateLength { len: bytes.len() })
}
