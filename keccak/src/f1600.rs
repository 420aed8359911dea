//! Entry points running the round schedule over a caller-owned state.

use crate::constants::NUM_ROUNDS;
use crate::mode::Mode;
use crate::round::{complement_lanes, flatten, form_matrix, round};
use crate::state::{Lanes, State, load_lanes, store_lanes};

/// Applies rounds `mode.first_round()..24` to `lanes` in place.
#[inline]
pub fn permute_lanes(lanes: &mut Lanes, mode: Mode) {
    complement_lanes(lanes);
    let mut state = form_matrix(lanes);
    for i in mode.first_round()..NUM_ROUNDS {
        state = round(i, state);
    }
    *lanes = flatten(&state);
    complement_lanes(lanes);
}

/// The 24-round Keccak-f[1600] permutation on lanes.
#[inline]
pub fn full_lanes(lanes: &mut Lanes) {
    permute_lanes(lanes, Mode::Full);
}

/// The last 12 rounds of Keccak-f[1600] on lanes.
#[inline]
pub fn half_lanes(lanes: &mut Lanes) {
    permute_lanes(lanes, Mode::Half);
}

/// Applies the permutation selected by `mode` to `state` in place.
#[inline]
pub fn permute(state: &mut State, mode: Mode) {
    let mut lanes = load_lanes(state);
    permute_lanes(&mut lanes, mode);
    store_lanes(&lanes, state);
}

/// The 24-round Keccak-f[1600] permutation.
pub fn full(state: &mut State) {
    permute(state, Mode::Full);
}

/// Rounds 12 through 23 of Keccak-f[1600], with their own round constants.
pub fn half(state: &mut State) {
    permute(state, Mode::Half);
}
