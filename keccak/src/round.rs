//! One round of Keccak-f[1600] over a plane-major matrix, `state[y][x]`.
//!
//! The round operates on the lane-complemented representation: the lanes in
//! [`COMPLEMENTED_LANES`](crate::COMPLEMENTED_LANES) are held inverted for the
//! whole permutation, and `chi` is rewritten so that this invariant survives
//! every round. Theta, rho, pi and iota are linear (or affine in a single
//! lane) and need no change.
//!
//! Every step uses fixed rotations, fixed lane positions and plain bitwise
//! operations only.

use core::array;

use crate::constants::{COMPLEMENTED_LANES, RC, RHO};
use crate::state::Lanes;

/// The state as a 5x5 matrix of lanes, indexed `[y][x]`.
pub(crate) type Matrix = [[u64; 5]; 5];

#[inline(always)]
pub(crate) fn form_matrix(lanes: &Lanes) -> Matrix {
    array::from_fn(|y| array::from_fn(|x| lanes[x + 5 * y]))
}

#[inline(always)]
pub(crate) fn flatten(state: &Matrix) -> Lanes {
    array::from_fn(|i| state[i / 5][i % 5])
}

/// Column parities combined with their neighbours: `C[x - 1] ^ rotl(C[x + 1], 1)`.
#[inline(always)]
fn get_theta_parities(state: &Matrix) -> [u64; 5] {
    let parities: [u64; 5] =
        array::from_fn(|x| state[0][x] ^ state[1][x] ^ state[2][x] ^ state[3][x] ^ state[4][x]);
    array::from_fn(|x| parities[(x + 4) % 5] ^ parities[(x + 1) % 5].rotate_left(1))
}

#[inline(always)]
pub(crate) fn theta(state: Matrix) -> Matrix {
    let theta_parities = get_theta_parities(&state);
    array::from_fn(|y| array::from_fn(|x| state[y][x] ^ theta_parities[x]))
}

#[inline(always)]
pub(crate) fn rho(state: Matrix) -> Matrix {
    array::from_fn(|y| array::from_fn(|x| state[y][x].rotate_left(RHO[y][x])))
}

#[inline(always)]
pub(crate) fn pi(state: Matrix) -> Matrix {
    array::from_fn(|y| array::from_fn(|x| state[x][(x + 3 * y) % 5]))
}

/// Chi on the complemented representation.
///
/// Each entry is `a ^ (!b & c)` after substituting the complemented inputs
/// and outputs of its plane and applying De Morgan. At most one lane per
/// plane is still negated.
#[inline(always)]
pub(crate) fn chi(state: Matrix) -> Matrix {
    let [b0, b1, b2, b3, b4] = state;
    [
        [
            b0[0] ^ (b0[1] | b0[2]),
            b0[1] ^ (!b0[2] | b0[3]),
            b0[2] ^ (b0[3] & b0[4]),
            b0[3] ^ (b0[4] | b0[0]),
            b0[4] ^ (b0[0] & b0[1]),
        ],
        [
            b1[0] ^ (b1[1] | b1[2]),
            b1[1] ^ (b1[2] & b1[3]),
            b1[2] ^ (b1[3] | !b1[4]),
            b1[3] ^ (b1[4] | b1[0]),
            b1[4] ^ (b1[0] & b1[1]),
        ],
        [
            b2[0] ^ (b2[1] | b2[2]),
            b2[1] ^ (b2[2] & b2[3]),
            b2[2] ^ (!b2[3] & b2[4]),
            !b2[3] ^ (b2[4] | b2[0]),
            b2[4] ^ (b2[0] & b2[1]),
        ],
        [
            b3[0] ^ (b3[1] & b3[2]),
            b3[1] ^ (b3[2] | b3[3]),
            b3[2] ^ (!b3[3] | b3[4]),
            !b3[3] ^ (b3[4] & b3[0]),
            b3[4] ^ (b3[0] | b3[1]),
        ],
        [
            b4[0] ^ (!b4[1] & b4[2]),
            !b4[1] ^ (b4[2] | b4[3]),
            b4[2] ^ (b4[3] & b4[4]),
            b4[3] ^ (b4[4] | b4[0]),
            b4[4] ^ (b4[0] & b4[1]),
        ],
    ]
}

#[inline(always)]
pub(crate) fn iota(i: usize, state: Matrix) -> Matrix {
    let mut res = state;
    res[0][0] ^= RC[i];
    res
}

/// Round `i` of the schedule, `i` being the absolute round index in `0..24`.
#[inline(always)]
pub(crate) fn round(i: usize, state: Matrix) -> Matrix {
    let mut state = state;
    state = theta(state);
    state = rho(state);
    state = pi(state);
    state = chi(state);
    state = iota(i, state);
    state
}

/// Flips the lanes held complemented inside the round sequence.
#[inline(always)]
pub(crate) fn complement_lanes(lanes: &mut Lanes) {
    for i in COMPLEMENTED_LANES {
        lanes[i] = !lanes[i];
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::constants::NUM_ROUNDS;
    use crate::state::NUM_LANES;

    /// Chi as written in the Keccak reference, without complemented lanes.
    fn plain_chi(state: Matrix) -> Matrix {
        array::from_fn(|y| {
            array::from_fn(|x| state[y][x] ^ (!state[y][(x + 1) % 5] & state[y][(x + 2) % 5]))
        })
    }

    fn plain_round(i: usize, state: Matrix) -> Matrix {
        iota(i, plain_chi(pi(rho(theta(state)))))
    }

    fn random_lanes(rng: &mut SmallRng) -> Lanes {
        array::from_fn(|_| rng.random())
    }

    #[test]
    fn test_matrix_layout() {
        let lanes: Lanes = array::from_fn(|i| i as u64);
        let state = form_matrix(&lanes);
        assert_eq!(state[0][1], 1);
        assert_eq!(state[1][0], 5);
        assert_eq!(state[3][2], 17);
        assert_eq!(flatten(&state), lanes);
    }

    #[test]
    fn test_pi_moves_lanes() {
        let lanes: Lanes = array::from_fn(|i| i as u64);
        let state = pi(form_matrix(&lanes));
        // Lane (x, y) moves to (y, 2x + 3y).
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(state[(2 * x + 3 * y) % 5][y], (x + 5 * y) as u64);
            }
        }
    }

    #[test]
    fn test_theta_on_single_bit() {
        let mut lanes = [0u64; NUM_LANES];
        lanes[0] = 1;
        let state = theta(form_matrix(&lanes));
        // Column 0 has odd parity, which feeds columns 1 (unrotated) and 4 (rotated by one).
        for y in 0..5 {
            assert_eq!(state[y][0], (y == 0) as u64);
            assert_eq!(state[y][1], 1);
            assert_eq!(state[y][2], 0);
            assert_eq!(state[y][3], 0);
            assert_eq!(state[y][4], 2);
        }
    }

    #[test]
    fn test_complemented_round_matches_plain_round() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..16 {
            let lanes = random_lanes(&mut rng);
            for i in 0..NUM_ROUNDS {
                let expected = flatten(&plain_round(i, form_matrix(&lanes)));

                let mut complemented = lanes;
                complement_lanes(&mut complemented);
                let mut computed = flatten(&round(i, form_matrix(&complemented)));
                complement_lanes(&mut computed);

                assert_eq!(computed, expected, "round {i}");
            }
        }
    }

    #[test]
    fn test_complement_is_an_involution() {
        let mut rng = SmallRng::seed_from_u64(2);
        let lanes = random_lanes(&mut rng);
        let mut twice = lanes;
        complement_lanes(&mut twice);
        assert_ne!(twice, lanes);
        complement_lanes(&mut twice);
        assert_eq!(twice, lanes);
    }
}
