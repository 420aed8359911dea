/// Number of rounds in the full Keccak-f[1600] schedule.
pub const NUM_ROUNDS: usize = 24;

/// Number of rounds run by the half permutation. These are always the last
/// `HALF_ROUNDS` rounds of the full schedule.
pub const HALF_ROUNDS: usize = 12;

/// Round constants, indexed by absolute round number.
pub const RC: [u64; NUM_ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, indexed `[y][x]`.
pub const RHO: [[u32; 5]; 5] = [
    [0, 1, 62, 28, 27],
    [36, 44, 6, 55, 20],
    [3, 10, 43, 25, 39],
    [41, 45, 15, 21, 8],
    [18, 2, 61, 56, 14],
];

/// Lanes held complemented between entry and exit of the permutation, as
/// indices `x + 5 * y`. These are (1, 0), (2, 0), (3, 1), (2, 2), (2, 3) and
/// (0, 4).
pub const COMPLEMENTED_LANES: [usize; 6] = [1, 2, 8, 12, 17, 20];
