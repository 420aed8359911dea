//! The Keccak-f[1600] permutation, in its standard 24-round form and a
//! 12-round variant running only the last half of the schedule.
//!
//! This crate is the permutation only. Padding, rate and capacity, and
//! everything else a sponge needs belong to the caller, which invokes
//! [`full`] or [`half`] once per block on a 200-byte [`State`] laid out as in
//! the Keccak reference: lane `(x, y)` little-endian at byte `8 * (x + 5 * y)`.

#![no_std]

mod batch;
mod constants;
mod error;
mod f1600;
mod mode;
mod permutation;
mod round;
mod state;

pub use batch::*;
pub use constants::*;
pub use error::*;
pub use f1600::*;
pub use mode::*;
pub use permutation::*;
pub use state::*;
