#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::instrument;

use crate::f1600::permute;
use crate::mode::Mode;
use crate::state::State;

/// Permutes each of `states` independently.
///
/// With the `parallel` feature the states are spread over the rayon pool. The
/// rounds of any single state always run in sequence.
#[instrument(level = "debug", skip_all, fields(states = states.len(), mode = %mode))]
pub fn permute_batch(states: &mut [State], mode: Mode) {
    #[cfg(feature = "parallel")]
    states.par_iter_mut().for_each(|state| permute(state, mode));

    #[cfg(not(feature = "parallel"))]
    states.iter_mut().for_each(|state| permute(state, mode));
}
