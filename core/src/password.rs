//! Runs a rotation sequence on a fresh dial and counts zeros.

use dialr_common::config::CountMethod;
use dialr_common::rotation::Rotation;
use tracing::trace;

use crate::dial::Dial;

/// Applies `rotations` in order to a dial starting at 50 and returns the
/// password according to `method`.
pub fn count_zeros(rotations: &[Rotation], method: CountMethod) -> u64 {
    let mut dial = Dial::new();

    rotations.iter().fold(0, |acc, &rotation| {
        let hits = match method {
            CountMethod::Landing => u64::from(dial.turn(rotation) == 0),
            CountMethod::Passing => dial.turn_counting_zeros(rotation),
        };
        trace!("{rotation} -> {} ({hits} zeros)", dial.number());
        acc + hits
    })
}

/// Dial position after each rotation, in order.
pub fn positions(rotations: &[Rotation]) -> Vec<u8> {
    let mut dial = Dial::new();
    rotations
        .iter()
        .map(|&rotation| dial.turn(rotation))
        .collect()
}
