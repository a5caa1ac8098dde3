//! Block planning - groups timed fragments by accumulated spoken duration

mod accumulator;
pub mod timestamp;


use crate::types::{BlockBoundary, FormatConfig, TimedFragment};

use accumulator::BlockAccumulator;

/// Pure function to determine block boundaries from a fragment sequence.
///
/// A block closes once its accumulated duration reaches the configured
/// interval; the fragment after that opens the next block. The first
/// fragment always opens a block, so every block is non-empty and the
/// blocks partition the input contiguously and in order.
///
/// Fragment ordering is a caller contract: offsets are expected to be
/// non-decreasing, and out-of-order input yields headers that are not
/// monotonically increasing.
pub fn plan_blocks(fragments: &[TimedFragment], config: FormatConfig) -> Vec<BlockBoundary> {
    let mut accumulator = BlockAccumulator::new();
    for (idx, fragment) in fragments.iter().enumerate() {
        accumulator.handle_fragment(idx, fragment, config);
    }
    accumulator.finish_block();
    accumulator.into_boundaries()
}
