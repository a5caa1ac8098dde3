use crate::types::{BlockBoundary, FormatConfig, TimedFragment};

pub(super) struct BlockAccumulator {
    boundaries: Vec<BlockBoundary>,
    block_duration_ms: u64,
    current_start_ms: u64,
    current_fragments: Vec<usize>,
}

impl BlockAccumulator {
    pub(super) fn new() -> Self {
        Self {
            boundaries: Vec::new(),
            block_duration_ms: 0,
            current_start_ms: 0,
            current_fragments: Vec::new(),
        }
    }

    pub(super) fn handle_fragment(
        &mut self,
        idx: usize,
        fragment: &TimedFragment,
        config: FormatConfig,
    ) {
        // The duration check happens before the fragment is attached, so
        // a block that reached the interval at fragment i hands fragment
        // i+1 to the next block. With a non-positive interval the check
        // passes immediately and every fragment opens its own block.
        if self.current_fragments.is_empty() || self.duration_seconds() >= config.interval_seconds {
            self.finish_block();
            self.current_start_ms = fragment.offset_ms;
        }
        self.block_duration_ms += fragment.duration_ms;
        self.current_fragments.push(idx);
    }

    pub(super) fn finish_block(&mut self) {
        if self.current_fragments.is_empty() {
            return;
        }
        self.boundaries.push(BlockBoundary {
            start_offset_ms: self.current_start_ms,
            fragment_ids: std::mem::take(&mut self.current_fragments),
        });
        self.block_duration_ms = 0;
    }

    pub(super) fn into_boundaries(self) -> Vec<BlockBoundary> {
        self.boundaries
    }

    fn duration_seconds(&self) -> f64 {
        self.block_duration_ms as f64 / 1000.0
    }
}
