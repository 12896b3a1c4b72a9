//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts the page that has been resident longest. Hits never reorder the
//! queue: arrival time is the only thing FIFO looks at, which is exactly why
//! it is exposed to Belady's anomaly.

use std::collections::VecDeque;

use crate::common::PageId;
use crate::frame_table::FrameTable;
use crate::policy::Engine;
use crate::sim::AccessOutcome;

/// Arrival-order eviction.
pub struct FifoEngine {
    /// Resident pages in arrival order (front = oldest).
    ///
    /// Invariant: contents equal the set of occupied slots, same count.
    queue: VecDeque<PageId>,
}

impl FifoEngine {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl Default for FifoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for FifoEngine {
    fn reference(
        &mut self,
        table: &mut FrameTable,
        page: PageId,
        _future: &[PageId],
    ) -> AccessOutcome {
        if table.contains(page) {
            return AccessOutcome::Hit;
        }

        // Free capacity always takes precedence over eviction.
        if let Some(slot) = table.first_empty() {
            table.replace(slot, page);
        } else {
            let victim = self
                .queue
                .pop_front()
                .expect("arrival queue is non-empty when the table is full");
            let slot = table
                .position_of(victim)
                .expect("arrival queue only holds resident pages");
            table.replace(slot, page);
        }
        self.queue.push_back(page);

        AccessOutcome::Fault
    }
}
