//! Clock (second-chance) replacement policy.
//!
//! Approximates LRU with one bit per slot. A hit sets the slot's use-bit; a
//! fault sweeps a circular pointer over the slots, giving each set bit one
//! second chance (clearing it) before the slot can be claimed.

use crate::common::{FrameId, PageId};
use crate::frame_table::{FrameTable, Slot};
use crate::policy::Engine;
use crate::sim::AccessOutcome;

/// Second-chance sweep eviction.
pub struct ClockEngine {
    /// Use-bit per slot, aligned with the frame table.
    use_bits: Vec<bool>,

    /// Circular sweep pointer. Invariant: `pointer < use_bits.len()`.
    pointer: usize,
}

impl ClockEngine {
    pub fn new(frame_count: usize) -> Self {
        Self {
            use_bits: vec![false; frame_count],
            pointer: 0,
        }
    }

    /// Sweep from the pointer until a claimable slot is found, and claim it
    /// for `page`. Returns the number of slots visited.
    ///
    /// Terminates within `2F` visits: every occupied slot with a set
    /// use-bit is cleared exactly once before the pointer can come back to
    /// find it clear (or empty).
    fn sweep(&mut self, table: &mut FrameTable, page: PageId) -> usize {
        let capacity = table.capacity();
        let mut visits = 0;

        loop {
            visits += 1;
            let slot = FrameId::new(self.pointer);

            let claimable = match table.get(slot) {
                Slot::Empty => true,
                Slot::Occupied(_) => !self.use_bits[self.pointer],
            };

            if claimable {
                table.replace(slot, page);
                self.use_bits[self.pointer] = true;
                self.pointer = (self.pointer + 1) % capacity;
                return visits;
            }

            // Second chance: clear the bit and keep sweeping.
            self.use_bits[self.pointer] = false;
            self.pointer = (self.pointer + 1) % capacity;
        }
    }
}

impl Engine for ClockEngine {
    fn reference(
        &mut self,
        table: &mut FrameTable,
        page: PageId,
        _future: &[PageId],
    ) -> AccessOutcome {
        if let Some(slot) = table.position_of(page) {
            self.use_bits[slot.0] = true;
            return AccessOutcome::Hit;
        }

        let visits = self.sweep(table, page);
        debug_assert!(visits <= 2 * table.capacity());

        AccessOutcome::Fault
    }
}
