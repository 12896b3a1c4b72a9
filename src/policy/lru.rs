//! LRU (Least-Recently-Used) replacement policy.
//!
//! Stamps every reference, hit or fault, with a logical time and evicts the
//! resident page with the oldest stamp.

use std::collections::HashMap;

use crate::common::{FrameId, PageId};
use crate::frame_table::{FrameTable, Slot};
use crate::policy::Engine;
use crate::sim::AccessOutcome;

/// Oldest-stamp eviction.
pub struct LruEngine {
    /// Logical clock, incremented once per reference including hits.
    time: u64,

    /// Last-referenced time per resident page.
    ///
    /// Invariant: every occupied page has an entry; entries are removed on
    /// eviction. A page somehow missing a stamp reads as time 0, which makes
    /// it the preferred victim.
    last_used: HashMap<PageId, u64>,
}

impl LruEngine {
    pub fn new() -> Self {
        Self {
            time: 0,
            last_used: HashMap::new(),
        }
    }

    /// Occupied slot with the smallest stamp, ties to the first slot.
    fn victim(&self, table: &FrameTable) -> FrameId {
        let mut victim = FrameId::new(0);
        let mut oldest = u64::MAX;

        for (frame_id, slot) in table.iter() {
            let Slot::Occupied(resident) = slot else {
                continue;
            };
            let stamp = self.last_used.get(&resident).copied().unwrap_or(0);
            if stamp < oldest {
                oldest = stamp;
                victim = frame_id;
            }
        }
        victim
    }
}

impl Default for LruEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for LruEngine {
    fn reference(
        &mut self,
        table: &mut FrameTable,
        page: PageId,
        _future: &[PageId],
    ) -> AccessOutcome {
        self.time += 1;

        if table.contains(page) {
            self.last_used.insert(page, self.time);
            return AccessOutcome::Hit;
        }

        let slot = match table.first_empty() {
            Some(slot) => slot,
            None => {
                let slot = self.victim(table);
                if let Slot::Occupied(evicted) = table.get(slot) {
                    self.last_used.remove(&evicted);
                }
                slot
            }
        };
        table.replace(slot, page);
        self.last_used.insert(page, self.time);

        AccessOutcome::Fault
    }
}
