//! OPT (Belady's optimal) replacement policy.
//!
//! Evicts the resident page whose next use lies farthest in the future, or
//! one that is never used again. This needs the remaining reference
//! sequence, a capability no online policy has, so OPT exists purely as the
//! fault-count lower bound the other policies are measured against.

use crate::common::{FrameId, PageId};
use crate::frame_table::{FrameTable, Slot};
use crate::policy::Engine;
use crate::sim::AccessOutcome;

/// Farthest-next-use eviction.
///
/// Keeps no state between references: the victim is recomputed per fault by
/// scanning the future subsequence once per occupied slot.
pub struct OptEngine;

impl OptEngine {
    pub fn new() -> Self {
        Self
    }

    /// Pick the victim slot for a full table.
    ///
    /// A resident page with no future occurrence wins immediately, first
    /// slot in scan order. Otherwise the maximum next-occurrence distance
    /// wins, ties broken by the first slot that reached the maximum.
    fn victim(table: &FrameTable, future: &[PageId]) -> FrameId {
        let mut victim = FrameId::new(0);
        let mut farthest = None;

        for (frame_id, slot) in table.iter() {
            let Slot::Occupied(resident) = slot else {
                continue;
            };
            match future.iter().position(|&p| p == resident) {
                None => return frame_id,
                Some(next) => {
                    if farthest.map_or(true, |f| next > f) {
                        farthest = Some(next);
                        victim = frame_id;
                    }
                }
            }
        }
        victim
    }
}

impl Default for OptEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for OptEngine {
    fn reference(
        &mut self,
        table: &mut FrameTable,
        page: PageId,
        future: &[PageId],
    ) -> AccessOutcome {
        if table.contains(page) {
            return AccessOutcome::Hit;
        }

        // No lookahead needed while free capacity exists.
        let slot = table
            .first_empty()
            .unwrap_or_else(|| Self::victim(table, future));
        table.replace(slot, page);

        AccessOutcome::Fault
    }
}
