//! The shared frame-occupancy model.
//!
//! Every policy engine mutates the same kind of state: a fixed row of frame
//! slots, each either empty or holding one resident page. The near-identical
//! scanning loops the engines need (hit test, first-empty fill, victim
//! lookup) live here once, so each policy file contains only its eviction
//! rule.
//!
//! All scans are plain linear walks in slot order. Frame counts are small in
//! practice, and the slot order is load-bearing: OPT and LRU break victim
//! ties by first slot index, so an index structure would change observable
//! behavior, not just speed.

use std::fmt;

use crate::common::{FrameId, PageId};

/// One frame slot: empty, or holding a resident page.
///
/// Emptiness is a tagged state rather than a sentinel page identifier, so
/// every possible `PageId` value remains a legal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Empty,
    Occupied(PageId),
}

impl Slot {
    /// The resident page, if any.
    #[inline]
    pub fn page(&self) -> Option<PageId> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(page) => Some(*page),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Both arms honor the caller's width flags so trace columns line up.
        match self {
            Slot::Empty => f.pad("."),
            Slot::Occupied(page) => fmt::Display::fmt(page, f),
        }
    }
}

/// A fixed-capacity ordered collection of frame slots.
///
/// Invariants:
/// - capacity is fixed at construction and is at least 1
/// - at most one slot holds any given page
/// - slots fill in slot order before any eviction happens (each engine
///   checks [`FrameTable::first_empty`] before selecting a victim)
///
/// Each simulation run owns exactly one `FrameTable`; tables are never
/// shared across policies or reused across runs.
#[derive(Debug, Clone)]
pub struct FrameTable {
    slots: Vec<Slot>,
}

impl FrameTable {
    /// Create a table of `capacity` empty slots.
    ///
    /// # Panics
    /// Panics if `capacity` is 0. The public [`crate::simulate`] entry point
    /// rejects that configuration with an error before constructing a table.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "frame table capacity must be > 0");
        Self {
            slots: vec![Slot::Empty; capacity],
        }
    }

    /// Number of slots (the `F` of the simulation).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The slot at `frame_id`.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Slot {
        self.slots[frame_id.0]
    }

    /// Residency (hit) test: is `page` in some slot?
    ///
    /// Never mutates occupancy. Policies that track auxiliary metadata on
    /// hits (LRU recency, Clock use-bits) do so in their own state.
    pub fn contains(&self, page: PageId) -> bool {
        self.position_of(page).is_some()
    }

    /// The slot holding `page`, scanning in slot order.
    pub fn position_of(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Slot::Occupied(page))
            .map(FrameId::new)
    }

    /// The first empty slot in slot order, if any.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Slot::Empty)
            .map(FrameId::new)
    }

    /// Place `page` into `frame_id`, returning what the slot held before.
    pub fn replace(&mut self, frame_id: FrameId, page: PageId) -> Slot {
        std::mem::replace(&mut self.slots[frame_id.0], Slot::Occupied(page))
    }

    /// Iterate over `(FrameId, Slot)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, Slot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (FrameId::new(i), *slot))
    }

    /// A point-in-time copy of the slot contents, for step records.
    pub fn snapshot(&self) -> Vec<Slot> {
        self.slots.clone()
    }
}
