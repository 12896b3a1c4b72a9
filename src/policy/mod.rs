//! Eviction policy implementations.
//!
//! Implements the four classic replacement policies:
//! - [`FifoEngine`] - evict in arrival order
//! - [`OptEngine`] - Belady's optimal, needs the future reference sequence
//! - [`LruEngine`] - evict the least recently used resident page
//! - [`ClockEngine`] - second-chance sweep with per-slot use-bits
//!
//! Each engine owns only its auxiliary bookkeeping (queue, recency map,
//! use-bits); the occupancy state lives in the [`FrameTable`] passed into
//! every call. One engine instance serves exactly one simulation run.

mod clock;
mod fifo;
mod lru;
mod opt;

use std::fmt;

pub use clock::ClockEngine;
pub use fifo::FifoEngine;
pub use lru::LruEngine;
pub use opt::OptEngine;

use crate::common::PageId;
use crate::frame_table::FrameTable;
use crate::sim::AccessOutcome;

/// The replacement policy to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Opt,
    Lru,
    Clock,
}

impl Policy {
    /// All policies, in the order the reporting tools present them.
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Opt, Policy::Lru, Policy::Clock];

    /// Conventional short name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Opt => "OPT",
            Policy::Lru => "LRU",
            Policy::Clock => "CLOCK",
        }
    }

    /// Build a fresh engine for one simulation run over `frame_count` frames.
    pub(crate) fn engine(&self, frame_count: usize) -> Box<dyn Engine> {
        match self {
            Policy::Fifo => Box::new(FifoEngine::new()),
            Policy::Opt => Box::new(OptEngine::new()),
            Policy::Lru => Box::new(LruEngine::new()),
            Policy::Clock => Box::new(ClockEngine::new(frame_count)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One replacement policy driving one simulation run.
///
/// The driver calls [`Engine::reference`] once per entry of the reference
/// sequence, in order. The engine resolves the hit test, mutates the table
/// on a fault (fill or evict), updates its own metadata, and reports the
/// outcome.
///
/// `future` is the subsequence strictly after the current reference. Only
/// OPT reads it; the online policies ignore it.
pub trait Engine {
    fn reference(
        &mut self,
        table: &mut FrameTable,
        page: PageId,
        future: &[PageId],
    ) -> AccessOutcome;
}
