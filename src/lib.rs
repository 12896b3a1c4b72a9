//! framesim - A page-replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           framesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Collaborators (workload / report)               │   │
//! │  │   Workload parser → simulate() → trace + summary writer  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Simulation driver (sim)                   │   │
//! │  │     one pass over the reference sequence per policy,     │   │
//! │  │     producing StepRecords and a SimulationResult         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Eviction Policies (policy/)  [Swappable]           │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │         FIFO  |  OPT  |  LRU  |  CLOCK          │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Occupancy model (frame_table)                  │   │
//! │  │        FrameTable: fixed slots, Empty | Occupied         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The simulator replays a reference sequence of page identifiers against a
//! fixed number of physical frames and reports, per policy, which references
//! hit and which fault, along with the total fault count. There is no real
//! address space and no page data: pages are symbolic identifiers and the
//! only state is slot occupancy plus each policy's bookkeeping.
//!
//! The four engines are independent. Each run owns its own
//! [`FrameTable`] and policy state, so runs can be replayed or executed side
//! by side without any coordination.
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`frame_table`] - The fixed-capacity slot table all policies mutate
//! - [`policy`] - The four eviction policies
//! - [`sim`] - The per-step driver and result types
//! - [`workload`] - Input parsing (`frames n p1..pn`)
//! - [`report`] - Trace rendering and summary persistence
//!
//! # Quick Start
//! ```
//! use framesim::{simulate, PageId, Policy};
//!
//! let refs: Vec<PageId> = [7, 0, 1, 2, 0, 3, 0]
//!     .into_iter()
//!     .map(PageId::new)
//!     .collect();
//!
//! let result = simulate(Policy::Lru, 3, &refs).unwrap();
//! assert_eq!(result.trace.len(), refs.len());
//! println!("LRU faults: {}", result.fault_count);
//! ```

pub mod common;
pub mod frame_table;
pub mod policy;
pub mod report;
pub mod sim;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result};
pub use frame_table::{FrameTable, Slot};
pub use policy::Policy;
pub use sim::{simulate, simulate_all, AccessOutcome, SimulationResult, StepRecord};
pub use workload::Workload;
