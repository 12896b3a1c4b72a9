//! The simulation driver and its result types.
//!
//! One call to [`simulate`] runs one policy over one reference sequence with
//! a freshly allocated [`FrameTable`] and engine, so every run is
//! independent and deterministic: identical inputs always produce identical
//! traces and fault counts.

use crate::common::{Error, PageId, Result};
use crate::frame_table::{FrameTable, Slot};
use crate::policy::Policy;

/// Whether a reference found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    Hit,
    Fault,
}

impl AccessOutcome {
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessOutcome::Fault)
    }
}

/// What happened at one step of a simulation.
///
/// Records are produced once per reference, in sequence order, and are
/// immutable once produced. The `frames` field is the table contents *after*
/// the reference was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// 1-based position in the reference sequence.
    pub step: usize,

    /// The page that was referenced.
    pub page: PageId,

    /// Slot contents after this reference was resolved.
    pub frames: Vec<Slot>,

    /// Hit or fault.
    pub outcome: AccessOutcome,
}

/// The full outcome of running one policy over one reference sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// The policy that produced this result.
    pub policy: Policy,

    /// One record per reference, in order.
    pub trace: Vec<StepRecord>,

    /// Number of trace entries with a fault outcome.
    pub fault_count: usize,
}

/// Run `policy` over `refs` with `frame_count` physical frames.
///
/// An empty sequence yields an empty trace and zero faults. The only
/// rejected configuration is `frame_count == 0`, refused before any step
/// runs.
///
/// # Example
/// ```
/// use framesim::{simulate, PageId, Policy};
///
/// let refs = [PageId::new(1), PageId::new(2), PageId::new(1)];
/// let result = simulate(Policy::Fifo, 2, &refs).unwrap();
/// assert_eq!(result.fault_count, 2); // third reference hits
/// ```
///
/// # Errors
/// - [`Error::InvalidFrameCount`] if `frame_count < 1`
pub fn simulate(policy: Policy, frame_count: usize, refs: &[PageId]) -> Result<SimulationResult> {
    if frame_count < crate::common::config::MIN_FRAMES {
        return Err(Error::InvalidFrameCount(frame_count));
    }

    // Fresh state per run: nothing carries over between invocations.
    let mut table = FrameTable::new(frame_count);
    let mut engine = policy.engine(frame_count);

    let mut trace = Vec::with_capacity(refs.len());
    let mut fault_count = 0;

    for (i, &page) in refs.iter().enumerate() {
        let outcome = engine.reference(&mut table, page, &refs[i + 1..]);
        if outcome.is_fault() {
            fault_count += 1;
        }
        trace.push(StepRecord {
            step: i + 1,
            page,
            frames: table.snapshot(),
            outcome,
        });
    }

    Ok(SimulationResult {
        policy,
        trace,
        fault_count,
    })
}

/// Run every policy in [`Policy::ALL`] over the same input.
///
/// All four policies are always evaluated; there is no early abort even for
/// inputs where a policy cannot avoid faulting on every reference.
///
/// # Errors
/// - [`Error::InvalidFrameCount`] if `frame_count < 1`
pub fn simulate_all(frame_count: usize, refs: &[PageId]) -> Result<Vec<SimulationResult>> {
    Policy::ALL
        .iter()
        .map(|&policy| simulate(policy, frame_count, refs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_zero_frames_is_a_configuration_error() {
        for policy in Policy::ALL {
            let err = simulate(policy, 0, &pages(&[1, 2, 3])).unwrap_err();
            assert!(matches!(err, Error::InvalidFrameCount(0)));
        }
    }

    #[test]
    fn test_empty_sequence_yields_empty_trace() {
        for policy in Policy::ALL {
            let result = simulate(policy, 3, &[]).unwrap();
            assert_eq!(result.fault_count, 0);
            assert!(result.trace.is_empty());
        }
    }

    #[test]
    fn test_fault_count_matches_trace() {
        let refs = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
        for result in simulate_all(3, &refs).unwrap() {
            let counted = result.trace.iter().filter(|r| r.outcome.is_fault()).count();
            assert_eq!(result.fault_count, counted, "policy {}", result.policy);
        }
    }

    #[test]
    fn test_steps_are_one_based_and_in_order() {
        let refs = pages(&[5, 6, 5]);
        let result = simulate(Policy::Lru, 2, &refs).unwrap();
        let steps: Vec<usize> = result.trace.iter().map(|r| r.step).collect();
        assert_eq!(steps, vec![1, 2, 3]);
        assert_eq!(result.trace[2].page, PageId::new(5));
    }

    #[test]
    fn test_cold_start_faults_until_table_is_full() {
        // Distinct pages into an empty table fault and fill slots in order.
        let refs = pages(&[10, 20, 30]);
        for policy in Policy::ALL {
            let result = simulate(policy, 3, &refs).unwrap();
            assert_eq!(result.fault_count, 3, "policy {}", policy);
            assert_eq!(
                result.trace[2].frames,
                vec![
                    Slot::Occupied(PageId::new(10)),
                    Slot::Occupied(PageId::new(20)),
                    Slot::Occupied(PageId::new(30)),
                ],
                "policy {}",
                policy
            );
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let refs = pages(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
        for policy in Policy::ALL {
            let a = simulate(policy, 4, &refs).unwrap();
            let b = simulate(policy, 4, &refs).unwrap();
            assert_eq!(a, b);
        }
    }
}
