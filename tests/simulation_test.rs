//! End-to-end simulation tests.
//!
//! The pinned scenario is the classic 13-reference string over 3 frames;
//! the expected traces and totals reproduce the reference program exactly,
//! including its first-slot tie-breaks for OPT and LRU.

use framesim::{simulate, simulate_all, PageId, Policy, Slot};

const TEXTBOOK_REFS: [u32; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];

fn pages(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId::new).collect()
}

fn occupied(ids: &[u32]) -> Vec<Slot> {
    ids.iter()
        .map(|&id| Slot::Occupied(PageId::new(id)))
        .collect()
}

fn faults(policy: Policy, frame_count: usize, ids: &[u32]) -> usize {
    simulate(policy, frame_count, &pages(ids))
        .unwrap()
        .fault_count
}

// ============================================================================
// The classic 13-reference scenario, 3 frames
// ============================================================================

#[test]
fn test_textbook_fault_totals() {
    let refs = pages(&TEXTBOOK_REFS);
    let results = simulate_all(3, &refs).unwrap();

    let by_policy: Vec<(Policy, usize)> =
        results.iter().map(|r| (r.policy, r.fault_count)).collect();

    assert_eq!(
        by_policy,
        vec![
            (Policy::Fifo, 10),
            (Policy::Opt, 7),
            (Policy::Lru, 9),
            (Policy::Clock, 9),
        ]
    );
}

#[test]
fn test_textbook_fifo_trace_snapshots() {
    let result = simulate(Policy::Fifo, 3, &pages(&TEXTBOOK_REFS)).unwrap();

    // Step 4 (ref 2) evicts 7, the oldest arrival, in slot 0.
    assert_eq!(result.trace[3].frames, occupied(&[2, 0, 1]));
    // Step 7 (ref 0) evicts 1 even though 0 was just referenced at step 5.
    assert_eq!(result.trace[6].frames, occupied(&[2, 3, 0]));
    // Final occupancy.
    assert_eq!(result.trace[12].frames, occupied(&[0, 2, 3]));
}

#[test]
fn test_textbook_lru_trace_snapshots() {
    let result = simulate(Policy::Lru, 3, &pages(&TEXTBOOK_REFS)).unwrap();

    // Step 6 (ref 3) evicts 1, least recently used of {2, 0, 1}.
    assert_eq!(result.trace[5].frames, occupied(&[2, 0, 3]));
    // Step 10 (ref 3) evicts 0.
    assert_eq!(result.trace[9].frames, occupied(&[4, 3, 2]));
    assert_eq!(result.trace[12].frames, occupied(&[0, 3, 2]));
}

#[test]
fn test_textbook_opt_trace_snapshots() {
    let result = simulate(Policy::Opt, 3, &pages(&TEXTBOOK_REFS)).unwrap();

    // Step 4 (ref 2): 7 never recurs and is evicted on sight.
    assert_eq!(result.trace[3].frames, occupied(&[2, 0, 1]));
    // Step 8 (ref 4): 0's next use is farthest, so slot 1 turns over.
    assert_eq!(result.trace[7].frames, occupied(&[2, 4, 3]));
    assert_eq!(result.trace[12].frames, occupied(&[2, 0, 3]));
}

#[test]
fn test_textbook_clock_trace_snapshots() {
    let result = simulate(Policy::Clock, 3, &pages(&TEXTBOOK_REFS)).unwrap();

    // Step 4 (ref 2): all use-bits set, full sweep lap, slot 0 claimed.
    assert_eq!(result.trace[3].frames, occupied(&[2, 0, 1]));
    // Step 9 (ref 2): slot 1's bit is clear, immediate claim.
    assert_eq!(result.trace[8].frames, occupied(&[4, 2, 3]));
    assert_eq!(result.trace[12].frames, occupied(&[3, 2, 0]));
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn test_empty_sequence_all_policies() {
    for result in simulate_all(3, &[]).unwrap() {
        assert_eq!(result.fault_count, 0);
        assert!(result.trace.is_empty());
    }
}

#[test]
fn test_single_frame_alternation_always_faults() {
    let ids = [1, 2, 1, 2, 1, 2];
    for policy in Policy::ALL {
        assert_eq!(faults(policy, 1, &ids), ids.len(), "policy {}", policy);
    }
}

#[test]
fn test_single_frame_repeats_hit() {
    for policy in Policy::ALL {
        assert_eq!(faults(policy, 1, &[5, 5, 5, 5]), 1, "policy {}", policy);
    }
}

// ============================================================================
// Policy-comparison properties
// ============================================================================

#[test]
fn test_belady_anomaly_on_fifo() {
    // The classic anomaly string: FIFO gets worse with more frames.
    let ids = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    let three = faults(Policy::Fifo, 3, &ids);
    let four = faults(Policy::Fifo, 4, &ids);
    assert_eq!(three, 9);
    assert_eq!(four, 10);
    assert!(four > three);

    // OPT is immune: non-increasing in the frame count.
    let mut previous = usize::MAX;
    for frame_count in 1..=6 {
        let current = faults(Policy::Opt, frame_count, &ids);
        assert!(
            current <= previous,
            "OPT rose from {} to {} at {} frames",
            previous,
            current,
            frame_count
        );
        previous = current;
    }
}

#[test]
fn test_opt_is_a_lower_bound_on_textbook_input() {
    let results = simulate_all(3, &pages(&TEXTBOOK_REFS)).unwrap();
    let opt = results
        .iter()
        .find(|r| r.policy == Policy::Opt)
        .unwrap()
        .fault_count;
    for result in &results {
        assert!(opt <= result.fault_count, "OPT beaten by {}", result.policy);
    }
}

#[test]
fn test_hits_never_change_occupancy() {
    let refs = pages(&TEXTBOOK_REFS);
    for result in simulate_all(3, &refs).unwrap() {
        for (i, record) in result.trace.iter().enumerate() {
            if !record.outcome.is_fault() {
                assert!(i > 0, "first reference cannot hit an empty table");
                assert_eq!(
                    record.frames,
                    result.trace[i - 1].frames,
                    "{} hit at step {} moved pages",
                    result.policy,
                    record.step
                );
            }
        }
    }
}
