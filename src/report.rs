//! The reporting collaborators: per-step trace rendering and the durable
//! fault summary.
//!
//! The trace format follows the original console layout with empty slots
//! drawn as `.`:
//!
//! ```text
//! Step  1: ref= 7 |  7  .  .   (FAULT)
//! Step  5: ref= 0 |  2  0  1   (HIT)
//! ```

use std::io::Write;

use crate::common::Result;
use crate::sim::{SimulationResult, StepRecord};
use crate::workload::Workload;

/// Render one step record as a single trace line (no trailing newline).
pub fn format_step(record: &StepRecord) -> String {
    use std::fmt::Write;

    let mut line = format!("Step {:2}: ref={:2} | ", record.step, record.page);
    for slot in &record.frames {
        // Writing into a String cannot fail.
        let _ = write!(line, "{:>2} ", slot);
    }
    line.push_str(if record.outcome.is_fault() {
        "  (FAULT)"
    } else {
        "  (HIT)"
    });
    line
}

/// Write the full per-step trace of one policy run.
pub fn write_trace<W: Write>(w: &mut W, result: &SimulationResult) -> Result<()> {
    writeln!(w, "--- {} Simulation ---", result.policy)?;
    for record in &result.trace {
        writeln!(w, "{}", format_step(record))?;
    }
    writeln!(w, "Total page faults ({}): {}", result.policy, result.fault_count)?;
    Ok(())
}

/// Persist the workload and per-policy fault counts as plain text.
pub fn write_summary<W: Write>(
    w: &mut W,
    workload: &Workload,
    results: &[SimulationResult],
) -> Result<()> {
    writeln!(w, "Frames: {}", workload.frame_count)?;
    write!(w, "References:")?;
    for page in &workload.refs {
        write!(w, " {}", page)?;
    }
    writeln!(w)?;
    for result in results {
        writeln!(w, "{} faults: {}", result.policy, result.fault_count)?;
    }
    Ok(())
}
