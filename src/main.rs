//! framesim binary: read a workload, replay it under all four policies,
//! print the traces, and persist the fault summary.

use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use framesim::common::config::{DEFAULT_INPUT_FILE, RESULTS_FILE};
use framesim::report::{write_summary, write_trace};
use framesim::{simulate_all, Result, Workload};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("framesim: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT_FILE.to_string());
    let workload = Workload::from_file(&path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "=== Workload ===")?;
    writeln!(out, "{:<20}: {}", "Frames", workload.frame_count)?;
    writeln!(out, "{:<20}: {}", "References", workload.refs.len())?;
    write!(out, "{:<20}:", "Reference sequence")?;
    for page in &workload.refs {
        write!(out, " {}", page)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;

    let results = simulate_all(workload.frame_count, &workload.refs)?;
    for result in &results {
        write_trace(&mut out, result)?;
        writeln!(out)?;
    }

    let mut summary = File::create(RESULTS_FILE)?;
    write_summary(&mut summary, &workload, &results)?;
    writeln!(out, "Results written to {}", RESULTS_FILE)?;

    Ok(())
}
