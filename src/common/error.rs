//! Error types for framesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in framesim.
///
/// The simulation core itself can only fail one way: a frame count below 1.
/// Every page identifier is treated as a valid opaque value, and once inputs
/// are validated the engines never fail mid-run. The remaining variants
/// belong to the I/O collaborators (workload parsing, summary writing) and
/// are raised before or after a simulation, never inside one.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from reading a workload file or writing a summary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured frame count is below the minimum of 1.
    ///
    /// Rejected before any simulation step runs; no partial trace is
    /// produced.
    #[error("frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),

    /// The workload input could not be parsed.
    #[error("malformed workload: {0}")]
    MalformedWorkload(String),
}
