//! Configuration constants for the framesim binary.

/// Default workload file read by the binary when no path is given.
///
/// The expected format is whitespace-separated integers: the frame count,
/// the number of references `n`, then `n` page identifiers. For example:
///
/// ```text
/// 3
/// 13
/// 7 0 1 2 0 3 0 4 2 3 0 3 2
/// ```
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// File the binary writes the per-policy fault summary to.
pub const RESULTS_FILE: &str = "results.txt";

/// Minimum legal frame count. Anything below this is a configuration error.
pub const MIN_FRAMES: usize = 1;
