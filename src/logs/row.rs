use serde::Serialize;

/// One timed benchmark run extracted from a log line.
///
/// `nodes` and `procs` are only present when the log line carries the
/// annotated format emitted by the benchmark wrapper scripts; the bare
/// format printed by the benchmark binaries leaves them unset. Plotters
/// validate these fields before use instead of assuming them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Which benchmark variant produced the timing (e.g. "serial", "mpi").
    pub implementation: String,
    /// Elapsed seconds.
    pub time: f64,
    /// Problem size (vertex count of the input graph), if annotated.
    pub nodes: Option<u64>,
    /// Process count of the run, if annotated.
    pub procs: Option<u32>,
}

/// Aggregated results across all log files, in file-enumeration order
/// then line order. No consumer depends on row order.
pub type ResultTable = Vec<Measurement>;
