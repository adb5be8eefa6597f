//! Machine-readable solve reports.

use std::path::Path;
use std::time::Duration;

use kestrel_cdcl::{SatResult, Solver};
use serde::Serialize;

/// JSON document describing one solve run, for benchmarking pipelines.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub instance: String,
    pub num_vars: u32,
    pub num_original_clauses: usize,
    pub sudoku_size: Option<usize>,
    pub result: &'static str,
    pub solve_time_sec: f64,
    pub decisions: u64,
    pub conflicts: u64,
    pub propagations: u64,
    pub learned_clauses: u64,
}

impl SolveReport {
    pub fn new(
        instance: &Path,
        sudoku_size: Option<usize>,
        solver: &Solver,
        result: &SatResult,
        elapsed: Duration,
    ) -> Self {
        let stats = solver.stats();
        Self {
            instance: instance.display().to_string(),
            num_vars: solver.num_vars(),
            num_original_clauses: solver.num_original_clauses(),
            sudoku_size,
            result: if result.is_sat() { "SAT" } else { "UNSAT" },
            solve_time_sec: elapsed.as_secs_f64(),
            decisions: stats.decisions,
            conflicts: stats.conflicts,
            propagations: stats.propagations,
            learned_clauses: stats.learned_clauses,
        }
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
