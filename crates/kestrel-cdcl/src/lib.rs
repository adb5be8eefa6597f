//! # kestrel-cdcl
//!
//! Conflict-Driven Clause Learning (CDCL) core algorithm.
//!
//! Implements:
//! - Unit propagation by linear scan to a fixed point
//! - First-UIP conflict analysis with clause learning
//! - Non-chronological backtracking over an assignment trail
//! - Deterministic first-unassigned decision policy
//!
//! The core is single-threaded and performs no I/O; parsing and
//! presentation live in `kestrel-format` and the CLI.

pub mod clause_db;
pub mod conflict;
pub mod decision;
pub mod propagate;
pub mod solver;
pub mod trail;

pub use clause_db::{Clause, ClauseDb, ClauseId};
pub use solver::{SatResult, Solver, SolverStats};
pub use trail::Trail;
