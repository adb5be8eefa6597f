//! Search driver: the decide / propagate / analyze / backtrack loop.

use kestrel_base::{Error, Lit, Model, Result};

use crate::clause_db::ClauseDb;
use crate::conflict::Analyzer;
use crate::decision::pick_branch_lit;
use crate::propagate::{propagate, Propagation};
use crate::trail::Trail;

/// The result of a SAT solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatResult {
    /// Satisfiable, with an assignment witness.
    Sat(Model),
    /// Unsatisfiable.
    Unsat,
}

impl SatResult {
    #[must_use]
    pub fn is_sat(&self) -> bool {
        matches!(self, Self::Sat(_))
    }

    /// The witness, if satisfiable.
    #[must_use]
    pub fn model(&self) -> Option<&Model> {
        match self {
            Self::Sat(model) => Some(model),
            Self::Unsat => None,
        }
    }
}

/// Counters maintained by the search loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverStats {
    /// Number of decisions made.
    pub decisions: u64,
    /// Number of conflicts encountered.
    pub conflicts: u64,
    /// Number of literals assigned by unit propagation.
    pub propagations: u64,
    /// Number of learned clauses.
    pub learned_clauses: u64,
}

/// A CDCL solver instance over variables `1..=num_vars`.
///
/// All mutable state is exclusively owned; solving runs to completion on
/// the calling thread.
#[derive(Debug)]
pub struct Solver {
    num_vars: u32,
    db: ClauseDb,
    trail: Trail,
    analyzer: Analyzer,
    stats: SolverStats,
    /// Set when an empty input clause was added.
    trivially_unsat: bool,
}

impl Solver {
    /// Creates a solver for a formula over `num_vars` variables.
    #[must_use]
    pub fn new(num_vars: u32) -> Self {
        Self {
            num_vars,
            db: ClauseDb::new(),
            trail: Trail::new(num_vars),
            analyzer: Analyzer::new(num_vars),
            stats: SolverStats::default(),
            trivially_unsat: false,
        }
    }

    /// Adds an original clause from integer-encoded literals.
    ///
    /// Rejects literal 0 and variables above `num_vars`. An empty clause is
    /// accepted and makes the formula trivially unsatisfiable; it is not
    /// stored. Duplicate and tautological clauses are stored as given.
    pub fn add_clause<I>(&mut self, lits: I) -> Result<()>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut clause = Vec::new();
        for code in lits {
            let lit = Lit::try_from(code)?;
            if lit.var() > self.num_vars {
                return Err(Error::VariableOutOfRange {
                    var: lit.var(),
                    num_vars: self.num_vars,
                });
            }
            clause.push(lit);
        }

        if clause.is_empty() {
            self.trivially_unsat = true;
        } else {
            self.db.add_original(clause);
        }
        Ok(())
    }

    /// Decides satisfiability of the added clauses.
    pub fn solve(&mut self) -> SatResult {
        if self.trivially_unsat {
            return SatResult::Unsat;
        }

        loop {
            let assigned_before = self.trail.len();
            let outcome = propagate(&self.db, &mut self.trail);
            self.stats.propagations += (self.trail.len() - assigned_before) as u64;

            match outcome {
                Propagation::Conflict(conflict) => {
                    self.stats.conflicts += 1;
                    if self.trail.decision_level() == 0 {
                        return SatResult::Unsat;
                    }

                    let (learned, backtrack_level) =
                        self.analyzer.analyze(&self.db, &self.trail, conflict);
                    self.db.add_learned(learned);
                    // The learned clause is unit after rewinding and is
                    // re-propagated on the next iteration.
                    self.trail.unassign_above(backtrack_level);
                }
                Propagation::Fixpoint => match pick_branch_lit(&self.trail) {
                    Some(lit) => {
                        self.stats.decisions += 1;
                        let level = self.trail.new_decision_level();
                        self.trail.assign(lit, level, None);
                    }
                    None => return SatResult::Sat(self.trail.to_model()),
                },
            }
        }
    }

    #[must_use]
    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    /// Total clauses held, original plus learned.
    #[must_use]
    pub fn num_clauses(&self) -> usize {
        self.db.len()
    }

    /// Number of original clauses stored.
    #[must_use]
    pub fn num_original_clauses(&self) -> usize {
        self.db.num_original()
    }

    /// Solver statistics. The learned-clause count comes from the clause
    /// store's original/learned split.
    #[must_use]
    pub fn stats(&self) -> SolverStats {
        SolverStats {
            learned_clauses: self.db.num_learned() as u64,
            ..self.stats
        }
    }
}
