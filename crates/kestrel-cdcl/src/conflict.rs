//! First-UIP conflict analysis.
//!
//! Starting from a falsified clause, resolution walks the trail from the
//! top downward through reason clauses until exactly one marked variable at
//! the current decision level remains: the First-UIP. The learned clause is
//! the negation of the UIP's assignment plus the negations of every marked
//! variable below the current level, which makes it falsified now and unit
//! after backtracking.
//!
//! The `seen` marker is a per-variable generation stamp, so no per-call
//! clearing of the marker array is needed.

use kestrel_base::{Lit, Var};

use crate::clause_db::{ClauseDb, ClauseId};
use crate::trail::Trail;

/// Reusable conflict-analysis state, owned by the solver.
#[derive(Debug)]
pub struct Analyzer {
    /// Generation stamp per variable; a variable is marked iff its stamp
    /// equals the current generation.
    stamp: Vec<u64>,
    generation: u64,
    /// Accumulates the learned-clause literals below the current level.
    learned: Vec<Lit>,
}

impl Analyzer {
    /// Creates an analyzer for variables `1..=num_vars`.
    #[must_use]
    pub fn new(num_vars: u32) -> Self {
        Self {
            stamp: vec![0; num_vars as usize + 1],
            generation: 0,
            learned: Vec::new(),
        }
    }

    /// Resolves the falsified clause `conflict` back to the First-UIP.
    ///
    /// Returns the learned clause, with the asserting literal first, and
    /// the backtrack level: the highest level among the remaining literals,
    /// or 0 when the clause is unit.
    ///
    /// Must only be called at decision level > 0.
    pub fn analyze(&mut self, db: &ClauseDb, trail: &Trail, conflict: ClauseId) -> (Vec<Lit>, u32) {
        debug_assert!(trail.decision_level() > 0);
        self.generation += 1;
        self.learned.clear();

        let current = trail.decision_level();
        let mut counter = 0usize;

        for &lit in db.get(conflict).lits() {
            self.mark(trail, lit.var(), current, &mut counter);
        }

        // Resolve marked current-level variables, newest first, until only
        // the First-UIP remains.
        let lits = trail.lits();
        let mut idx = lits.len();
        while counter > 1 {
            idx -= 1;
            let var = lits[idx].var();
            if self.stamp[var as usize] != self.generation {
                continue;
            }
            self.stamp[var as usize] = 0;
            counter -= 1;

            let Some(reason) = trail.reason(var) else {
                // Only the UIP may lack a reason, and the counter guard
                // keeps the UIP out of this loop.
                debug_assert!(false, "resolved variable {var} has no reason");
                continue;
            };
            for &lit in db.get(reason).lits() {
                let other = lit.var();
                if other != var {
                    self.mark(trail, other, current, &mut counter);
                }
            }
        }

        // The single remaining marked variable at the current level.
        let uip = loop {
            idx -= 1;
            let var = lits[idx].var();
            if self.stamp[var as usize] == self.generation {
                break var;
            }
        };
        debug_assert_eq!(trail.level(uip), current);

        let mut clause = Vec::with_capacity(self.learned.len() + 1);
        clause.push(negated_assignment(trail, uip));
        clause.extend_from_slice(&self.learned);

        let backtrack_level = self
            .learned
            .iter()
            .map(|lit| trail.level(lit.var()))
            .max()
            .unwrap_or(0);

        (clause, backtrack_level)
    }

    /// Marks `var` as seen. Current-level variables feed the resolution
    /// counter; lower-level variables go straight into the learned clause.
    fn mark(&mut self, trail: &Trail, var: Var, current: u32, counter: &mut usize) {
        if self.stamp[var as usize] == self.generation {
            return;
        }
        self.stamp[var as usize] = self.generation;
        if trail.level(var) == current {
            *counter += 1;
        } else {
            self.learned.push(negated_assignment(trail, var));
        }
    }
}

/// The literal falsified by `var`'s current assignment.
fn negated_assignment(trail: &Trail, var: Var) -> Lit {
    debug_assert!(!trail.value(var).is_unassigned());
    if trail.value(var).is_true() {
        Lit::negative(var)
    } else {
        Lit::positive(var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagate::{propagate, Propagation};
    use kestrel_base::Value;

    fn db(clauses: &[&[i32]]) -> ClauseDb {
        let mut db = ClauseDb::new();
        for clause in clauses {
            db.add_original(clause.iter().map(|&c| Lit::new(c)).collect());
        }
        db
    }

    fn decide(trail: &mut Trail, lit: Lit) {
        let level = trail.new_decision_level();
        trail.assign(lit, level, None);
    }

    #[test]
    fn learns_asserting_clause_skipping_a_level() {
        let db = db(&[&[-3, 4], &[-1, -4, 5], &[-1, -4, -5]]);
        let mut trail = Trail::new(5);

        decide(&mut trail, Lit::positive(1));
        assert_eq!(propagate(&db, &mut trail), Propagation::Fixpoint);
        decide(&mut trail, Lit::positive(2));
        assert_eq!(propagate(&db, &mut trail), Propagation::Fixpoint);
        decide(&mut trail, Lit::positive(3));
        let conflict = match propagate(&db, &mut trail) {
            Propagation::Conflict(id) => id,
            Propagation::Fixpoint => panic!("expected a conflict"),
        };
        assert_eq!(conflict, 2);

        let mut analyzer = Analyzer::new(5);
        let (learned, backtrack) = analyzer.analyze(&db, &trail, conflict);

        // First-UIP is x4; the clause jumps over the level-2 decision.
        assert_eq!(learned, vec![Lit::negative(4), Lit::negative(1)]);
        assert_eq!(backtrack, 1);

        // Falsified now, exactly one literal at the current level.
        assert!(learned.iter().all(|&l| trail.value_of(l).is_false()));
        let at_current = learned
            .iter()
            .filter(|l| trail.level(l.var()) == trail.decision_level())
            .count();
        assert_eq!(at_current, 1);
    }

    #[test]
    fn decision_as_uip_yields_unit_clause() {
        let db = db(&[&[1, 2], &[1, -2]]);
        let mut trail = Trail::new(2);

        decide(&mut trail, Lit::negative(1));
        let conflict = match propagate(&db, &mut trail) {
            Propagation::Conflict(id) => id,
            Propagation::Fixpoint => panic!("expected a conflict"),
        };

        let mut analyzer = Analyzer::new(2);
        let (learned, backtrack) = analyzer.analyze(&db, &trail, conflict);

        assert_eq!(learned, vec![Lit::positive(1)]);
        assert_eq!(backtrack, 0);
    }

    #[test]
    fn stamps_reset_across_invocations() {
        let db = db(&[&[1, 2], &[1, -2]]);
        let mut analyzer = Analyzer::new(2);

        for _ in 0..3 {
            let mut trail = Trail::new(2);
            decide(&mut trail, Lit::negative(1));
            let conflict = match propagate(&db, &mut trail) {
                Propagation::Conflict(id) => id,
                Propagation::Fixpoint => panic!("expected a conflict"),
            };
            let (learned, _) = analyzer.analyze(&db, &trail, conflict);
            assert_eq!(learned, vec![Lit::positive(1)]);
            assert_eq!(trail.value(2), Value::True);
        }
    }
}
