//! Unit propagation by linear scan.
//!
//! Every clause is rescanned until a sweep makes no new assignment. Within
//! a sweep, clauses are classified under the current partial assignment:
//! a clause with a true literal is satisfied, a fully falsified clause is a
//! conflict, and a clause with exactly one unassigned literal is unit and
//! forces that literal at the current decision level.
//!
//! The first conflict in scan order wins; propagation does not continue
//! past it.

use kestrel_base::Value;

use crate::clause_db::{ClauseDb, ClauseId};
use crate::trail::Trail;

/// Result of running propagation to a fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// No clause is unit or falsified under the current assignment.
    Fixpoint,
    /// The given clause is fully falsified.
    Conflict(ClauseId),
}

/// Derives all unit implications from the current assignment, or reports
/// the first falsified clause encountered in scan order.
pub fn propagate(db: &ClauseDb, trail: &mut Trail) -> Propagation {
    let mut changed = true;

    while changed {
        changed = false;

        for id in 0..db.len() {
            let clause = db.get(id);

            let mut unassigned = 0;
            let mut last_unassigned = None;
            let mut satisfied = false;

            for &lit in clause.lits() {
                match trail.value_of(lit) {
                    Value::True => {
                        satisfied = true;
                        break;
                    }
                    Value::False => {}
                    Value::Unassigned => {
                        unassigned += 1;
                        last_unassigned = Some(lit);
                    }
                }
            }

            if satisfied {
                continue;
            }

            match (unassigned, last_unassigned) {
                (0, _) => return Propagation::Conflict(id),
                (1, Some(lit)) => {
                    let level = trail.decision_level();
                    trail.assign(lit, level, Some(id));
                    changed = true;
                }
                _ => {}
            }
        }
    }

    Propagation::Fixpoint
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_base::Lit;

    fn db(clauses: &[&[i32]]) -> ClauseDb {
        let mut db = ClauseDb::new();
        for clause in clauses {
            db.add_original(clause.iter().map(|&c| Lit::new(c)).collect());
        }
        db
    }

    #[test]
    fn unit_chain_propagates_to_fixpoint() {
        let db = db(&[&[1], &[-1, 2], &[-2, 3]]);
        let mut trail = Trail::new(3);

        assert_eq!(propagate(&db, &mut trail), Propagation::Fixpoint);
        assert_eq!(trail.len(), 3);
        assert!(trail.value(1).is_true());
        assert!(trail.value(2).is_true());
        assert!(trail.value(3).is_true());
        assert_eq!(trail.reason(2), Some(1));
        assert_eq!(trail.reason(3), Some(2));
    }

    #[test]
    fn first_falsified_clause_is_reported() {
        let db = db(&[&[1], &[-1]]);
        let mut trail = Trail::new(1);

        // Clause 0 assigns x1; clause 1 is then falsified.
        assert_eq!(propagate(&db, &mut trail), Propagation::Conflict(1));
    }

    #[test]
    fn satisfied_clauses_are_skipped() {
        let db = db(&[&[1, 2], &[-1, 2]]);
        let mut trail = Trail::new(2);
        trail.assign(Lit::positive(2), 0, None);

        assert_eq!(propagate(&db, &mut trail), Propagation::Fixpoint);
        // Nothing was unit; x1 stays open.
        assert!(trail.value(1).is_unassigned());
    }
}
