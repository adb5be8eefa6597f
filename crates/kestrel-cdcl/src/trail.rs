//! Assignment trail and per-variable state.
//!
//! The trail records literals in the exact order they were assigned,
//! decisions and propagations intermixed. For every assigned variable it
//! also tracks the decision level and, for propagated variables, the reason
//! clause that forced the assignment. Trail levels are non-decreasing, and
//! level-0 assignments survive every backtrack.

use kestrel_base::{Lit, Model, Value, Var};

use crate::clause_db::ClauseId;

/// Per-variable assignment state plus the assignment history.
#[derive(Debug)]
pub struct Trail {
    /// Values indexed by variable id; slot 0 unused.
    values: Vec<Value>,
    /// Decision level of each assigned variable; undefined when unassigned.
    level_of: Vec<u32>,
    /// Reason clause of each propagated variable; `None` for decisions and
    /// unassigned variables.
    reason: Vec<Option<ClauseId>>,
    /// Literals in assignment order.
    trail: Vec<Lit>,
    /// Current decision level; 0 holds unconditional implications.
    decision_level: u32,
}

impl Trail {
    /// Creates an empty trail over variables `1..=num_vars`.
    #[must_use]
    pub fn new(num_vars: u32) -> Self {
        let slots = num_vars as usize + 1;
        Self {
            values: vec![Value::Unassigned; slots],
            level_of: vec![0; slots],
            reason: vec![None; slots],
            trail: Vec::with_capacity(num_vars as usize),
            decision_level: 0,
        }
    }

    #[must_use]
    pub fn num_vars(&self) -> u32 {
        (self.values.len() - 1) as u32
    }

    #[must_use]
    pub fn decision_level(&self) -> u32 {
        self.decision_level
    }

    /// Opens a new decision level and returns it.
    pub fn new_decision_level(&mut self) -> u32 {
        self.decision_level += 1;
        self.decision_level
    }

    /// The value of a variable.
    #[must_use]
    pub fn value(&self, var: Var) -> Value {
        self.values[var as usize]
    }

    /// The value of a literal under the current partial assignment.
    #[must_use]
    pub fn value_of(&self, lit: Lit) -> Value {
        lit.apply(self.values[lit.var() as usize])
    }

    /// The decision level a variable was assigned at.
    #[must_use]
    pub fn level(&self, var: Var) -> u32 {
        self.level_of[var as usize]
    }

    /// The reason clause that propagated a variable, if any.
    #[must_use]
    pub fn reason(&self, var: Var) -> Option<ClauseId> {
        self.reason[var as usize]
    }

    /// The literals on the trail, in assignment order.
    #[must_use]
    pub fn lits(&self) -> &[Lit] {
        &self.trail
    }

    /// Number of currently assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Assigns `lit` true at `level` and appends it to the trail.
    ///
    /// The variable must be unassigned.
    pub fn assign(&mut self, lit: Lit, level: u32, reason: Option<ClauseId>) {
        let var = lit.var() as usize;
        debug_assert!(self.values[var].is_unassigned());

        self.values[var] = Value::from_bool(lit.is_positive());
        self.level_of[var] = level;
        self.reason[var] = reason;
        self.trail.push(lit);
    }

    /// Pops every trail entry assigned above `level` and resets the current
    /// decision level to `level`.
    pub fn unassign_above(&mut self, level: u32) {
        while let Some(&lit) = self.trail.last() {
            let var = lit.var() as usize;
            if self.level_of[var] <= level {
                break;
            }
            self.values[var] = Value::Unassigned;
            self.level_of[var] = 0;
            self.reason[var] = None;
            self.trail.pop();
        }
        self.decision_level = level;
    }

    /// Snapshots the current assignment as a witness.
    #[must_use]
    pub fn to_model(&self) -> Model {
        Model::new(self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_and_lookup() {
        let mut trail = Trail::new(3);
        trail.assign(Lit::positive(1), 0, None);
        trail.assign(Lit::negative(2), 0, Some(4));

        assert_eq!(trail.value(1), Value::True);
        assert_eq!(trail.value(2), Value::False);
        assert_eq!(trail.value_of(Lit::negative(2)), Value::True);
        assert_eq!(trail.value(3), Value::Unassigned);
        assert_eq!(trail.reason(2), Some(4));
        assert_eq!(trail.reason(1), None);
        assert_eq!(trail.lits(), &[Lit::positive(1), Lit::negative(2)]);
    }

    #[test]
    fn unassign_above_keeps_lower_levels() {
        let mut trail = Trail::new(4);
        trail.assign(Lit::positive(1), 0, None);
        let l1 = trail.new_decision_level();
        trail.assign(Lit::positive(2), l1, None);
        trail.assign(Lit::negative(3), l1, Some(0));
        let l2 = trail.new_decision_level();
        trail.assign(Lit::positive(4), l2, None);

        trail.unassign_above(1);
        assert_eq!(trail.decision_level(), 1);
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.value(4), Value::Unassigned);
        assert_eq!(trail.reason(4), None);
        assert_eq!(trail.value(2), Value::True);

        trail.unassign_above(0);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.value(1), Value::True);
        assert_eq!(trail.value(3), Value::Unassigned);
        assert_eq!(trail.reason(3), None);
    }
}
