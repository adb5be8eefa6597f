//! Assignment witnesses produced on SAT.

use crate::types::{Lit, Value, Var};

/// A satisfying assignment over variables `1..=num_vars`.
///
/// A variable the search never needed to touch may remain
/// [`Value::Unassigned`]; presentation layers treat such variables as true
/// by convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Values indexed by variable id; slot 0 is unused.
    values: Vec<Value>,
}

impl Model {
    /// Creates a model from per-variable values (slot 0 unused).
    #[must_use]
    pub fn new(values: Vec<Value>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values }
    }

    /// The number of variables this model covers.
    #[must_use]
    pub fn num_vars(&self) -> u32 {
        (self.values.len() - 1) as u32
    }

    /// The value of a variable.
    #[must_use]
    pub fn value(&self, var: Var) -> Value {
        self.values[var as usize]
    }

    /// The value of a literal under this model.
    #[must_use]
    pub fn lit_value(&self, lit: Lit) -> Value {
        lit.apply(self.value(lit.var()))
    }

    /// Whether a literal holds, applying the unassigned-as-true convention.
    #[must_use]
    pub fn holds(&self, lit: Lit) -> bool {
        match self.value(lit.var()) {
            Value::Unassigned => lit.is_positive(),
            value => lit.apply(value).is_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_convention() {
        let model = Model::new(vec![
            Value::Unassigned,
            Value::True,
            Value::False,
            Value::Unassigned,
        ]);
        assert_eq!(model.num_vars(), 3);
        assert!(model.lit_value(Lit::positive(1)).is_true());
        assert!(model.lit_value(Lit::positive(2)).is_false());
        assert!(model.lit_value(Lit::positive(3)).is_unassigned());
        // Unassigned counts as true for the positive literal only.
        assert!(model.holds(Lit::positive(3)));
        assert!(!model.holds(Lit::negative(3)));
    }
}
