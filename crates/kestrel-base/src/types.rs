//! Literals, variables and three-valued assignments.
//!
//! Variables are numbered `1..=num_vars`; a literal is the DIMACS signed
//! encoding of a variable, where the sign carries the polarity. The value 0
//! never names a variable or literal.

use std::fmt;
use std::ops::Not;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A propositional variable, identified by its 1-based id.
pub type Var = u32;

/// A literal: a variable together with a polarity, stored as a non-zero
/// signed integer in the DIMACS convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lit(i32);

impl Lit {
    /// Creates a literal from its DIMACS encoding.
    ///
    /// The caller guarantees `code != 0`; use [`Lit::try_from`] on
    /// unvalidated input.
    #[must_use]
    pub fn new(code: i32) -> Self {
        debug_assert!(code != 0, "literal 0 is reserved");
        Self(code)
    }

    /// The positive literal of `var`.
    #[must_use]
    pub fn positive(var: Var) -> Self {
        debug_assert!(var != 0);
        Self(var as i32)
    }

    /// The negative literal of `var`.
    #[must_use]
    pub fn negative(var: Var) -> Self {
        debug_assert!(var != 0);
        Self(-(var as i32))
    }

    /// The variable this literal mentions.
    #[must_use]
    pub const fn var(self) -> Var {
        self.0.unsigned_abs()
    }

    /// Whether this is the positive polarity.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// The DIMACS encoding of this literal.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// The value this literal takes when its variable holds `value`.
    #[must_use]
    pub fn apply(self, value: Value) -> Value {
        if self.is_positive() {
            value
        } else {
            !value
        }
    }
}

impl TryFrom<i32> for Lit {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Error> {
        if code == 0 {
            return Err(Error::ZeroLiteral);
        }
        Ok(Self(code))
    }
}

impl Not for Lit {
    type Output = Lit;

    fn not(self) -> Lit {
        Lit(-self.0)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A three-valued assignment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Value {
    True,
    False,
    #[default]
    Unassigned,
}

impl Value {
    /// Lifts a concrete boolean into a [`Value`].
    #[must_use]
    pub const fn from_bool(b: bool) -> Self {
        if b {
            Self::True
        } else {
            Self::False
        }
    }

    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    #[must_use]
    pub const fn is_unassigned(self) -> bool {
        matches!(self, Self::Unassigned)
    }
}

impl Not for Value {
    type Output = Value;

    fn not(self) -> Value {
        match self {
            Value::True => Value::False,
            Value::False => Value::True,
            Value::Unassigned => Value::Unassigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_roundtrip() {
        let lit = Lit::new(-7);
        assert_eq!(lit.var(), 7);
        assert!(!lit.is_positive());
        assert_eq!(!lit, Lit::positive(7));
        assert_eq!((!lit).code(), 7);
    }

    #[test]
    fn lit_rejects_zero() {
        assert!(Lit::try_from(0).is_err());
        assert_eq!(Lit::try_from(3).unwrap(), Lit::positive(3));
    }

    #[test]
    fn apply_polarity() {
        let pos = Lit::positive(1);
        let neg = Lit::negative(1);
        assert_eq!(pos.apply(Value::True), Value::True);
        assert_eq!(neg.apply(Value::True), Value::False);
        assert_eq!(neg.apply(Value::Unassigned), Value::Unassigned);
    }
}
