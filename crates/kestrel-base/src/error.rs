//! Unified error types for Kestrel.

use thiserror::Error;

/// The main error type for Kestrel operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Literal 0 appeared inside a clause. Zero is reserved as the clause
    /// terminator in the DIMACS format and as the "no variable" sentinel.
    #[error("literal 0 is not a valid clause literal")]
    ZeroLiteral,

    /// A literal references a variable above the declared variable count.
    #[error("variable {var} out of range (formula declares {num_vars} variables)")]
    VariableOutOfRange {
        var: crate::types::Var,
        num_vars: u32,
    },

    /// Malformed input file.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
