//! Error types for the arithmetic core.

use std::fmt;

/// Failures an arithmetic operation can signal.
///
/// Exactly two kinds exist: operand validation rejects anything that is not
/// a number, and `divide` rejects an exact-zero divisor. Both abort the
/// operation before any result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// An operand was not numeric.
    InvalidOperand,
    /// The divisor was exactly zero.
    DivisionByZero,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperand => write!(f, "Inputs must be numbers"),
            Self::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for CalcError {}
