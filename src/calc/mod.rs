//! Validated four-function arithmetic.
//!
//! The typed API operates on `f64` and makes operand validity a compile-time
//! guarantee; only `divide` retains a runtime failure (zero divisor). The
//! [`operand`] module holds the untyped boundary where non-numeric input is
//! rejected at runtime.

pub mod operand;

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Add two numbers under native double-precision semantics.
pub fn add(a: f64, b: f64) -> Result<f64, CalcError> {
    Ok(a + b)
}

/// Subtract `b` from `a`.
pub fn subtract(a: f64, b: f64) -> Result<f64, CalcError> {
    Ok(a - b)
}

/// Multiply two numbers.
pub fn multiply(a: f64, b: f64) -> Result<f64, CalcError> {
    Ok(a * b)
}

/// Divide `a` by `b`.
///
/// Fails with [`CalcError::DivisionByZero`] when `b` is exactly zero. Any
/// nonzero divisor (including subnormals) divides under IEEE-754 rules.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// One of the four supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    /// Apply this operation to two typed operands.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => add(a, b),
            Self::Subtract => subtract(a, b),
            Self::Multiply => multiply(a, b),
            Self::Divide => divide(a, b),
        }
    }

    /// Operation name as used on the CLI and in rendered output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(format!(
                "unknown operation `{other}` (expected add, subtract, multiply, or divide)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_returns_exact_sum() {
        assert_eq!(add(5.0, 3.0), Ok(8.0));
        assert_eq!(add(3.14, 2.86), Ok(3.14 + 2.86));
    }

    #[test]
    fn subtract_can_go_negative() {
        assert_eq!(subtract(5.0, 10.0), Ok(-5.0));
    }

    #[test]
    fn multiply_handles_signs() {
        assert_eq!(multiply(-5.0, 3.0), Ok(-15.0));
    }

    #[test]
    fn divide_produces_fractional_results() {
        assert_eq!(divide(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn divide_rejects_zero_divisor() {
        assert_eq!(divide(10.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(CalcError::DivisionByZero));
        // Negative zero compares equal to zero and is rejected too.
        assert_eq!(divide(1.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn divide_allows_tiny_nonzero_divisors() {
        assert_eq!(divide(1.0, f64::MIN_POSITIVE), Ok(1.0 / f64::MIN_POSITIVE));
    }

    #[test]
    fn operations_are_pure() {
        // Same inputs, same outputs, call after call.
        assert_eq!(add(1.5, 2.5), add(1.5, 2.5));
        assert_eq!(divide(7.0, 2.0), divide(7.0, 2.0));
    }

    #[test]
    fn op_applies_matching_function() {
        assert_eq!(Op::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Op::Subtract.apply(5.0, 10.0), Ok(-5.0));
        assert_eq!(Op::Multiply.apply(-5.0, 3.0), Ok(-15.0));
        assert_eq!(Op::Divide.apply(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn op_parses_canonical_names() {
        assert_eq!("add".parse::<Op>(), Ok(Op::Add));
        assert_eq!("subtract".parse::<Op>(), Ok(Op::Subtract));
        assert_eq!("multiply".parse::<Op>(), Ok(Op::Multiply));
        assert_eq!("divide".parse::<Op>(), Ok(Op::Divide));
    }

    #[test]
    fn op_rejects_unknown_names() {
        let err = "mod".parse::<Op>().unwrap_err();
        assert!(err.contains("unknown operation"), "got: {err}");
    }

    #[test]
    fn op_display_round_trips_name() {
        assert_eq!(Op::Divide.to_string(), "divide");
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        fn finite() -> impl Strategy<Value = f64> {
            prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
        }

        proptest! {
            #[test]
            fn add_matches_native_sum(a in finite(), b in finite()) {
                prop_assert_eq!(add(a, b), Ok(a + b));
            }

            #[test]
            fn subtract_matches_native_difference(a in finite(), b in finite()) {
                prop_assert_eq!(subtract(a, b), Ok(a - b));
            }

            #[test]
            fn multiply_matches_native_product(a in finite(), b in finite()) {
                prop_assert_eq!(multiply(a, b), Ok(a * b));
            }

            #[test]
            fn divide_matches_native_quotient_for_nonzero(a in finite(), b in finite()) {
                prop_assume!(b != 0.0);
                prop_assert_eq!(divide(a, b), Ok(a / b));
            }

            #[test]
            fn divide_by_zero_always_signals(a in finite()) {
                prop_assert_eq!(divide(a, 0.0), Err(CalcError::DivisionByZero));
            }

            #[test]
            fn repeated_calls_are_identical(a in finite(), b in finite()) {
                prop_assert_eq!(add(a, b), add(a, b));
                prop_assert_eq!(multiply(a, b), multiply(a, b));
            }
        }
    }
}
