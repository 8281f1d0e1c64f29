//! Untyped operand boundary.
//!
//! Typed callers of [`crate::calc`] get operand validity for free from the
//! signature. Input that arrives as data — CLI words, demo literals, anything
//! deserialized — goes through here first, where the "must be numbers"
//! contract is enforced at runtime.

use serde_json::Value;

use super::Op;
use crate::error::CalcError;

/// Extract a numeric operand from an untyped value.
///
/// Only JSON numbers are accepted. Null, booleans, strings (numeric-looking
/// ones included), arrays, and objects are rejected; nothing is coerced.
pub fn numeric(value: &Value) -> Result<f64, CalcError> {
    value.as_f64().ok_or(CalcError::InvalidOperand)
}

/// Evaluate `op` over two untyped operands.
///
/// Both operands are validated before any computation, so a type error on
/// either side is reported ahead of the zero-divisor check.
pub fn eval(op: Op, a: &Value, b: &Value) -> Result<f64, CalcError> {
    let a = numeric(a)?;
    let b = numeric(b)?;
    op.apply(a, b)
}

/// Interpret one CLI word as an untyped operand.
///
/// Words that parse as JSON keep their parsed type (`5` is a number, `true`
/// a boolean, `null` null); everything else becomes a string. Validation is
/// left to [`eval`] so the CLI reports the same errors as any other caller.
pub fn from_arg(word: &str) -> Value {
    serde_json::from_str(word).unwrap_or_else(|_| Value::String(word.to_string()))
}
