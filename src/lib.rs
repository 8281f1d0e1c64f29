//! Tally — validated four-function arithmetic with decorated terminal output.
//!
//! The crate has two independent halves. [`calc`] provides pure, validated
//! arithmetic: typed `f64` operations plus an untyped boundary that rejects
//! non-numeric input at runtime. [`tui`] provides the stateless console
//! formatter: bordered headers, closing banners, section dividers, and
//! semantically colored result/error/status lines. [`demo`] wires the two
//! together into the fixed end-to-end tour the `tally` binary runs.
//!
//! # Quick start
//!
//! ```
//! use tally::calc::{add, divide};
//! use tally::error::CalcError;
//!
//! assert_eq!(add(5.0, 3.0), Ok(8.0));
//! assert_eq!(divide(10.0, 0.0), Err(CalcError::DivisionByZero));
//! ```

pub mod build_info;
pub mod calc;
pub mod demo;
pub mod error;
pub mod render;
pub mod tui;
