//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use tally::build_info;

/// A validated four-function calculator with decorated terminal output.
///
/// Without a subcommand, runs the full library demo.
#[derive(Debug, Parser)]
#[command(name = "tally", version = build_info::cli_version_text())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one operation and print its result line.
    Eval {
        /// Operation: add, subtract, multiply, or divide.
        op: String,
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
    },
}
