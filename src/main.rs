//! CLI entry point for tally.

mod cli;

use clap::Parser;
use tally::calc::{operand, Op};
use tally::demo;
use tally::render::Renderer;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let renderer = Renderer::new(!args.no_color);

    match args.command {
        None => demo::run(&renderer),
        Some(cli::Command::Eval { op, a, b }) => run_eval(&renderer, &op, &a, &b),
    }
}

/// One-shot evaluation of `op a b` from untyped CLI words.
///
/// Operands take the untyped boundary path, so non-numeric words surface the
/// same "Inputs must be numbers" failure the library reports elsewhere.
fn run_eval(renderer: &Renderer, op: &str, a: &str, b: &str) {
    let op: Op = match op.parse() {
        Ok(op) => op,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let description = format!("{op}({a}, {b})");
    debug!(%description, "evaluating one-shot expression");
    match operand::eval(op, &operand::from_arg(a), &operand::from_arg(b)) {
        Ok(value) => renderer.result(&description, value),
        Err(e) => {
            renderer.error(&description, &e.to_string());
            std::process::exit(1);
        }
    }
}

/// Install the stderr log subscriber, honoring `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
