//! Demo orchestrator.
//!
//! Replays a fixed tour of the arithmetic library through a [`RenderSink`]:
//! a worked example per operation, the error paths, and a few nested
//! calculations. Failures are caught per call and rendered as error lines;
//! one failing operation never stops the run.

use serde_json::json;
use tracing::debug;

use crate::calc::{add, divide, multiply, operand, subtract, Op};
use crate::error::CalcError;
use crate::render::RenderSink;

/// Run the full demo sequence against `sink`.
pub fn run(sink: &dyn RenderSink) {
    debug!("starting demo sequence");
    sink.header("TALLY LIBRARY DEMO");

    sink.section("➕ ADDITION");
    show(sink, "add(5, 3)", add(5.0, 3.0));
    show(sink, "add(100, 250)", add(100.0, 250.0));
    show(sink, "add(-10, 5)", add(-10.0, 5.0));
    show(sink, "add(3.14, 2.86)", add(3.14, 2.86));

    sink.section("➖ SUBTRACTION");
    show(sink, "subtract(10, 4)", subtract(10.0, 4.0));
    show(sink, "subtract(100, 75)", subtract(100.0, 75.0));
    show(sink, "subtract(5, 10)", subtract(5.0, 10.0));
    show(sink, "subtract(0, 5)", subtract(0.0, 5.0));

    sink.section("✖️  MULTIPLICATION");
    show(sink, "multiply(6, 7)", multiply(6.0, 7.0));
    show(sink, "multiply(12, 12)", multiply(12.0, 12.0));
    show(sink, "multiply(-5, 3)", multiply(-5.0, 3.0));
    show(sink, "multiply(2.5, 4)", multiply(2.5, 4.0));

    sink.section("➗ DIVISION");
    show(sink, "divide(15, 3)", divide(15.0, 3.0));
    show(sink, "divide(100, 4)", divide(100.0, 4.0));
    show(sink, "divide(7, 2)", divide(7.0, 2.0));
    show(sink, "divide(1, 3)", divide(1.0, 3.0));

    // Intentionally-invalid calls go through the untyped boundary, the same
    // path CLI input takes.
    sink.section("⚠️  ERROR HANDLING");
    show(
        sink,
        "add(\"5\", 3)",
        operand::eval(Op::Add, &json!("5"), &json!(3)),
    );
    show(
        sink,
        "multiply(5, null)",
        operand::eval(Op::Multiply, &json!(5), &json!(null)),
    );
    show(
        sink,
        "divide(10, 0)",
        operand::eval(Op::Divide, &json!(10), &json!(0)),
    );
    show(
        sink,
        "divide(0, 0)",
        operand::eval(Op::Divide, &json!(0), &json!(0)),
    );

    sink.section("🔢 COMPLEX CALCULATIONS");
    show(
        sink,
        "add(multiply(10, 5), 2)",
        multiply(10.0, 5.0).and_then(|product| add(product, 2.0)),
    );
    show(
        sink,
        "divide(subtract(100, 20), 4)",
        subtract(100.0, 20.0).and_then(|difference| divide(difference, 4.0)),
    );
    show(
        sink,
        "multiply(add(3, 7), subtract(10, 5))",
        add(3.0, 7.0).and_then(|sum| subtract(10.0, 5.0).and_then(|diff| multiply(sum, diff))),
    );

    sink.footer("That's all! Enjoy using the library!");
    debug!("demo sequence complete");
}

/// Render one operation outcome as a result or error line.
fn show(sink: &dyn RenderSink, description: &str, outcome: Result<f64, CalcError>) {
    match outcome {
        Ok(value) => sink.result(description, value),
        Err(e) => {
            debug!(operation = description, error = %e, "operation failed");
            sink.error(description, &e.to_string());
        }
    }
}
