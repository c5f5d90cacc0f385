//! exprtree - A small library for arithmetic expression trees
//!
//! Trees are built bottom-up from numeric literals and binary operators
//! (addition, multiplication, exponentiation), then evaluated to an `f64` or
//! rendered to infix text.

pub mod driver;
pub mod expression;

// Re-export the main public API
pub use driver::{DriverError, Sample, TranscriptLine, transcript, write_transcript};
pub use expression::{BinaryOperator, Expression, exp, mul, number, sum};

/// Build the tree for `sample`, returning its rendering and value
///
/// # Examples
///
/// ```
/// use exprtree::{Sample, evaluate_sample};
///
/// let (rendered, value) = evaluate_sample(Sample::PowerOfSum);
/// assert_eq!(rendered, "(-2) + (4) ^ (5)");
/// assert_eq!(value, 32.0);
/// ```
pub fn evaluate_sample(sample: Sample) -> (String, f64) {
    let expr = sample.build();
    (expr.render(), expr.eval())
}
