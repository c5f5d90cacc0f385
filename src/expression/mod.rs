//! Expression tree: node types, construction, evaluation and rendering

mod ast;
mod builders;
mod display;
mod eval;
mod operator;

pub use ast::{BinaryOperator, Expression};
pub use builders::{exp, mul, number, sum};
