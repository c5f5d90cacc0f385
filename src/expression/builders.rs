//! Constructors that assemble trees bottom-up.
//!
//! Children are taken by value, so a node only exists once both of its
//! operands do.

use crate::expression::ast::{BinaryOperator, Expression};

impl Expression {
    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::Literal(value)
    }
}

pub fn number(value: f64) -> Expression {
    Expression::Literal(value)
}

/// `left + right`
pub fn sum(left: Expression, right: Expression) -> Expression {
    Expression::binary(BinaryOperator::Add, left, right)
}

/// `left * right`
pub fn mul(left: Expression, right: Expression) -> Expression {
    Expression::binary(BinaryOperator::Mul, left, right)
}

/// `left ^ right`
pub fn exp(left: Expression, right: Expression) -> Expression {
    Expression::binary(BinaryOperator::Pow, left, right)
}
