use std::fmt;

use crate::expression::ast::BinaryOperator;

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 3] =
        [BinaryOperator::Add, BinaryOperator::Mul, BinaryOperator::Pow];

    /// Combine two already evaluated operands.
    ///
    /// `Pow` defers to [`f64::powf`], so `0 ^ 0` is 1 and a negative base with a
    /// fractional exponent yields NaN.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Pow => left.powf(right),
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Mul => '*',
            BinaryOperator::Pow => '^',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
