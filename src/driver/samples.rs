use clap::ValueEnum;

use crate::expression::{Expression, exp, number, sum};

/// Sample trees the driver knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// (-2 + 4) ^ 5
    PowerOfSum,
    /// 2 ^ 3 + -2
    SumOfPower,
}

impl Sample {
    /// Every sample, in transcript order
    pub const ALL: [Sample; 2] = [Sample::PowerOfSum, Sample::SumOfPower];

    pub fn build(self) -> Expression {
        match self {
            Sample::PowerOfSum => exp(sum(number(-2.0), number(4.0)), number(5.0)),
            Sample::SumOfPower => sum(exp(number(2.0), number(3.0)), number(-2.0)),
        }
    }
}
