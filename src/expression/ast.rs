/// Binary operators an expression node can combine its children with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Mul,
    Pow,
}

/// Arithmetic expression tree built from literals and binary operators
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(f64),
    Binary {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}
