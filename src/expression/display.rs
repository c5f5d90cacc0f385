use std::fmt;

use crate::expression::ast::Expression;

// Only literals carry parentheses; binary nodes are written bare, so the
// rendered text does not encode the tree shape on its own.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "({})", value),
            Expression::Binary { op, left, right } => write!(f, "{} {} {}", left, op, right),
        }
    }
}

impl Expression {
    /// Infix rendering of the tree, identical to the `Display` output.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
