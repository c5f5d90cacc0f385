use log::{debug, trace};

use crate::expression::ast::Expression;

fn eval_node(expr: &Expression) -> f64 {
    match expr {
        Expression::Literal(value) => *value,
        Expression::Binary { op, left, right } => {
            let l = eval_node(left);
            let r = eval_node(right);
            let value = op.apply(l, r);
            trace!("{} {} {} -> {}", l, op, r, value);
            value
        }
    }
}

impl Expression {
    /// Evaluates the tree depth-first, left operand before right.
    ///
    /// Never fails: NaN and infinities produced along the way propagate to the
    /// result following IEEE-754 rules.
    pub fn eval(&self) -> f64 {
        debug!("Evaluating expression: {}", self);
        let value = eval_node(self);
        debug!("Expression evaluated to: {}", value);
        value
    }

    /// Number of nodes on the longest root-to-leaf path. A literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Literal(_) => 1,
            Expression::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expression::Literal(_) => 1,
            Expression::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}
