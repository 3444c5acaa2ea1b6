//! Core evaluation logic.

use crate::{
    api::{Error, EvaluatorOptions},
    parser::{BinaryOp, Expr},
};

use super::operators::eval_binary;

/// Evaluate `expr` by post-order traversal.
///
/// Total over every tree the parser builds. Left spines (`1+2+3+...`) are
/// folded in a loop, so only right operands recurse and the recursion depth
/// follows the nesting the parser bounds. Use [`Evaluator`] for trees built
/// by hand.
pub fn eval(expr: &Expr<'_>) -> f64 {
    let (first, spine) = left_spine(expr);
    spine
        .into_iter()
        .rev()
        .fold(first, |acc, (op, right)| eval_binary(op, acc, eval(right)))
}

/// Split `expr` into its leftmost literal and the `(op, right)` pairs above
/// it, innermost last.
fn left_spine<'e, 'a>(mut expr: &'e Expr<'a>) -> (f64, Vec<(BinaryOp, &'e Expr<'a>)>) {
    let mut spine = Vec::new();
    loop {
        match expr {
            Expr::Literal(value) => return (*value, spine),
            Expr::Binary { op, left, right } => {
                spine.push((*op, &**right));
                expr = *left;
            }
        }
    }
}

/// Depth-limited evaluator.
pub struct Evaluator {
    options: EvaluatorOptions,
    depth: usize,
}

impl Evaluator {
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Evaluate an expression, failing instead of recursing past `max_depth`.
    ///
    /// Depth counts right operands only; left spines are folded in a loop.
    pub fn eval(&mut self, expr: &Expr<'_>) -> Result<f64, Error> {
        if self.depth >= self.options.max_depth {
            return Err(Error::depth_exceeded(self.options.max_depth, None));
        }

        self.depth += 1;
        let result = self.eval_inner(expr);
        self.depth -= 1;

        result
    }

    fn eval_inner(&mut self, expr: &Expr<'_>) -> Result<f64, Error> {
        let (mut acc, spine) = left_spine(expr);
        for (op, right) in spine.into_iter().rev() {
            let right = self.eval(right)?;
            acc = eval_binary(op, acc, right);
        }
        Ok(acc)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluatorOptions::default())
    }
}
