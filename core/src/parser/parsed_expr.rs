use core::fmt;

use crate::parser::BinaryOp;

/// A parsed expression together with the source it came from.
#[derive(Debug, Clone, Copy)]
pub struct ParsedExpr<'a> {
    pub expr: &'a Expr<'a>,
    pub source: &'a str,
}

/// Expression tree node.
///
/// Nodes live in a `bumpalo` arena and reference their children by shared
/// borrow. The parser never reuses a node, so the tree has no shared subtrees
/// and every `Binary` node has exactly two children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Literal(f64),
}

/// Fully parenthesised rendering, e.g. `(2 ^ (3 ^ 2))`.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
