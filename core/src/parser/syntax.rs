// Operator types shared by the parser and the evaluator.

use core::fmt;

use crate::api::Error;
use crate::scanner::Symbol;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

impl TryFrom<Symbol> for BinaryOp {
    type Error = Error;

    /// Parentheses are not operators; asking for one is a tree-construction bug.
    fn try_from(symbol: Symbol) -> Result<Self, Self::Error> {
        match symbol {
            Symbol::Plus => Ok(BinaryOp::Add),
            Symbol::Minus => Ok(BinaryOp::Sub),
            Symbol::Star => Ok(BinaryOp::Mul),
            Symbol::Slash => Ok(BinaryOp::Div),
            Symbol::Caret => Ok(BinaryOp::Pow),
            Symbol::LParen | Symbol::RParen => Err(Error::unknown_operator()),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
