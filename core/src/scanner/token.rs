use core::fmt;

/// Punctuation and operator characters recognised by the scanner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::Plus => '+',
            Symbol::Minus => '-',
            Symbol::Star => '*',
            Symbol::Slash => '/',
            Symbol::Caret => '^',
            Symbol::LParen => '(',
            Symbol::RParen => ')',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Operator(Symbol),
    EndOfInput,
}

/// A token and the byte offset where it begins.
///
/// For [`TokenKind::EndOfInput`] the offset is the length of the source.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub fn number(value: f64, offset: usize) -> Self {
        Self {
            kind: TokenKind::Number(value),
            offset,
        }
    }

    pub fn operator(symbol: Symbol, offset: usize) -> Self {
        Self {
            kind: TokenKind::Operator(symbol),
            offset,
        }
    }

    pub fn end_of_input(offset: usize) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            offset,
        }
    }

    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Operator(symbol)
    }
}
