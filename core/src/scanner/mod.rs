//! Lexical scanning of expression source text.

mod token;


pub use token::{Symbol, Token, TokenKind};

use crate::api::Error;
use logos::Logos;

#[derive(Logos, Debug, PartialEq)]
// Same set as C `isspace`, which includes vertical tab.
#[logos(skip r"[ \t\n\x0B\x0C\r]+")]
enum Lexeme {
    // Integer digit runs only: no sign, decimal point or exponent.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[token("+", |_| Symbol::Plus)]
    #[token("-", |_| Symbol::Minus)]
    #[token("*", |_| Symbol::Star)]
    #[token("/", |_| Symbol::Slash)]
    #[token("^", |_| Symbol::Caret)]
    #[token("(", |_| Symbol::LParen)]
    #[token(")", |_| Symbol::RParen)]
    Operator(Symbol),
}

/// Scan `source` into tokens.
///
/// The result always ends with exactly one [`TokenKind::EndOfInput`] whose
/// offset equals `source.len()`. The first unsupported character aborts the
/// scan with an `unknown token` error at its offset; no partial list is
/// returned.
pub fn scan(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let offset = lexer.span().start;
        match lexeme {
            Ok(Lexeme::Number(value)) => tokens.push(Token::number(value, offset)),
            Ok(Lexeme::Operator(symbol)) => tokens.push(Token::operator(symbol, offset)),
            Err(()) => return Err(Error::unknown_token(offset)),
        }
    }

    tokens.push(Token::end_of_input(source.len()));
    tracing::debug!(count = tokens.len(), "scanned");
    Ok(tokens)
}
