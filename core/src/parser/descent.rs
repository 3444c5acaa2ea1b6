//! Recursive-descent parser.
//!
//! Grammar, lowest to highest precedence:
//!
//! ```text
//! expression := term (("+" | "-") term)*     ; left-associative
//! term       := power (("*" | "/") power)*    ; left-associative
//! power      := atom ("^" power)?             ; right-associative
//! atom       := NUMBER | "(" expression ")"
//! ```

use bumpalo::Bump;

use crate::api::{Error, ParseOptions};
use crate::parser::{BinaryOp, Expr, ParsedExpr};
use crate::scanner::{self, Symbol, Token, TokenKind};

/// Scan and parse `source` with default options.
pub fn parse<'a>(arena: &'a Bump, source: &str) -> Result<ParsedExpr<'a>, Error> {
    parse_with_options(arena, source, ParseOptions::default())
}

/// Scan and parse `source`.
///
/// The source is copied into the arena so the result borrows only from `arena`.
pub fn parse_with_options<'a>(
    arena: &'a Bump,
    source: &str,
    options: ParseOptions,
) -> Result<ParsedExpr<'a>, Error> {
    let source = arena.alloc_str(source);
    let tokens = scanner::scan(source)?;
    let expr = parse_tokens(arena, &tokens, options)?;
    Ok(ParsedExpr { expr, source })
}

/// Parse an already scanned token sequence.
///
/// Every token up to the terminating `EndOfInput` must be consumed; anything
/// left over is an `end of input expected` error.
pub fn parse_tokens<'a>(
    arena: &'a Bump,
    tokens: &[Token],
    options: ParseOptions,
) -> Result<&'a Expr<'a>, Error> {
    Parser::new(arena, tokens, options).parse()
}

struct Parser<'a, 't> {
    arena: &'a Bump,
    tokens: &'t [Token],
    /// Index of the current token. Only ever moves forward.
    pos: usize,
    /// Current recursion depth through `(` and `^`, the only productions
    /// that recurse. `+ - * /` chains are folded in a loop.
    nesting: usize,
    options: ParseOptions,
}

impl<'a, 't> Parser<'a, 't> {
    fn new(arena: &'a Bump, tokens: &'t [Token], options: ParseOptions) -> Self {
        Self {
            arena,
            tokens,
            pos: 0,
            nesting: 0,
            options,
        }
    }

    fn parse(mut self) -> Result<&'a Expr<'a>, Error> {
        let expr = self.expression()?;

        let token = self.current();
        if token.kind != TokenKind::EndOfInput {
            return Err(Error::trailing_input(token.offset));
        }

        tracing::debug!(consumed = self.pos, "parsed");
        Ok(expr)
    }

    /// The current token. A sequence missing its terminator reads as ending
    /// at the start of its last token, since a number's width is not recorded.
    fn current(&self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => *token,
            None => Token::end_of_input(self.tokens.last().map_or(0, |t| t.offset)),
        }
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// If the current token is one of `symbols`, consume it and return it.
    fn eat_any(&mut self, symbols: &[Symbol]) -> Option<(Symbol, usize)> {
        let token = self.current();
        match token.kind {
            TokenKind::Operator(symbol) if symbols.contains(&symbol) => {
                self.advance();
                Some((symbol, token.offset))
            }
            _ => None,
        }
    }

    fn enter(&mut self, offset: usize) -> Result<(), Error> {
        if self.nesting >= self.options.max_depth {
            return Err(Error::depth_exceeded(self.options.max_depth, Some(offset)));
        }
        self.nesting += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn binary(
        &self,
        symbol: Symbol,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    ) -> Result<&'a Expr<'a>, Error> {
        let op = BinaryOp::try_from(symbol)?;
        let expr: &'a Expr<'a> = self.arena.alloc(Expr::Binary { op, left, right });
        Ok(expr)
    }

    // expression := term (("+" | "-") term)*
    fn expression(&mut self) -> Result<&'a Expr<'a>, Error> {
        let mut node = self.term()?;
        while let Some((symbol, _)) = self.eat_any(&[Symbol::Plus, Symbol::Minus]) {
            let right = self.term()?;
            node = self.binary(symbol, node, right)?;
        }
        Ok(node)
    }

    // term := power (("*" | "/") power)*
    fn term(&mut self) -> Result<&'a Expr<'a>, Error> {
        let mut node = self.power()?;
        while let Some((symbol, _)) = self.eat_any(&[Symbol::Star, Symbol::Slash]) {
            let right = self.power()?;
            node = self.binary(symbol, node, right)?;
        }
        Ok(node)
    }

    // power := atom ("^" power)?
    fn power(&mut self) -> Result<&'a Expr<'a>, Error> {
        let base = self.atom()?;
        let Some((symbol, offset)) = self.eat_any(&[Symbol::Caret]) else {
            return Ok(base);
        };

        self.enter(offset)?;
        let exponent = self.power();
        self.leave();
        self.binary(symbol, base, exponent?)
    }

    // atom := NUMBER | "(" expression ")"
    fn atom(&mut self) -> Result<&'a Expr<'a>, Error> {
        let token = self.current();
        match token.kind {
            TokenKind::Number(value) => {
                self.advance();
                let expr: &'a Expr<'a> = self.arena.alloc(Expr::Literal(value));
                Ok(expr)
            }
            TokenKind::Operator(Symbol::LParen) => {
                self.advance();
                self.enter(token.offset)?;
                let inner = self.expression();
                self.leave();
                let inner = inner?;

                let close = self.current();
                if !close.is_symbol(Symbol::RParen) {
                    return Err(Error::rparen_expected(close.offset));
                }
                self.advance();
                Ok(inner)
            }
            _ => Err(Error::not_a_number(token.offset)),
        }
    }
}
