//! Public error type for every stage of the tally pipeline.
//!
//! Errors are values, never process exits: the scanner, parser and evaluator
//! return them up the call chain and the caller decides how to report them.

use thiserror::Error as ThisError;

/// Broad category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character outside the supported set (digits, whitespace, `*/+-()^`).
    Lexical,
    /// A grammar production could not match the current token.
    Syntactic,
    /// A tree node carries an operator the evaluator does not know. Indicates a
    /// bug in tree construction, never bad input.
    Internal,
    /// The driver received an unsupported invocation shape.
    Argument,
    /// A configured limit (nesting depth) was exceeded.
    ResourceExceeded,
}

impl ErrorKind {
    /// Stable short code, used by rich renderers.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "L001",
            ErrorKind::Syntactic => "P001",
            ErrorKind::Internal => "I001",
            ErrorKind::Argument => "A001",
            ErrorKind::ResourceExceeded => "R001",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Lexical => "lexical error",
            ErrorKind::Syntactic => "syntax error",
            ErrorKind::Internal => "internal error",
            ErrorKind::Argument => "argument error",
            ErrorKind::ResourceExceeded => "resource limit exceeded",
        };
        f.write_str(name)
    }
}

/// A failure with an optional byte offset into the source text.
///
/// Offsets are byte offsets. Scanning stops at the first byte outside the
/// supported ASCII set, so every reported offset is also a character column.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub offset: Option<usize>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>, offset: Option<usize>) -> Self {
        Self {
            kind,
            message: message.into(),
            offset,
        }
    }

    pub fn unknown_token(offset: usize) -> Self {
        Self::new(ErrorKind::Lexical, "unknown token", Some(offset))
    }

    pub fn not_a_number(offset: usize) -> Self {
        Self::new(ErrorKind::Syntactic, "not a number", Some(offset))
    }

    pub fn rparen_expected(offset: usize) -> Self {
        Self::new(ErrorKind::Syntactic, "')' expected", Some(offset))
    }

    /// Tokens remain after a complete expression.
    pub fn trailing_input(offset: usize) -> Self {
        Self::new(ErrorKind::Syntactic, "end of input expected", Some(offset))
    }

    pub fn unknown_operator() -> Self {
        Self::new(ErrorKind::Internal, "unknown operator", None)
    }

    pub fn bad_arguments() -> Self {
        Self::new(ErrorKind::Argument, "bad arguments", None)
    }

    pub fn depth_exceeded(max_depth: usize, offset: Option<usize>) -> Self {
        Self::new(
            ErrorKind::ResourceExceeded,
            format!("expression nesting exceeds maximum depth of {max_depth}"),
            offset,
        )
    }

    /// Render the two-line caret diagram pointing at the error offset.
    ///
    /// Errors without an offset render as the bare message.
    pub fn render_caret(&self, source: &str) -> String {
        match self.offset {
            Some(offset) => crate::diagnostics::caret(source, offset, &self.message),
            None => self.message.clone(),
        }
    }
}
