//! Public API for evaluating tally expressions.
//!
//! # Example
//!
//! ```
//! use tally_core::api::{ErrorKind, evaluate};
//!
//! assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
//!
//! let err = evaluate("2+a").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Lexical);
//! assert_eq!(err.offset, Some(2));
//! ```

pub mod error;
pub mod options;

pub use error::{Error, ErrorKind};
pub use options::{EngineOptions, EvaluatorOptions, ParseOptions};

use crate::{evaluator, parser};
use bumpalo::Bump;

/// Scan, parse and evaluate `source` with default options.
pub fn evaluate(source: &str) -> Result<f64, Error> {
    evaluate_with(source, &EngineOptions::default())
}

/// Scan, parse and evaluate `source`.
///
/// The tree lives in a private arena that is dropped before returning.
pub fn evaluate_with(source: &str, options: &EngineOptions) -> Result<f64, Error> {
    let arena = Bump::new();
    let parsed = parser::parse_with_options(&arena, source, options.parse)?;
    let value = evaluator::Evaluator::new(options.evaluator).eval(parsed.expr)?;
    tracing::debug!(source, value, "evaluated");
    Ok(value)
}
