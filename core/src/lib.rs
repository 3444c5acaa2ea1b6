//! Scanner, parser and evaluator for tally arithmetic expressions.
//!
//! The pipeline runs in three strictly sequential stages:
//!
//! 1. [`scanner::scan`] turns the source text into [`scanner::Token`]s.
//! 2. [`parser::parse`] builds an arena-allocated [`parser::Expr`] tree.
//! 3. [`evaluator::eval`] folds the tree into an `f64`.
//!
//! ```
//! use bumpalo::Bump;
//! use tally_core::{evaluator, parser};
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "2 ^ 3 ^ 2").unwrap();
//! assert_eq!(evaluator::eval(parsed.expr), 512.0);
//! ```

pub mod api;
pub mod diagnostics;
pub mod evaluator;
pub mod parser;
pub mod scanner;

pub use api::{EngineOptions, Error, ErrorKind, evaluate, evaluate_with};
