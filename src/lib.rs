//! Tally - a single-line arithmetic expression evaluator
//!
//! # Overview
//!
//! Tally scans, parses and evaluates expressions built from non-negative
//! integer literals, the binary operators `+ - * / ^` and parentheses:
//!
//! - `^` binds tighter than `*` and `/`, which bind tighter than `+` and `-`
//! - `^` is right-associative, the others are left-associative
//! - results are `f64` with IEEE 754 semantics (`1/0` is `inf`)
//!
//! # Quick Start
//!
//! ```
//! use tally::{evaluate, ErrorKind};
//!
//! assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
//!
//! let err = evaluate("(1+2").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Syntactic);
//! assert_eq!(err.render_caret("(1+2"), "(1+2\n    ^ ')' expected");
//! ```
//!
//! # Stages
//!
//! The pipeline stages are exposed individually through [`scanner`], [`parser`]
//! and [`evaluator`]; parsed trees live in a `bumpalo` arena owned by the caller.

pub use tally_core::api::{
    EngineOptions, Error, ErrorKind, EvaluatorOptions, ParseOptions, evaluate, evaluate_with,
};
pub use tally_core::{diagnostics, evaluator, parser, scanner};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
