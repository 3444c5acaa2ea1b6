//! Tree-walking evaluator for tally expressions.
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use tally_core::{evaluator, parser};
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "2+3*4").unwrap();
//! assert_eq!(evaluator::eval(parsed.expr), 14.0);
//! ```

mod eval;
mod operators;


pub use eval::{Evaluator, eval};
