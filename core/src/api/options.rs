//! Configuration options for the tally pipeline.

/// Configuration options for parsing.
///
/// # Example
///
/// ```
/// use tally_core::api::ParseOptions;
///
/// let options = ParseOptions { max_depth: 64 };
/// assert_eq!(ParseOptions::default().max_depth, 500);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting through `(` and `^`.
    ///
    /// Bounds the recursion of both the parser and the evaluator. Flat
    /// `+ - * /` chains do not count against it.
    ///
    /// Default: 500
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 500 }
    }
}

/// Configuration options for evaluating trees that did not come from the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum evaluation stack depth, counted through right operands.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

/// Options for the whole pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub parse: ParseOptions,
    pub evaluator: EvaluatorOptions,
}

impl EngineOptions {
    /// Apply the same depth limit to parsing and evaluation.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            parse: ParseOptions { max_depth },
            evaluator: EvaluatorOptions { max_depth },
        }
    }
}
