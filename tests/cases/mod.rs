#![allow(dead_code, unused_macros)]

use once_cell::sync::Lazy;
use tally::ErrorKind;

/// Generates a test that evaluates `input` and checks the outcome.
///
/// ```ignore
/// test_case! {
///     name: addition,
///     input: { "1+2" },
///     value: { 3.0 },
/// }
///
/// test_case! {
///     name: unknown_character,
///     input: { "2+a" },
///     error: { "2+a\n  ^ unknown token" },
/// }
/// ```
#[macro_export]
macro_rules! test_case {
    (name: $name:ident, input: { $input:expr }, value: { $value:expr } $(,)?) => {
        #[test]
        fn $name() {
            let input: &str = $input;
            let expected: f64 = $value;
            match tally::evaluate(input) {
                Ok(actual) => pretty_assertions::assert_eq!(
                    actual.to_bits(),
                    expected.to_bits(),
                    "{input:?} evaluated to {actual}, expected {expected}"
                ),
                Err(e) => panic!("{input:?} failed:\n{}", e.render_caret(input)),
            }
        }
    };
    (name: $name:ident, input: { $input:expr }, error: { $caret:expr } $(,)?) => {
        #[test]
        fn $name() {
            let input: &str = $input;
            match tally::evaluate(input) {
                Ok(value) => panic!("{input:?} unexpectedly evaluated to {value}"),
                Err(e) => pretty_assertions::assert_eq!(e.render_caret(input), $caret),
            }
        }
    };
}

pub struct ErrorCase {
    pub name: &'static str,
    pub input: &'static str,
    pub kind: ErrorKind,
    pub message: &'static str,
    pub offset: usize,
}

pub static ERROR_CASES: Lazy<Vec<ErrorCase>> = Lazy::new(|| {
    vec![
        ErrorCase {
            name: "letter",
            input: "2+a",
            kind: ErrorKind::Lexical,
            message: "unknown token",
            offset: 2,
        },
        ErrorCase {
            name: "decimal_point",
            input: "3.5",
            kind: ErrorKind::Lexical,
            message: "unknown token",
            offset: 1,
        },
        ErrorCase {
            name: "unbalanced_open",
            input: "(1+2",
            kind: ErrorKind::Syntactic,
            message: "')' expected",
            offset: 4,
        },
        ErrorCase {
            name: "unbalanced_close",
            input: "1+2)",
            kind: ErrorKind::Syntactic,
            message: "end of input expected",
            offset: 3,
        },
        ErrorCase {
            name: "dangling_operator",
            input: "4 *",
            kind: ErrorKind::Syntactic,
            message: "not a number",
            offset: 3,
        },
        ErrorCase {
            name: "leading_operator",
            input: "* 4",
            kind: ErrorKind::Syntactic,
            message: "not a number",
            offset: 0,
        },
        ErrorCase {
            name: "blank",
            input: "   ",
            kind: ErrorKind::Syntactic,
            message: "not a number",
            offset: 3,
        },
    ]
});
