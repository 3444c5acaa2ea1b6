use pretty_assertions::assert_eq;
use tally::{EngineOptions, ErrorKind, evaluate, evaluate_with};

mod cases;

test_case! {
    name: caret_unknown_token,
    input: { "2+a" },
    error: { "2+a\n  ^ unknown token" },
}

test_case! {
    name: caret_unclosed_paren,
    input: { "(1+2" },
    error: { "(1+2\n    ^ ')' expected" },
}

test_case! {
    name: caret_not_a_number,
    input: { "1+)" },
    error: { "1+)\n  ^ not a number" },
}

test_case! {
    name: caret_trailing_input,
    input: { "(1)(2)" },
    error: { "(1)(2)\n   ^ end of input expected" },
}

#[test]
fn test_all_error_cases() {
    for case in cases::ERROR_CASES.iter() {
        let err = evaluate(case.input).expect_err(case.name);
        assert_eq!(err.kind, case.kind, "Test case '{}' failed", case.name);
        assert_eq!(err.message, case.message, "Test case '{}' failed", case.name);
        assert_eq!(err.offset, Some(case.offset), "Test case '{}' failed", case.name);
    }
}

#[test]
fn test_depth_limit_is_configurable() {
    let options = EngineOptions::with_max_depth(4);
    assert_eq!(evaluate_with("((1+2))", &options).unwrap(), 3.0);

    let err = evaluate_with("(((((1)))))", &options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ResourceExceeded);
    assert_eq!(err.offset, Some(4));
}

#[test]
fn test_rich_rendering_names_the_code() {
    let source = "1 + 2 $";
    let err = evaluate(source).unwrap_err();
    let output = tally::render_error_to_string_no_color(&err, source);
    assert!(output.contains("L001"), "{output}");
    assert!(output.contains("unknown token"), "{output}");
}
