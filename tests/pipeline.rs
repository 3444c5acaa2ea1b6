use bumpalo::Bump;
use pretty_assertions::assert_eq;
use tally::{
    ErrorKind,
    evaluator::{self, Evaluator},
    parser,
    scanner::{self, Symbol, Token},
};

#[test]
fn test_stages_compose() {
    let source = "(2+3)*4";
    let tokens = scanner::scan(source).unwrap();
    assert_eq!(tokens.len(), 8);
    assert_eq!(tokens[0], Token::operator(Symbol::LParen, 0));
    assert_eq!(tokens[7], Token::end_of_input(7));

    let arena = Bump::new();
    let expr = parser::parse_tokens(&arena, &tokens, Default::default()).unwrap();
    assert_eq!(expr.to_string(), "((2 + 3) * 4)");
    assert_eq!(evaluator::eval(expr), 20.0);
    assert_eq!(Evaluator::default().eval(expr).unwrap(), 20.0);
}

#[test]
fn test_parsed_expr_outlives_source_string() {
    let arena = Bump::new();
    let parsed = {
        let source = String::from("2^10");
        parser::parse(&arena, &source).unwrap()
    };
    assert_eq!(parsed.source, "2^10");
    assert_eq!(evaluator::eval(parsed.expr), 1024.0);
}

#[test]
fn test_scan_failure_returns_no_tokens() {
    let err = scanner::scan("1 + 2 + #").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lexical);
    assert_eq!(err.offset, Some(8));
}

#[test]
fn test_one_arena_many_expressions() {
    let arena = Bump::new();
    let values: Vec<f64> = ["1", "1+1", "2*2-1", "2^2"]
        .iter()
        .map(|source| evaluator::eval(parser::parse(&arena, source).unwrap().expr))
        .collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
}
