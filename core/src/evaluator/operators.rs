//! Binary operator implementations.

use crate::parser::BinaryOp;

/// Evaluate a binary operation on two floats.
///
/// Follows IEEE 754 semantics (produces inf/nan rather than failing).
pub(super) fn eval_binary(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right, // Division by zero produces inf
        BinaryOp::Pow => left.powf(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let result = eval_binary(BinaryOp::Add, 3.14, 2.0);
        assert!((result - 5.14).abs() < 0.0001);
    }

    #[test]
    fn test_sub_goes_negative() {
        assert_eq!(eval_binary(BinaryOp::Sub, 3.0, 10.0), -7.0);
    }

    #[test]
    fn test_mul() {
        assert_eq!(eval_binary(BinaryOp::Mul, 6.0, 7.0), 42.0);
    }

    #[test]
    fn test_div() {
        assert_eq!(eval_binary(BinaryOp::Div, 10.0, 3.0), 10.0 / 3.0);
    }

    #[test]
    fn test_div_by_zero() {
        let result = eval_binary(BinaryOp::Div, 10.0, 0.0);
        assert!(result.is_infinite() && result.is_sign_positive());
    }

    #[test]
    fn test_zero_div_zero_is_nan() {
        assert!(eval_binary(BinaryOp::Div, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_pow() {
        assert_eq!(eval_binary(BinaryOp::Pow, 2.0, 3.0), 8.0);
        assert_eq!(eval_binary(BinaryOp::Pow, 5.0, 0.0), 1.0);
        assert_eq!(eval_binary(BinaryOp::Pow, 2.0, -1.0), 0.5);
    }

    #[test]
    fn test_pow_negative_base_fractional_exponent() {
        assert!(eval_binary(BinaryOp::Pow, -8.0, 1.0 / 3.0).is_nan());
    }
}
