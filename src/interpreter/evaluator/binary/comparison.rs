use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Evaluates `==` or `!=`.
///
/// Values are equal only when both their types and payloads match, so `nil`,
/// `false` and `0` are all distinct.
#[must_use]
pub fn eval_comparison(op: BinaryOperator, left: Value, right: Value) -> Value {
    match op {
        BinaryOperator::Equal => left.equals(right),
        BinaryOperator::NotEqual => left.not_equals(right),
        _ => unreachable!(),
    }
}
