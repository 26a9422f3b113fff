use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Evaluates a logical operation on truthiness.
///
/// `and` yields the right operand when both are truthy; `or` yields the first
/// truthy operand. Otherwise both yield `false`.
///
/// # Example
/// ```
/// use gander::{
///     Value,
///     ast::BinaryOperator,
///     interpreter::evaluator::binary::logic::eval_logic,
/// };
///
/// assert_eq!(eval_logic(BinaryOperator::Or, Value::Nil, Value::Integer(3)),
///            Value::Integer(3));
/// ```
#[must_use]
pub const fn eval_logic(op: BinaryOperator, left: Value, right: Value) -> Value {
    match op {
        BinaryOperator::And => left.and(right),
        BinaryOperator::Or => left.or(right),
        _ => unreachable!(),
    }
}
