use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{comparison::eval_comparison, logic::eval_logic, scalar::eval_scalar_op},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two already evaluated values.
///
/// Logical operators and equality are defined for every pair of values.
/// Arithmetic is defined only for two integers; anything else is a type
/// error.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use gander::{
///     Value,
///     ast::BinaryOperator,
///     interpreter::evaluator::binary::core::eval_binary,
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4), 1);
/// assert_eq!(sum.unwrap(), Value::Integer(7));
///
/// let equal = eval_binary(BinaryOperator::Equal, Value::Integer(1), Value::Bool(true), 1);
/// assert_eq!(equal.unwrap(), Value::Bool(false));
/// ```
pub fn eval_binary(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, And, Div, Equal, Mul, NotEqual, Or, Sub};

    match op {
        And | Or => Ok(eval_logic(op, left, right)),
        Equal | NotEqual => Ok(eval_comparison(op, left, right)),
        Add | Sub | Mul | Div => eval_scalar_op(op, left, right, line),
    }
}
