use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an integer arithmetic operation.
///
/// Both operands must be integers. Results are checked: overflow and
/// division by zero are errors. Division truncates toward zero.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use gander::{
///     Value,
///     ast::BinaryOperator,
///     interpreter::evaluator::binary::scalar::eval_scalar_op,
/// };
///
/// let result = eval_scalar_op(BinaryOperator::Div, Value::Integer(-7), Value::Integer(2), 1);
/// assert_eq!(result.unwrap(), Value::Integer(-3));
///
/// assert!(eval_scalar_op(BinaryOperator::Add, Value::Bool(true), Value::Integer(1), 1).is_err());
/// ```
pub fn eval_scalar_op(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
        return Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                              left.type_name(),
                                                              right.type_name()),
                                             line });
    };

    let result = match op {
        Add => a.checked_add(b),
        Sub => a.checked_sub(b),
        Mul => a.checked_mul(b),
        Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a.checked_div(b)
        },
        _ => unreachable!(),
    };

    result.map(Value::Integer)
          .ok_or(RuntimeError::Overflow { line })
}
