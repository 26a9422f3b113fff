use std::io::Write;

use crate::{
    ast::{Arm, Node},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a branch.
    ///
    /// Conditions are evaluated in declaration order. The first arm whose
    /// condition matches (truthy, or falsy for `unless`) has its body
    /// evaluated and no further conditions are tried. When no arm matches the
    /// default body is evaluated if present, otherwise the branch yields
    /// `nil`.
    ///
    /// # Parameters
    /// - `arms`: The conditional arms.
    /// - `default`: The `else` body, if any.
    pub(crate) fn eval_branch(&mut self, arms: &[Arm], default: Option<&Node>) -> EvalResult<Value> {
        for arm in arms {
            let condition = self.eval(&arm.condition)?;
            if condition.is_truthy() != arm.inverted {
                return self.eval(&arm.body);
            }
        }

        default.map_or(Ok(Value::Nil), |body| self.eval(body))
    }
}
