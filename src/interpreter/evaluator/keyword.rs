use std::io::Write;

use crate::{
    ast::{Keyword, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a `print` or `return` statement.
    ///
    /// Both yield the value of their operand. `print` also writes the value
    /// and a newline to the context's output before yielding. `return` does
    /// not leave the enclosing block or function.
    pub(crate) fn eval_keyword(&mut self, keyword: Keyword, expr: &Node, line: usize) -> EvalResult<Value> {
        let value = self.eval(expr)?;

        if keyword == Keyword::Print {
            writeln!(self.output_mut(), "{value}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                                       line })?;
        }

        Ok(value)
    }
}
