use std::{io::Write, rc::Rc};

use log::trace;

use crate::{
    ast::{FunctionDef, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, MAX_CALL_DEPTH},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Declares a user function, replacing any earlier function of the same
    /// name. A declaration evaluates to `nil`.
    pub(crate) fn define_function(&mut self, def: &FunctionDef) -> Value {
        self.functions.insert(def.name.clone(), Rc::new(def.clone()));
        Value::Nil
    }

    /// Executes a user-defined function.
    ///
    /// Arguments are evaluated left to right and bound to the parameter names
    /// in the session namespace for the duration of the call. The previous
    /// bindings of those names are restored afterwards, even when the body
    /// fails; assignments to other names persist. The call yields the value
    /// of the body's last statement.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - Calls nested deeper than [`MAX_CALL_DEPTH`].
    pub(crate) fn call_function(&mut self,
                                name: &str,
                                arguments: &[Node],
                                line: usize)
                                -> EvalResult<Value> {
        let function =
            self.functions
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                               line })?;

        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: function.params.len(),
                                                             found: arguments.len(),
                                                             line });
        }
        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { limit: MAX_CALL_DEPTH,
                                                      line });
        }

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        trace!("calling {name} with {values:?}");

        let saved = function.params
                            .iter()
                            .zip(values)
                            .map(|(param, value)| (param.as_str(), self.namespace.set(param.as_str(), value)))
                            .collect::<Vec<_>>();

        self.call_depth += 1;
        let result = self.eval(&function.body);
        self.call_depth -= 1;

        for (param, previous) in saved.into_iter().rev() {
            match previous {
                Some(value) => {
                    self.namespace.set(param, value);
                },
                None => {
                    self.namespace.remove(param);
                },
            }
        }

        result
    }
}
