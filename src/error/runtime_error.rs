#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Referencing an unbound variable is deliberately absent: it evaluates to
/// `nil`.
pub enum RuntimeError {
    /// An operator was applied to values of incompatible types.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never declared.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Function calls nested deeper than the interpreter allows.
    RecursionLimit {
        /// The maximum call depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing `print` output failed.
    Output {
        /// Details from the underlying writer.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{name}' takes {expected} argument(s) but {found} were supplied."),
            Self::RecursionLimit { limit, line } => write!(f,
                                                           "Error on line {line}: Function calls nested deeper than {limit} levels."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Could not write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
