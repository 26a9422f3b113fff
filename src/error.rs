/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a tree:
/// unexpected tokens, bad indentation, oversized literals and operand stack
/// mismatches.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches, division by zero, or calls to unknown functions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while running a program.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source could not be parsed; nothing was evaluated.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation stopped at a failing statement.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
