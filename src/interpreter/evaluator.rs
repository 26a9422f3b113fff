/// Binary operator evaluation logic.
///
/// Handles arithmetic, tag-sensitive equality, and the logical operators.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the node dispatcher, and blocks.
pub mod core;

/// Evaluation of branches.
///
/// Tries conditional arms in order and evaluates the first matching body.
pub mod branch;

/// Function evaluation.
///
/// Handles user function declarations, argument binding, and calls.
pub mod function;

/// Keyword statements.
///
/// Evaluates `print` and `return`.
pub mod keyword;
