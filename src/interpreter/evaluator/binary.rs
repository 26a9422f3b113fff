/// Routes a binary operator to its handler.
pub mod core;

/// `and` and `or`.
pub mod logic;

/// `==` and `!=`.
pub mod comparison;

/// Integer arithmetic.
pub mod scalar;
