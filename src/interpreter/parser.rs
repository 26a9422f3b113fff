/// Parser state and the program entry point.
///
/// Holds the token lookahead buffer, the operand stack and the indentation
/// level, and exposes `parse`.
pub mod core;

/// Expression parsing.
///
/// Implements the precedence levels for `and`/`or`, equality, sums and
/// products.
pub mod binary;

/// Block parsing.
///
/// Groups indented lines into blocks and parses the block-form constructs:
/// `if`/`unless`/`elif`/`else` branches and `->` function definitions.
pub mod block;

/// Primary values.
///
/// Parses literals, parenthesized expressions, identifiers and calls.
pub mod primary;

/// Statement parsing.
///
/// Parses assignments, `print`/`return` statements and the inline
/// `statement if condition` form.
pub mod statement;
