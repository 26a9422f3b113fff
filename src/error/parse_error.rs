use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Parsing stops at the first error; there is no recovery.
pub enum ParseError {
    /// Found a token the grammar does not allow at this position.
    UnexpectedToken {
        /// The offending token.
        found:    Token,
        /// Label of the construct that was expected instead.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A line's indentation is odd or deeper than its block allows.
    UnexpectedIndent {
        /// Number of leading spaces on the line.
        spaces: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A header line (`if ...:`, `elif ...:`, `else:`, `Name ->`) was not
    /// followed by an indented body.
    ExpectedBlock {
        /// The source line where the body should start.
        line: usize,
    },
    /// A numeric literal does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Expressions or blocks are nested deeper than
    /// [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING) levels.
    NestingTooDeep {
        /// The source line where the limit was reached.
        line: usize,
    },
    /// The operand stack did not hold the expected nodes.
    StackMismatch {
        /// Number of nodes found on the stack.
        depth: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found,
                                    expected,
                                    line, } => {
                write!(f, "Error on line {line}: Unexpected {found}, expected {expected}.")
            },

            Self::UnexpectedIndent { spaces, line } => {
                write!(f, "Error on line {line}: Unexpected indent ({spaces}).")
            },

            Self::ExpectedBlock { line } => {
                write!(f, "Error on line {line}: Expected an indented block.")
            },

            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },

            Self::NestingTooDeep { line } => {
                write!(f, "Error on line {line}: Code is nested too deeply.")
            },

            Self::StackMismatch { depth } => {
                write!(f, "Syntax error: expected a single program node, found {depth}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
