use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every token that is not a binary operator.
///
/// # Example
/// ```
/// use gander::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Add), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        TokenKind::Compare => Some(BinaryOperator::Equal),
        TokenKind::NotCompare => Some(BinaryOperator::NotEqual),
        TokenKind::Add => Some(BinaryOperator::Add),
        TokenKind::Subtract => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        _ => None,
    }
}

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing, at the lowest
    /// precedence level. Each chained operand on any level counts as one more
    /// level of nesting, so long chains are bounded like deep parentheses.
    ///
    /// Grammar: `expression := equality (("and" | "or") equality)*`
    pub(crate) fn expression(&mut self) -> ParseResult<()> {
        let depth = self.nesting;
        self.equality()?;

        while let Some((op, line)) = self.accept_operator(&[BinaryOperator::And, BinaryOperator::Or]) {
            self.descend()?;
            self.equality()?;
            self.push_binary(op, line)?;
        }

        self.nesting = depth;
        Ok(())
    }

    /// Parses equality comparisons.
    ///
    /// Grammar: `equality := sum (("==" | "!=") sum)*`
    fn equality(&mut self) -> ParseResult<()> {
        let depth = self.nesting;
        self.sum()?;

        while let Some((op, line)) =
            self.accept_operator(&[BinaryOperator::Equal, BinaryOperator::NotEqual])
        {
            self.descend()?;
            self.sum()?;
            self.push_binary(op, line)?;
        }

        self.nesting = depth;
        Ok(())
    }

    /// Parses addition and subtraction.
    ///
    /// Grammar: `sum := product (("+" | "-") product)*`
    fn sum(&mut self) -> ParseResult<()> {
        let depth = self.nesting;
        self.product()?;

        while let Some((op, line)) = self.accept_operator(&[BinaryOperator::Add, BinaryOperator::Sub]) {
            self.descend()?;
            self.product()?;
            self.push_binary(op, line)?;
        }

        self.nesting = depth;
        Ok(())
    }

    /// Parses multiplication and division.
    ///
    /// The right operand is a whole `sum`, not a single value, so
    /// `2 * 3 + 4` parses as `2 * (3 + 4)`.
    ///
    /// Grammar: `product := value (("*" | "/") sum)*`
    fn product(&mut self) -> ParseResult<()> {
        let depth = self.nesting;
        self.value()?;

        while let Some((op, line)) = self.accept_operator(&[BinaryOperator::Mul, BinaryOperator::Div]) {
            self.descend()?;
            self.sum()?;
            self.push_binary(op, line)?;
        }

        self.nesting = depth;
        Ok(())
    }

    /// Consumes the next token if it is one of the given operators.
    fn accept_operator(&mut self, ops: &[BinaryOperator]) -> Option<(BinaryOperator, usize)> {
        let op = token_to_binary_operator(self.peek_kind(0)).filter(|op| ops.contains(op))?;
        let token = self.shift();
        Some((op, token.line))
    }
}
