use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
};

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses a primary value.
    ///
    /// Grammar:
    /// ```text
    /// value := "(" expression ")" | "nil" | "true" | "false" | NUMBER | id
    /// id    := (ID | METHOD_ID) ("(" (expression ("," expression)*)? ")")?
    /// ```
    ///
    /// A method identifier is always a call, with no arguments when no
    /// parenthesis follows it.
    pub(crate) fn value(&mut self) -> ParseResult<()> {
        if !matches!(self.peek_kind(0),
                     TokenKind::LeftParen
                     | TokenKind::Nil
                     | TokenKind::True
                     | TokenKind::False
                     | TokenKind::Number
                     | TokenKind::Identifier
                     | TokenKind::MethodIdentifier)
        {
            return Err(self.unexpected("value"));
        }

        let token = self.shift();
        match token.kind {
            TokenKind::LeftParen => {
                self.descend()?;
                self.expression()?;
                self.expect(TokenKind::RightParen, "')'")?;
                self.nesting -= 1;
            },
            TokenKind::Nil => self.push_literal(Value::Nil, token.line),
            TokenKind::True => self.push_literal(Value::Bool(true), token.line),
            TokenKind::False => self.push_literal(Value::Bool(false), token.line),
            TokenKind::Number => {
                let n = token.text
                             .parse::<i64>()
                             .map_err(|_| ParseError::LiteralTooLarge { literal: token.text.clone(),
                                                                        line:    token.line, })?;
                self.push_literal(Value::Integer(n), token.line);
            },
            TokenKind::Identifier if self.peek_kind(0) == TokenKind::LeftParen => self.call(token)?,
            TokenKind::Identifier => self.push(Node::Identifier { name: token.text,
                                                                  line: token.line, }),
            _ => self.call(token)?,
        }

        Ok(())
    }

    /// Parses the optional argument list of a call to `name`.
    fn call(&mut self, name: Token) -> ParseResult<()> {
        let mark = self.stack.len();
        self.descend()?;

        if self.accept(TokenKind::LeftParen).is_some() && self.accept(TokenKind::RightParen).is_none() {
            loop {
                self.expression()?;
                if self.accept(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.expect(TokenKind::RightParen, "')'")?;
        }

        self.nesting -= 1;
        let arguments = self.stack.split_off(mark);
        self.push(Node::Call { name: name.text,
                               arguments,
                               line: name.line });
        Ok(())
    }

    fn push_literal(&mut self, value: Value, line: usize) {
        self.push(Node::Literal { value, line });
    }
}
