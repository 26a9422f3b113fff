use crate::{
    ast::{Arm, Keyword, Node},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses a statement with an optional trailing condition.
    ///
    /// `print x if x` becomes a branch with a single arm and no default;
    /// `unless` inverts the condition.
    ///
    /// Grammar: `inline_conditional := statement (("if" | "unless") expression)?`
    pub(crate) fn inline_conditional(&mut self) -> ParseResult<()> {
        let line = self.peek(0).line;
        self.statement()?;

        if let Some(keyword) = self.accept_one_of(&[TokenKind::If, TokenKind::Unless]) {
            self.expression()?;

            let (body, condition) = self.pop_two()?;
            self.push(Node::Branch { arms: vec![Arm { condition,
                                                      body,
                                                      inverted: keyword.kind == TokenKind::Unless }],
                                     default: None,
                                     line });
        }

        Ok(())
    }

    /// Parses a single statement.
    ///
    /// Grammar:
    /// ```text
    /// statement := ID "=" expression
    ///            | ("return" | "print") expression
    ///            | expression
    /// ```
    fn statement(&mut self) -> ParseResult<()> {
        if self.peek_kind(0) == TokenKind::Identifier && self.peek_kind(1) == TokenKind::Assign {
            let ident = self.shift();
            self.shift();

            self.expression()?;
            let expr = self.pop()?;
            self.push(Node::Assign { name: ident.text,
                                     expr: Box::new(expr),
                                     line: ident.line });
            return Ok(());
        }

        if let Some(token) = self.accept_one_of(&[TokenKind::Return, TokenKind::Print]) {
            let keyword = if token.kind == TokenKind::Print {
                Keyword::Print
            } else {
                Keyword::Return
            };

            self.expression()?;
            let expr = self.pop()?;
            self.push(Node::KeywordStmt { keyword,
                                          expr: Box::new(expr),
                                          line: token.line });
            return Ok(());
        }

        self.expression()
    }
}
