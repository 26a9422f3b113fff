use crate::{
    ast::{Arm, FunctionDef, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// How a parsed line left the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnd {
    /// The line still needs its end-of-line token.
    Open,
    /// The line ended with a nested block, which already consumed it.
    Closed,
}

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses the lines of one block at the current indentation level.
    ///
    /// Every line starts with an indentation token. A line at the current
    /// level belongs to the block, a shallower line ends it (and is left for
    /// the enclosing block), and a deeper or odd indentation is an error.
    /// Blank lines are skipped. The block also ends at the end of input,
    /// which is left for the caller.
    ///
    /// Grammar: `block := ((control EOL) | EOL)+`
    ///
    /// Only nodes pushed during this call are collected, so nested blocks
    /// never take statements belonging to an enclosing block.
    pub(crate) fn block(&mut self) -> ParseResult<()> {
        let mark = self.stack.len();
        let line = self.peek(0).line;

        loop {
            match self.peek_kind(0) {
                TokenKind::EndOfInput => break,
                TokenKind::Indent => {},
                _ => return Err(self.unexpected("indentation")),
            }

            match self.peek_kind(1) {
                TokenKind::EndOfLine => {
                    self.shift();
                    self.shift();
                    continue;
                },
                TokenKind::EndOfInput => {
                    self.shift();
                    break;
                },
                _ => {},
            }

            match self.indent_depth(0) {
                Some(depth) if depth == self.indentation => {
                    self.shift();
                },
                Some(depth) if depth < self.indentation => break,
                _ => {
                    let indent = self.peek(0);
                    return Err(ParseError::UnexpectedIndent { spaces: indent.width(),
                                                              line:   indent.line, });
                },
            }

            if self.control()? == LineEnd::Open {
                self.end_of_line()?;
            }
        }

        let children = self.stack.split_off(mark);
        self.push(Node::Block { children, line });
        Ok(())
    }

    /// Parses a block one level deeper than the current one.
    ///
    /// The body must contain at least one statement, and counts as one level
    /// of nesting.
    fn nested_block(&mut self) -> ParseResult<()> {
        let line = self.peek(0).line;

        self.descend()?;
        self.indentation += 1;
        let result = self.block();
        self.indentation -= 1;
        self.nesting -= 1;
        result?;

        if matches!(self.stack.last(), Some(Node::Block { children, .. }) if children.is_empty()) {
            return Err(ParseError::ExpectedBlock { line });
        }
        Ok(())
    }

    /// Parses a block-form branch or falls through to a definition.
    ///
    /// Grammar:
    /// ```text
    /// control := ("if" | "unless") expression ":" EOL block
    ///            ("elif" expression ":" EOL block)*
    ///            ("else" ":" EOL block)?
    ///          | definition
    /// ```
    fn control(&mut self) -> ParseResult<LineEnd> {
        let Some(keyword) = self.accept_one_of(&[TokenKind::If, TokenKind::Unless]) else {
            return self.definition();
        };

        let mut arms = vec![self.arm(keyword.kind == TokenKind::Unless)?];

        while self.continues_with(TokenKind::Elif) {
            self.shift();
            self.shift();
            arms.push(self.arm(false)?);
        }

        let default = if self.continues_with(TokenKind::Else) {
            self.shift();
            self.shift();
            self.expect(TokenKind::Then, "':'")?;
            self.expect(TokenKind::EndOfLine, "EOL")?;
            self.nested_block()?;
            Some(Box::new(self.pop()?))
        } else {
            None
        };

        self.push(Node::Branch { arms,
                                 default,
                                 line: keyword.line });
        Ok(LineEnd::Closed)
    }

    /// Parses `condition ":" EOL block` for one branch arm.
    fn arm(&mut self, inverted: bool) -> ParseResult<Arm> {
        self.expression()?;
        self.expect(TokenKind::Then, "':'")?;
        self.expect(TokenKind::EndOfLine, "EOL")?;
        self.nested_block()?;

        let (condition, body) = self.pop_two()?;
        Ok(Arm { condition,
                 body,
                 inverted })
    }

    /// Whether the next line sits at the current level and starts with
    /// `kind`, continuing the construct whose body just ended.
    fn continues_with(&mut self, kind: TokenKind) -> bool {
        self.peek_kind(0) == TokenKind::Indent
        && self.indent_depth(0) == Some(self.indentation)
        && self.peek_kind(1) == kind
    }

    /// Parses a function definition or falls through to a statement.
    ///
    /// Grammar:
    /// ```text
    /// definition := METHOD_ID ("(" ID ("," ID)* ")")? "->" EOL block
    ///             | inline_conditional
    /// ```
    fn definition(&mut self) -> ParseResult<LineEnd> {
        if self.peek_kind(0) != TokenKind::MethodIdentifier || !self.is_definition_header() {
            self.inline_conditional()?;
            return Ok(LineEnd::Open);
        }

        let name = self.shift();
        let mut params = Vec::new();

        if self.accept(TokenKind::LeftParen).is_some() {
            loop {
                params.push(self.expect(TokenKind::Identifier, "parameter name")?.text);
                if self.accept(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.expect(TokenKind::RightParen, "')'")?;
        }

        self.expect(TokenKind::Def, "'->'")?;
        self.expect(TokenKind::EndOfLine, "EOL")?;
        self.nested_block()?;

        let body = self.pop()?;
        self.push(Node::FunctionDef(FunctionDef { name: name.text,
                                                  params,
                                                  body: Box::new(body),
                                                  line: name.line }));
        Ok(LineEnd::Closed)
    }

    /// Looks ahead past a method identifier for `->`, optionally preceded by
    /// a parameter list. Anything else is a call.
    fn is_definition_header(&mut self) -> bool {
        match self.peek_kind(1) {
            TokenKind::Def => true,
            TokenKind::LeftParen => {
                let mut i = 2;
                loop {
                    if self.peek_kind(i) != TokenKind::Identifier {
                        return false;
                    }
                    match self.peek_kind(i + 1) {
                        TokenKind::Comma => i += 2,
                        TokenKind::RightParen => return self.peek_kind(i + 2) == TokenKind::Def,
                        _ => return false,
                    }
                }
            },
            _ => false,
        }
    }

    /// Consumes the end-of-line token that terminates a statement.
    ///
    /// The end of input also terminates a statement but is not consumed.
    fn end_of_line(&mut self) -> ParseResult<()> {
        match self.peek_kind(0) {
            TokenKind::EndOfLine => {
                self.shift();
                Ok(())
            },
            TokenKind::EndOfInput => Ok(()),
            _ => Err(self.unexpected("EOL")),
        }
    }
}
