use std::collections::VecDeque;

use log::trace;

use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting of expressions and blocks.
///
/// Every parenthesis, chained operand and nested body counts as one level,
/// which bounds the depth of the tree the parser can build.
pub const MAX_NESTING: usize = 256;

/// Parses a complete program.
///
/// A fresh lexer is created over `source`; tokens are pulled from it only as
/// the parser needs them. The result is the root [`Node::Block`].
///
/// # Errors
/// Returns the first [`ParseError`] encountered. There is no recovery.
///
/// # Example
/// ```
/// use gander::{ast::Node, parse};
///
/// let root = parse("x = 5\nx + 1\n").unwrap();
///
/// assert!(matches!(root, Node::Block { ref children, .. } if children.len() == 2));
/// assert!(parse("x = (1\n").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    Parser::new(Lexer::new(source)).parse_program()
}

/// Recursive-descent parser that assembles nodes on an operand stack.
///
/// Each grammar rule pushes the node it recognized; composite rules pop
/// their operands and push the combined node. Blocks remember the stack depth
/// at entry so they only collect their own statements.
pub struct Parser<I>
    where I: Iterator<Item = Token>
{
    tokens:                 I,
    pending:                VecDeque<Token>,
    pub(crate) stack:       Vec<Node>,
    pub(crate) indentation: usize,
    pub(crate) nesting:     usize,
    last_line:              usize,
}

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    pub fn new(tokens: I) -> Self {
        Self { tokens,
               pending: VecDeque::new(),
               stack: Vec::new(),
               indentation: 0,
               nesting: 0,
               last_line: 1 }
    }

    /// Parses the whole token stream into the root block.
    ///
    /// Succeeds only if exactly one node remains on the stack and the next
    /// token is the end of input.
    pub fn parse_program(mut self) -> ParseResult<Node> {
        self.block()?;

        if self.stack.len() != 1 {
            return Err(ParseError::StackMismatch { depth: self.stack.len() });
        }
        if self.peek_kind(0) != TokenKind::EndOfInput {
            return Err(self.unexpected("EOF"));
        }

        self.pop()
    }

    /// Pulls one more token from the source into the lookahead buffer.
    ///
    /// An exhausted source keeps yielding end-of-input tokens.
    fn expand(&mut self) {
        let token = self.tokens
                        .next()
                        .unwrap_or_else(|| Token::new(TokenKind::EndOfInput, "", self.last_line));
        trace!("got token {token} on line {}", token.line);

        self.last_line = token.line;
        self.pending.push_back(token);
    }

    /// Returns the token `i` positions ahead without consuming anything.
    pub(crate) fn peek(&mut self, i: usize) -> &Token {
        while self.pending.len() <= i {
            self.expand();
        }
        &self.pending[i]
    }

    pub(crate) fn peek_kind(&mut self, i: usize) -> TokenKind {
        self.peek(i).kind
    }

    /// Consumes and returns the next token.
    pub(crate) fn shift(&mut self) -> Token {
        if self.pending.is_empty() {
            self.expand();
        }
        self.pending
            .pop_front()
            .unwrap_or_else(|| Token::new(TokenKind::EndOfInput, "", self.last_line))
    }

    /// Consumes the next token if it has the given kind.
    pub(crate) fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        self.accept_one_of(&[kind])
    }

    /// Consumes the next token if it has any of the given kinds.
    pub(crate) fn accept_one_of(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.contains(&self.peek_kind(0)) {
            Some(self.shift())
        } else {
            None
        }
    }

    /// Consumes the next token, which must have the given kind.
    ///
    /// `expected` labels the missing construct in the error message.
    pub(crate) fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<Token> {
        self.accept(kind).ok_or_else(|| self.unexpected(expected))
    }

    /// Builds an error for the next token, which is left unconsumed.
    pub(crate) fn unexpected(&mut self, expected: &'static str) -> ParseError {
        let found = self.peek(0).clone();
        ParseError::UnexpectedToken { line: found.line,
                                      found,
                                      expected }
    }

    /// Indentation depth of the indent token `i` positions ahead, in levels
    /// of two spaces. `None` for an odd number of spaces.
    pub(crate) fn indent_depth(&mut self, i: usize) -> Option<usize> {
        let width = self.peek(i).width();
        (width % 2 == 0).then_some(width / 2)
    }

    /// Enters one more level of nesting.
    ///
    /// Callers restore the previous level once the nested construct is
    /// complete.
    pub(crate) fn descend(&mut self) -> ParseResult<()> {
        if self.nesting >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { line: self.peek(0).line });
        }
        self.nesting += 1;
        Ok(())
    }

    pub(crate) fn push(&mut self, node: Node) {
        self.stack.push(node);
    }

    pub(crate) fn pop(&mut self) -> ParseResult<Node> {
        self.stack
            .pop()
            .ok_or(ParseError::StackMismatch { depth: 0 })
    }

    /// Pops the two most recent nodes, returning them in source order.
    pub(crate) fn pop_two(&mut self) -> ParseResult<(Node, Node)> {
        let second = self.pop()?;
        let first = self.pop()?;
        Ok((first, second))
    }

    /// Replaces the two most recent nodes with a binary expression.
    pub(crate) fn push_binary(&mut self, op: BinaryOperator, line: usize) -> ParseResult<()> {
        let (left, right) = self.pop_two()?;
        self.push(Node::BinaryExpr { op,
                                     left: Box::new(left),
                                     right: Box::new(right),
                                     line });
        Ok(())
    }
}
