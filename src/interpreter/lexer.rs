use std::fmt;

use logos::Logos;

/// The kind of a [`Token`].
///
/// This is a closed set: every token the lexer produces has exactly one of
/// these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character the lexer does not recognize.
    Error,
    /// `nil`
    Nil,
    /// `true`
    True,
    /// `false`
    False,
    /// Integer literal, such as `42`.
    Number,
    /// Identifier starting with a lower-case letter or `_`, such as `x`.
    Identifier,
    /// Identifier starting with an upper-case letter, reserved for function
    /// names, such as `Square`.
    MethodIdentifier,
    /// `=`
    Assign,
    /// `and`
    And,
    /// `or`
    Or,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `==`
    Compare,
    /// `!=`
    NotCompare,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `if`
    If,
    /// `unless`
    Unless,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `:`
    Then,
    /// `,`
    Comma,
    /// `->`
    Def,
    /// `return`
    Return,
    /// `print`
    Print,
    /// Leading spaces of a line; the text length is the indentation width.
    Indent,
    /// `\n`
    EndOfLine,
    /// End of the source text. Produced exactly once, last.
    EndOfInput,
}

/// A classified unit of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The exact source text the token covers.
    pub text: String,
    /// 1-based source line the token starts on.
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }

    /// Number of spaces covered by an indentation token.
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "EOF"),
            TokenKind::EndOfLine => write!(f, "EOL"),
            TokenKind::Indent => write!(f, "INDENT({})", self.width()),
            _ => write!(f, "`{}`", self.text),
        }
    }
}

/// Raw lexemes recognized inside a line.
///
/// Words are classified afterwards so keywords and the two identifier kinds
/// come from a single table lookup.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
#[logos(skip r" +")]
enum Lexeme {
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Word,
    #[token("==")]
    Compare,
    #[token("!=")]
    NotCompare,
    #[token("->")]
    Def,
    #[token("=")]
    Assign,
    #[token("+")]
    Add,
    #[token("-")]
    Subtract,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Then,
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Where the lexer is within the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the start of a line, before any indentation has been read.
    Indent,
    /// Inside a line.
    Code,
    /// End of input has been emitted.
    Done,
}

/// Lazily converts source text into tokens.
///
/// The lexer is an iterator: each call to `next` produces one token. Every
/// line starts with an [`TokenKind::Indent`] token (possibly zero spaces wide)
/// and the sequence ends with exactly one [`TokenKind::EndOfInput`]. A lexer
/// cannot be rewound; lex the text again with a new lexer instead.
///
/// # Example
/// ```
/// use gander::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("x = 1\n").map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Indent,
///                 TokenKind::Identifier,
///                 TokenKind::Assign,
///                 TokenKind::Number,
///                 TokenKind::EndOfLine,
///                 TokenKind::Indent,
///                 TokenKind::EndOfInput]);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Lexeme>,
    state: State,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Lexeme::lexer(source),
               state: State::Indent, }
    }

    fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Consumes the run of spaces at the start of a line.
    fn lex_indent(&mut self) -> Token {
        let remainder = self.inner.remainder();
        let width = remainder.bytes().take_while(|b| *b == b' ').count();
        let token = Token::new(TokenKind::Indent, &remainder[..width], self.line());

        self.inner.bump(width);
        self.state = State::Code;
        token
    }

    fn lex_code(&mut self) -> Token {
        let Some(lexeme) = self.inner.next() else {
            self.state = State::Done;
            return Token::new(TokenKind::EndOfInput, "", self.line());
        };
        let text = self.inner.slice();

        let kind = match lexeme {
            Ok(Lexeme::NewLine) => {
                self.state = State::Indent;
                // The newline callback has already moved on to the next line.
                return Token::new(TokenKind::EndOfLine, text, self.line() - 1);
            },
            Ok(Lexeme::Word) => classify_word(text),
            Ok(Lexeme::Number) => TokenKind::Number,
            Ok(Lexeme::Compare) => TokenKind::Compare,
            Ok(Lexeme::NotCompare) => TokenKind::NotCompare,
            Ok(Lexeme::Def) => TokenKind::Def,
            Ok(Lexeme::Assign) => TokenKind::Assign,
            Ok(Lexeme::Add) => TokenKind::Add,
            Ok(Lexeme::Subtract) => TokenKind::Subtract,
            Ok(Lexeme::Multiply) => TokenKind::Multiply,
            Ok(Lexeme::Divide) => TokenKind::Divide,
            Ok(Lexeme::LeftParen) => TokenKind::LeftParen,
            Ok(Lexeme::RightParen) => TokenKind::RightParen,
            Ok(Lexeme::Comma) => TokenKind::Comma,
            Ok(Lexeme::Then) => TokenKind::Then,
            Err(()) => TokenKind::Error,
        };

        Token::new(kind, text, self.line())
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.state {
            State::Indent => Some(self.lex_indent()),
            State::Code => Some(self.lex_code()),
            State::Done => None,
        }
    }
}

/// Maps a keyword to its token kind.
///
/// Returns `None` for words that are not keywords.
///
/// # Example
/// ```
/// use gander::interpreter::lexer::{TokenKind, keyword};
///
/// assert_eq!(keyword("unless"), Some(TokenKind::Unless));
/// assert_eq!(keyword("Unless"), None);
/// ```
#[must_use]
pub fn keyword(word: &str) -> Option<TokenKind> {
    match word {
        "nil" => Some(TokenKind::Nil),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "and" => Some(TokenKind::And),
        "or" => Some(TokenKind::Or),
        "if" => Some(TokenKind::If),
        "unless" => Some(TokenKind::Unless),
        "elif" => Some(TokenKind::Elif),
        "else" => Some(TokenKind::Else),
        "print" => Some(TokenKind::Print),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}

/// Classifies a word as a keyword, a method identifier (upper-case first
/// letter), or a plain identifier.
fn classify_word(word: &str) -> TokenKind {
    keyword(word).unwrap_or_else(|| {
                     if word.chars().next().is_some_and(char::is_uppercase) {
                         TokenKind::MethodIdentifier
                     } else {
                         TokenKind::Identifier
                     }
                 })
}
