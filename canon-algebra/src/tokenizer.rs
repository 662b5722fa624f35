//! Tokenization of engine-syntax expressions.

use logos::{Lexer, Logos};
use std::ops::Range;

use crate::error::{self, Error};

/// The different kinds of tokens that can appear in an engine-syntax expression.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("**")]
    Pow,

    #[token("*")]
    Mul,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    /// A number in any accepted format, scientific notation included.
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Number,

    /// A one-letter variable.
    #[regex(r"[a-z]")]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token can begin a primary expression. Two adjacent primaries
    /// multiply implicitly.
    pub fn starts_primary(self) -> bool {
        matches!(
            self,
            Self::Number
                | Self::Symbol
                | Self::OpenParen
                | Self::OpenBracket
                | Self::OpenBrace
        )
    }

    /// Returns true if the token opens a bracket group of any kind.
    pub fn is_open_bracket(self) -> bool {
        matches!(self, Self::OpenParen | Self::OpenBracket | Self::OpenBrace)
    }

    /// Returns true if this closing bracket matches the given opening bracket.
    pub fn closes(self, open: Self) -> bool {
        matches!(
            (open, self),
            (Self::OpenParen, Self::CloseParen)
                | (Self::OpenBracket, Self::CloseBracket)
                | (Self::OpenBrace, Self::CloseBrace)
        )
    }
}

/// A token produced by the tokenizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'source> {
    /// The region of the expression that this token came from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The text of the token.
    pub lexeme: &'source str,
}

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens of the expression, whitespace dropped,
/// or fails on the first character that is not engine syntax.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(TokenKind::Whitespace) => continue,
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => {
                let c = lexer.slice().chars().next().unwrap_or_default();
                return Err(Error::new(
                    vec![lexer.span()],
                    error::UnexpectedCharacter { c },
                ));
            },
        }
    }

    Ok(tokens.into_boxed_slice())
}
