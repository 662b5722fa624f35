use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// The tokenizer runs over the sanitized equation, so explicit multiplication, whitespace and
/// `**` never reach it; everything that is not a structural symbol is part of a term.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("=")]
    Equals,

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

    /// A maximal run of non-structural characters: one coefficient / variable / exponent
    /// combination, to be parsed by the term transformer.
    #[regex(r"[^+\-=()\[\]{}]+")]
    Term,
}

impl TokenKind {
    /// Returns true if the token is a structural symbol, carried verbatim through the pipeline.
    pub fn is_structural(self) -> bool {
        !matches!(self, Self::Term)
    }

    /// Returns true if the token is a `+` or `-` sign.
    pub fn is_sign(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns true if the token opens a bracket group of any kind.
    pub fn is_open_bracket(self) -> bool {
        matches!(self, Self::OpenParen | Self::OpenBracket | Self::OpenBrace)
    }

    /// Returns true if the token closes a bracket group of any kind.
    pub fn is_close_bracket(self) -> bool {
        matches!(self, Self::CloseParen | Self::CloseBracket | Self::CloseBrace)
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
    /// The region of the sanitized equation that this token came from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The text of the token.
    pub lexeme: &'source str,
}
