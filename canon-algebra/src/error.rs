//! The errors the engine can reject an expression with.
//!
//! The pipeline's assembler checks equation structure before anything reaches the engine, so on
//! pipeline input these are unreachable; they exist because the engine is also usable as a
//! standalone library over arbitrary engine-syntax strings.

use ariadne::Fmt;
use canon_attrs::ErrorKind;
use canon_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;
use crate::MAX_EXPONENT;

pub use canon_error::Error;

/// The end of the expression was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "term".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the expression was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("could not understand the remaining {} here", "input".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!(
        "expected one of: {}",
        expected.iter().map(|kind| format!("{:?}", kind)).collect::<Vec<_>>().join(", "),
    )],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character that is not part of the engine syntax at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", c),
    labels = ["here"],
)]
pub struct UnexpectedCharacter {
    /// The character that was found.
    pub c: char,
}

/// A bracket was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed bracket",
    labels = ["this bracket is not closed"],
    help = "add the matching closing bracket somewhere after this",
)]
pub struct UnclosedBracket;

/// There was no expression inside a pair of brackets.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside brackets",
    labels = ["add an expression here"],
)]
pub struct EmptyBrackets;

/// The exponent of a power was not a plain integer literal.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent is not a plain integer",
    labels = ["write this exponent as a plain integer"],
)]
pub struct NonIntegerExponent;

/// An exponent that does not fit the supported range.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent out of range",
    labels = ["this exponent is too large"],
    help = format!("exponents up to {} are supported", MAX_EXPONENT),
)]
pub struct ExponentOutOfRange;
