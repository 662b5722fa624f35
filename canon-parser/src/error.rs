//! The errors an equation can fail with, one kind per failure class.
//!
//! Every kind is a struct deriving [`ErrorKind`], so each failure renders as a report pointing
//! at the offending region of the input.

use ariadne::Fmt;
use canon_attrs::ErrorKind;
use canon_error::{ErrorKind, EXPR};
use crate::VAR_NAMES;
use std::fmt;

pub use canon_error::Error;

/// No input was supplied at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "must provide an equation",
    labels = ["there is nothing to canonicalize here"],
)]
pub struct NoEquation;

/// The ways an equation can be structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationDefect {
    /// A character outside the accepted set appeared somewhere in the input.
    BadCharacter(char),

    /// The equation contains no `=` sign, so there is nothing to split on.
    MissingEquals,

    /// The equation contains two or more `=` signs.
    MoreThanOneEquals,

    /// A `++` or `--` sequence.
    RepeatedSign(char),

    /// A `+-` or `-+` sequence.
    SignCombination,

    /// A `^^` or `***` sequence, which is not an operation at all.
    UnknownOperation(&'static str),

    /// An opening bracket that is never closed.
    UnclosedBracket(char),

    /// A closing bracket that was never opened.
    UnexpectedCloseBracket(char),

    /// A closing bracket of a different kind than the bracket it closes.
    MismatchedBrackets { open: char, close: char },

    /// A bracket pair with nothing inside.
    EmptyBrackets,

    /// The `=` sign sits inside brackets, so the equation cannot be split into two sides.
    EqualsInBrackets,

    /// A `+` or `-` sign with no term after it.
    DanglingSign(char),

    /// One side of the `=` sign contains no term.
    EmptySide,
}

impl EquationDefect {
    /// The messages attached to the spans of the defect, one per span.
    fn labels(&self) -> Vec<&'static str> {
        match self {
            Self::BadCharacter(_) => vec!["this character is not allowed"],
            Self::MissingEquals => vec!["expected a `=` sign somewhere in here"],
            Self::MoreThanOneEquals => vec!["this `=` sign is one too many"],
            Self::RepeatedSign(_) | Self::SignCombination | Self::UnknownOperation(_) => {
                vec!["here"]
            },
            Self::UnclosedBracket(_) => vec!["this bracket is never closed"],
            Self::UnexpectedCloseBracket(_) => vec!["this bracket was never opened"],
            Self::MismatchedBrackets { .. } => vec!["opened here", "closed here"],
            Self::EmptyBrackets => vec!["nothing between these brackets"],
            Self::EqualsInBrackets => vec!["this `=` sign is inside brackets"],
            Self::DanglingSign(_) => vec!["this sign is missing its term"],
            Self::EmptySide => vec!["add a term on this side"],
        }
    }
}

impl fmt::Display for EquationDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadCharacter(c) => write!(f, "bad character `{}`", c),
            Self::MissingEquals => write!(f, "no = sign"),
            Self::MoreThanOneEquals => write!(f, "cannot have more than one = sign"),
            Self::RepeatedSign(c) => write!(f, "repeated {} sign", c),
            Self::SignCombination => write!(f, "+- or -+ sign combination"),
            Self::UnknownOperation(op) => write!(f, "unknown operation {}", op),
            Self::UnclosedBracket(c) => write!(f, "unclosed bracket `{}`", c),
            Self::UnexpectedCloseBracket(c) => write!(f, "unmatched closing bracket `{}`", c),
            Self::MismatchedBrackets { open, close } => {
                write!(f, "mismatched brackets `{}` and `{}`", open, close)
            },
            Self::EmptyBrackets => write!(f, "empty brackets"),
            Self::EqualsInBrackets => write!(f, "`=` sign inside brackets"),
            Self::DanglingSign(c) => write!(f, "dangling `{}` sign", c),
            Self::EmptySide => write!(f, "nothing on one side of the `=` sign"),
        }
    }
}

/// The equation as a whole does not hold together.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} in equation", reason),
    labels = reason.labels(),
)]
pub struct InvalidEquation {
    /// The defect that was found.
    pub reason: EquationDefect,
}

/// The ways a single term can be malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermDefect {
    /// An exponentiation marker with no digits after it.
    MissingExponent,

    /// An exponentiation marker applied to nothing.
    MissingBase,

    /// An exponent that is not a plain integer, such as `x^2.5`.
    NonIntegerExponent,

    /// Content the term grammar cannot place, such as digits after the variables.
    TrailingContent,
}

impl TermDefect {
    /// The label attached to the span of the defect.
    fn label(&self) -> &'static str {
        match self {
            Self::MissingExponent => "add an integer exponent after this `^`",
            Self::MissingBase => "this exponent has nothing to attach to",
            Self::NonIntegerExponent => "write this exponent as a plain integer",
            Self::TrailingContent => "could not understand this part of the term",
        }
    }
}

impl fmt::Display for TermDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingExponent => write!(f, "exponentiation with no exponent"),
            Self::MissingBase => write!(f, "exponentiation with no base"),
            Self::NonIntegerExponent => write!(f, "exponent is not a plain integer"),
            Self::TrailingContent => write!(f, "unexpected trailing content"),
        }
    }
}

/// A term does not respect the term grammar.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} in term `{}`", reason, term),
    labels = [reason.label()],
)]
pub struct InvalidTermInEquation {
    /// The full text of the offending term.
    pub term: String,

    /// The defect that was found.
    pub reason: TermDefect,
}

/// A term's variable segment contains a letter outside the accepted alphabet.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected variable `{}` in term `{}`", name, term),
    labels = ["this variable is not recognized"],
    help = format!(
        "accepted variable names are: {}",
        VAR_NAMES
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>()
            .join(", ")
            .fg(EXPR),
    ),
)]
pub struct UnexpectedVariableNames {
    /// The full text of the offending term.
    pub term: String,

    /// The first letter of the variable segment that is not in the alphabet.
    pub name: char,
}
