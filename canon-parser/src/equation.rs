//! The unit of work: one equation, from raw input line to canonical form.

use crate::engine::{AlgebraEngine, EngineError};
use crate::error::{EquationDefect, Error, InvalidEquation};
use crate::sanitize::{sanitize, Sanitized};
use crate::term::process_term;
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use crate::validate::validate;

/// An equation, parsed and ready to be canonicalized.
///
/// Construction runs the whole pipeline: validation, sanitization, tokenization, term
/// transformation, reassembly and the split on `=`. A constructed equation is immutable; it
/// holds the raw input, the sanitized text, and both sides in engine syntax, and
/// [`canonicalize`](Equation::canonicalize) can be called any number of times without mutating
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    raw: String,
    sanitized: String,
    left: String,
    right: String,
}

impl Equation {
    /// Parses the given input line into an equation.
    ///
    /// Error spans refer to the raw input, even for defects found after sanitization has moved
    /// characters around.
    pub fn new(input: &str) -> Result<Self, Error> {
        validate(input)?;
        let sanitized = sanitize(input);
        let tokens = tokenize_complete(sanitized.text());
        check_structure(&tokens, &sanitized)?;

        let mut assembled = String::with_capacity(sanitized.text().len() * 2);
        for token in tokens.iter() {
            if token.kind.is_structural() {
                assembled.push_str(token.lexeme);
            } else {
                let rendered = process_term(token.lexeme)
                    .map_err(|err| reanchor(err, token.span.start, &sanitized))?;
                assembled.push_str(&rendered);
            }
        }

        // the validator already guarantees a single `=`; re-check here because the split below
        // silently depends on it
        let mut sides = assembled.split('=');
        let (left, right) = match (sides.next(), sides.next(), sides.next()) {
            (Some(left), Some(right), None) => (left.to_owned(), right.to_owned()),
            (_, None, _) => {
                return Err(Error::new(
                    vec![0..input.len()],
                    InvalidEquation { reason: EquationDefect::MissingEquals },
                ));
            },
            _ => {
                return Err(Error::new(
                    vec![0..input.len()],
                    InvalidEquation { reason: EquationDefect::MoreThanOneEquals },
                ));
            },
        };

        Ok(Self {
            raw: input.to_owned(),
            sanitized: sanitized.text().to_owned(),
            left,
            right,
        })
    }

    /// The raw input this equation was constructed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The sanitized form of the input: canonical input syntax, no whitespace.
    pub fn sanitized(&self) -> &str {
        &self.sanitized
    }

    /// The left-hand side, in engine syntax.
    pub fn left_hand_side(&self) -> &str {
        &self.left
    }

    /// The right-hand side, in engine syntax.
    pub fn right_hand_side(&self) -> &str {
        &self.right
    }

    /// Returns the canonical `<expression> = 0` form of this equation.
    ///
    /// Both sides are handed to the engine to be subtracted and simplified; the engine's output
    /// is reformatted into display syntax purely textually, trusting its token structure.
    pub fn canonicalize<E: AlgebraEngine + ?Sized>(&self, engine: &E) -> Result<String, EngineError> {
        let simplified = engine.simplify_difference(&self.left, &self.right)?;
        Ok(format!("{} = 0", display_form(&simplified)))
    }
}

/// Rewrites an engine-syntax expression into display syntax: `**` becomes `^`, and explicit
/// multiplication disappears.
pub fn display_form(expr: &str) -> String {
    expr.replace("**", "^").replace('*', "")
}

/// Shifts an error raised against a slice of the sanitized text back onto the raw input.
fn reanchor(mut err: Error, offset: usize, sanitized: &Sanitized) -> Error {
    for span in &mut err.spans {
        *span = sanitized.raw_span(span.start + offset..span.end + offset);
    }
    err
}

/// Checks that the token sequence hangs together as one equation: brackets balance, the `=`
/// sign sits at the top level with something on both sides, and no sign is left dangling.
///
/// These defects would otherwise surface as engine errors against the rewritten expression;
/// catching them here points the report at the raw input instead.
fn check_structure(tokens: &[Token], sanitized: &Sanitized) -> Result<(), Error> {
    let invalid = |spans: Vec<std::ops::Range<usize>>, reason| {
        Err(Error::new(
            spans.into_iter().map(|span| sanitized.raw_span(span)).collect(),
            InvalidEquation { reason },
        ))
    };

    let mut open_stack: Vec<&Token> = Vec::new();
    let mut side_has_term = false;
    let mut equals: Option<&Token> = None;

    for (at, token) in tokens.iter().enumerate() {
        match token.kind {
            kind if kind.is_open_bracket() => open_stack.push(token),
            kind if kind.is_close_bracket() => match open_stack.pop() {
                None => {
                    return invalid(
                        vec![token.span.clone()],
                        EquationDefect::UnexpectedCloseBracket(structural_char(token)),
                    );
                },
                Some(open) => {
                    if !kind.closes(open.kind) {
                        return invalid(
                            vec![open.span.clone(), token.span.clone()],
                            EquationDefect::MismatchedBrackets {
                                open: structural_char(open),
                                close: structural_char(token),
                            },
                        );
                    }
                    if open.span.end == token.span.start {
                        return invalid(
                            vec![open.span.start..token.span.end],
                            EquationDefect::EmptyBrackets,
                        );
                    }
                },
            },
            TokenKind::Equals => {
                if !open_stack.is_empty() {
                    return invalid(vec![token.span.clone()], EquationDefect::EqualsInBrackets);
                }
                if !side_has_term {
                    return invalid(vec![token.span.clone()], EquationDefect::EmptySide);
                }
                side_has_term = false;
                equals = Some(token);
            },
            kind if kind.is_sign() => {
                let dangling = match tokens.get(at + 1) {
                    None => true,
                    Some(next) => next.kind.is_close_bracket() || next.kind == TokenKind::Equals,
                };
                if dangling {
                    return invalid(
                        vec![token.span.clone()],
                        EquationDefect::DanglingSign(structural_char(token)),
                    );
                }
            },
            _ => side_has_term = true,
        }
    }

    if let Some(open) = open_stack.first() {
        return invalid(
            vec![open.span.clone()],
            EquationDefect::UnclosedBracket(structural_char(open)),
        );
    }
    if let Some(equals) = equals {
        if !side_has_term {
            return invalid(vec![equals.span.clone()], EquationDefect::EmptySide);
        }
    }

    Ok(())
}

/// The single character of a structural token.
fn structural_char(token: &Token) -> char {
    token.lexeme.chars().next().unwrap_or_default()
}
