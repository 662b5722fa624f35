//! Upfront validation of the raw equation, before any parsing.
//!
//! All checks here run against the raw input string, exactly as the user typed it. Whitespace
//! removal comes later, so the forbidden sequences are literal: `x ++ y` is rejected, while
//! `x + + y` survives to be read as a doubled sign.

use crate::error::{EquationDefect, Error, InvalidEquation, NoEquation};

/// Returns true if the character may appear somewhere in an equation.
fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || matches!(
            c,
            ' ' | '=' | '-' | '+' | '*' | '^' | '(' | ')' | '[' | ']' | '{' | '}' | '.' | ','
        )
}

/// Checks the raw equation for disallowed characters, a wrong number of `=` signs, and
/// forbidden operator sequences.
///
/// This is a pure predicate over the string: it transforms nothing and has no side effects.
pub fn validate(input: &str) -> Result<(), Error> {
    if input.trim().is_empty() {
        return Err(Error::new(vec![0..input.len()], NoEquation));
    }

    if let Some((at, c)) = input.char_indices().find(|(_, c)| !is_allowed(*c)) {
        return Err(Error::new(
            vec![at..at + c.len_utf8()],
            InvalidEquation { reason: EquationDefect::BadCharacter(c) },
        ));
    }

    let mut equals = input.match_indices('=');
    if equals.next().is_none() {
        return Err(Error::new(
            vec![0..input.len()],
            InvalidEquation { reason: EquationDefect::MissingEquals },
        ));
    }
    if let Some((at, _)) = equals.next() {
        return Err(Error::new(
            vec![at..at + 1],
            InvalidEquation { reason: EquationDefect::MoreThanOneEquals },
        ));
    }

    let forbidden = [
        ("++", EquationDefect::RepeatedSign('+')),
        ("--", EquationDefect::RepeatedSign('-')),
        ("+-", EquationDefect::SignCombination),
        ("-+", EquationDefect::SignCombination),
        ("^^", EquationDefect::UnknownOperation("^^")),
        ("***", EquationDefect::UnknownOperation("***")),
    ];
    for (sequence, reason) in forbidden {
        if let Some(at) = input.find(sequence) {
            return Err(Error::new(
                vec![at..at + sequence.len()],
                InvalidEquation { reason },
            ));
        }
    }

    Ok(())
}
