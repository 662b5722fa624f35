//! The term transformer: parses one raw term token and re-renders it in engine syntax.
//!
//! A term is everything between two structural symbols, so by the time it lands here it is a
//! single `coefficient? variables? (^ exponent)?` combination with no signs and no explicit
//! multiplication. The transformer expands the implicit multiplication deterministically:
//! `3.5xy` becomes `3.5*x*y`, `x^2` becomes `x**2`, and multi-variable products always come out
//! in the alphabet's canonical order no matter how they were typed (`yx` renders as `x*y`).

use crate::error::{Error, InvalidTermInEquation, TermDefect, UnexpectedVariableNames};
use crate::VAR_NAMES;
use logos::Logos;

/// The pieces a raw term token can be made of.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
enum Piece {
    /// A number in any accepted format: `1`, `1.`, `1.1`, `.1`, with an optional
    /// scientific-notation suffix (`66e10`, `2e-3`).
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Number,

    /// A run of letters: the variable product of the term.
    #[regex(r"[a-z]+")]
    Letters,

    /// The exponentiation marker.
    #[token("^")]
    Caret,
}

/// Parses a raw term token and renders it in engine syntax, or fails with a typed error.
///
/// Error spans are relative to the term itself; callers that hold the term's position in a
/// larger string are expected to shift and remap them.
///
/// ```
/// use canon_parser::term::process_term;
///
/// assert_eq!(process_term("66.66").unwrap(), "66.66");
/// assert_eq!(process_term("3.5yx").unwrap(), "3.5*x*y");
/// assert_eq!(process_term("66e10x^23").unwrap(), "66e10*x**23");
/// ```
pub fn process_term(term: &str) -> Result<String, Error> {
    let mut lexer = Piece::lexer(term);
    let mut coefficient = None;
    let mut variables = None;
    let mut exponent = None;

    while let Some(piece) = lexer.next() {
        let span = lexer.span();
        match piece {
            Ok(Piece::Number) if coefficient.is_none() && variables.is_none() && exponent.is_none() => {
                coefficient = Some(lexer.slice());
            },
            Ok(Piece::Letters) if variables.is_none() && exponent.is_none() => {
                let letters = lexer.slice();
                for (at, name) in letters.char_indices() {
                    if !VAR_NAMES.contains(&name) {
                        let at = span.start + at;
                        return Err(Error::new(
                            vec![at..at + name.len_utf8()],
                            UnexpectedVariableNames { term: term.to_owned(), name },
                        ));
                    }
                }
                variables = Some(letters);
            },
            Ok(Piece::Caret) if exponent.is_none() => {
                exponent = match lexer.next() {
                    Some(Ok(Piece::Number)) => {
                        let digits = lexer.slice();
                        if !digits.bytes().all(|b| b.is_ascii_digit()) {
                            return Err(Error::new(
                                vec![lexer.span()],
                                InvalidTermInEquation {
                                    term: term.to_owned(),
                                    reason: TermDefect::NonIntegerExponent,
                                },
                            ));
                        }
                        Some(digits)
                    },
                    _ => {
                        return Err(Error::new(
                            vec![span],
                            InvalidTermInEquation {
                                term: term.to_owned(),
                                reason: TermDefect::MissingExponent,
                            },
                        ));
                    },
                };
            },
            _ => {
                return Err(Error::new(
                    vec![span],
                    InvalidTermInEquation {
                        term: term.to_owned(),
                        reason: TermDefect::TrailingContent,
                    },
                ));
            },
        }
    }

    if exponent.is_some() && coefficient.is_none() && variables.is_none() {
        return Err(Error::new(
            vec![0..term.len()],
            InvalidTermInEquation {
                term: term.to_owned(),
                reason: TermDefect::MissingBase,
            },
        ));
    }

    let mut rendered = String::with_capacity(term.len() * 2);
    if let Some(coefficient) = coefficient {
        rendered.push_str(coefficient);
        if variables.is_some() {
            rendered.push('*');
        }
    }
    if let Some(letters) = variables {
        // render the subset of the alphabet present in this term, in alphabet order; each
        // symbol counts once no matter how often it appears
        let mut first = true;
        for name in VAR_NAMES {
            if letters.contains(name) {
                if !first {
                    rendered.push('*');
                }
                rendered.push(name);
                first = false;
            }
        }
    }
    if let Some(digits) = exponent {
        rendered.push_str("**");
        rendered.push_str(digits);
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Runs the transformer and returns the debug form of the error kind.
    fn defect(term: &str) -> String {
        format!("{:?}", process_term(term).unwrap_err().kind)
    }

    #[test]
    fn integer_coefficient() {
        assert_eq!(process_term("66").unwrap(), "66");
    }

    #[test]
    fn float_coefficient() {
        assert_eq!(process_term("66.66").unwrap(), "66.66");
    }

    #[test]
    fn scientific_coefficient_is_preserved_verbatim() {
        assert_eq!(process_term("66e10").unwrap(), "66e10");
        assert_eq!(process_term("2e-3").unwrap(), "2e-3");
    }

    #[test]
    fn bare_and_dotted_floats() {
        assert_eq!(process_term("1.").unwrap(), "1.");
        assert_eq!(process_term(".5").unwrap(), ".5");
    }

    #[test]
    fn single_variable() {
        assert_eq!(process_term("x").unwrap(), "x");
        assert_eq!(process_term("2x").unwrap(), "2*x");
    }

    #[test]
    fn multivariable_expands_implicit_multiplication() {
        assert_eq!(process_term("xyz").unwrap(), "x*y*z");
    }

    #[test]
    fn variables_render_in_alphabet_order() {
        assert_eq!(process_term("yx").unwrap(), "x*y");
        assert_eq!(process_term("zyxwvut").unwrap(), "t*u*v*w*x*y*z");
    }

    #[test]
    fn repeated_variables_count_once() {
        assert_eq!(process_term("xx").unwrap(), "x");
    }

    #[test]
    fn exponent_renders_as_double_operator() {
        assert_eq!(process_term("x^2").unwrap(), "x**2");
        assert_eq!(process_term("23x^4").unwrap(), "23*x**4");
    }

    #[test]
    fn full_term() {
        assert_eq!(process_term("66e10x^23").unwrap(), "66e10*x**23");
    }

    #[test]
    fn empty_term_renders_empty() {
        assert_eq!(process_term("").unwrap(), "");
    }

    #[test]
    fn unknown_variable() {
        assert_eq!(
            defect("23az"),
            "UnexpectedVariableNames { term: \"23az\", name: 'a' }",
        );
        assert_eq!(
            defect("23a^3"),
            "UnexpectedVariableNames { term: \"23a^3\", name: 'a' }",
        );
    }

    #[test]
    fn unknown_variable_report_mentions_the_alphabet() {
        let err = process_term("23az").unwrap_err();
        let report = err.report_to_string("term", "23az");
        assert!(report.contains("unexpected variable `a` in term `23az`"));
        assert!(report.contains("t, u, v, w, x, y, z"));
    }

    #[test]
    fn exponent_with_no_digits() {
        assert_eq!(
            defect("23x^"),
            "InvalidTermInEquation { term: \"23x^\", reason: MissingExponent }",
        );
        let err = process_term("23x^").unwrap_err();
        assert!(err.report_to_string("term", "23x^").contains("no exponent"));
    }

    #[test]
    fn exponent_followed_by_letters_has_no_digits() {
        assert_eq!(
            defect("x^y"),
            "InvalidTermInEquation { term: \"x^y\", reason: MissingExponent }",
        );
    }

    #[test]
    fn non_integer_exponent() {
        assert_eq!(
            defect("x^2.5"),
            "InvalidTermInEquation { term: \"x^2.5\", reason: NonIntegerExponent }",
        );
        assert_eq!(
            defect("x^2e5"),
            "InvalidTermInEquation { term: \"x^2e5\", reason: NonIntegerExponent }",
        );
    }

    #[test]
    fn exponent_with_no_base() {
        assert_eq!(
            defect("^2"),
            "InvalidTermInEquation { term: \"^2\", reason: MissingBase }",
        );
    }

    #[test]
    fn trailing_content_is_rejected_not_dropped() {
        assert_eq!(
            defect("x2"),
            "InvalidTermInEquation { term: \"x2\", reason: TrailingContent }",
        );
        assert_eq!(
            defect("x^2y"),
            "InvalidTermInEquation { term: \"x^2y\", reason: TrailingContent }",
        );
        assert_eq!(
            defect("2,3"),
            "InvalidTermInEquation { term: \"2,3\", reason: TrailingContent }",
        );
    }

    #[test]
    fn error_spans_point_into_the_term() {
        let err = process_term("23az").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);

        let err = process_term("23x^").unwrap_err();
        assert_eq!(err.spans, vec![3..4]);
    }
}
