//! A recursive-descent parser that folds engine-syntax expressions straight into [`Poly`]s.
//!
//! Polynomials are closed under everything the engine syntax can express (sums, differences,
//! products, integer powers, bracket groups and sign chains), so there is no intermediate
//! expression tree: every grammar rule returns the polynomial it denotes, already expanded and
//! combined.

use crate::error::{self, Error};
use crate::poly::{rational_from_str, Poly};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use crate::MAX_EXPONENT;
use canon_error::ErrorKind;
use std::ops::Range;

/// Parses an engine-syntax expression into a polynomial in normal form.
///
/// ```
/// use canon_algebra::parse::parse;
///
/// let poly = parse("x - (y**2 - x)").unwrap();
/// assert_eq!(poly.to_string(), "2*x - y**2");
/// ```
pub fn parse(input: &str) -> Result<Poly, Error> {
    let mut parser = Parser::new(input)?;
    let poly = parser.parse_expr()?;
    if parser.cursor < parser.tokens.len() {
        return Err(parser.error(error::ExpectedEof));
    }
    Ok(poly)
}

/// A cursor over the token sequence of one expression.
#[derive(Debug, Clone)]
struct Parser<'source> {
    /// The tokens being parsed.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Creates a new parser for the given expression.
    fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
        })
    }

    /// Creates an error that points at the current token, or the end of the expression if the
    /// cursor is at the end of the stream.
    fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the expression.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the expression if the cursor is at
    /// the end of the stream.
    fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the kind of the next token without advancing the cursor.
    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.cursor).map(|token| token.kind)
    }

    /// Returns the next token and advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only the span `Range` is cloned
                Ok(token.clone())
            },
            None => Err(self.error(error::UnexpectedEof)),
        }
    }

    /// `expr := term (('+' | '-') term)*`
    fn parse_expr(&mut self) -> Result<Poly, Error> {
        let mut sum = self.parse_term()?;

        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::Add => {
                    self.cursor += 1;
                    sum = sum + self.parse_term()?;
                },
                TokenKind::Sub => {
                    self.cursor += 1;
                    sum = sum - self.parse_term()?;
                },
                _ => break,
            }
        }

        Ok(sum)
    }

    /// `term := ('+' | '-')* power (('*' | adjacency) power)*`
    ///
    /// A sign chain in front of a term folds into one sign, so `--x` and `- +- x` both read as
    /// `x` and `-x` respectively. Two adjacent primaries multiply implicitly: `2(x+1)y`.
    fn parse_term(&mut self) -> Result<Poly, Error> {
        let mut negative = false;
        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::Add => self.cursor += 1,
                TokenKind::Sub => {
                    negative = !negative;
                    self.cursor += 1;
                },
                _ => break,
            }
        }

        let mut product = self.parse_power()?;
        loop {
            match self.peek_kind() {
                Some(TokenKind::Mul) => {
                    self.cursor += 1;
                    product = product * self.parse_power()?;
                },
                Some(kind) if kind.starts_primary() => {
                    product = product * self.parse_power()?;
                },
                _ => break,
            }
        }

        Ok(if negative { -product } else { product })
    }

    /// `power := primary ('**' integer)?`
    ///
    /// The exponent must be a bare non-negative integer literal; the pipeline never produces
    /// anything else on the right of `**`.
    fn parse_power(&mut self) -> Result<Poly, Error> {
        let base = self.parse_primary()?;

        if self.peek_kind() != Some(TokenKind::Pow) {
            return Ok(base);
        }
        self.cursor += 1;

        let token = self.next_token()?;
        match token.kind {
            TokenKind::Number if token.lexeme.bytes().all(|b| b.is_ascii_digit()) => {
                let exponent = token
                    .lexeme
                    .parse::<u32>()
                    .ok()
                    .filter(|&exponent| exponent <= MAX_EXPONENT);
                match exponent {
                    Some(exponent) => Ok(base.pow(exponent)),
                    None => Err(Error::new(vec![token.span], error::ExponentOutOfRange)),
                }
            },
            TokenKind::Number => {
                Err(Error::new(vec![token.span], error::NonIntegerExponent))
            },
            kind => Err(Error::new(
                vec![token.span],
                error::UnexpectedToken {
                    expected: &[TokenKind::Number],
                    found: kind,
                },
            )),
        }
    }

    /// `primary := number | symbol | '(' expr ')' | '[' expr ']' | '{' expr '}'`
    fn parse_primary(&mut self) -> Result<Poly, Error> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::Number => match rational_from_str(token.lexeme) {
                Some(value) => Ok(Poly::constant(value)),
                None => Err(Error::new(vec![token.span], error::ExponentOutOfRange)),
            },
            TokenKind::Symbol => {
                Ok(Poly::symbol(token.lexeme.chars().next().unwrap_or_default()))
            },
            kind if kind.is_open_bracket() => {
                if let Some(next) = self.peek_kind() {
                    if next.closes(kind) {
                        let close = self.next_token()?;
                        return Err(Error::new(
                            vec![token.span.start..close.span.end],
                            error::EmptyBrackets,
                        ));
                    }
                }

                let inner = self.parse_expr()?;
                let expected: &'static [TokenKind] = match kind {
                    TokenKind::OpenParen => &[TokenKind::CloseParen],
                    TokenKind::OpenBracket => &[TokenKind::CloseBracket],
                    _ => &[TokenKind::CloseBrace],
                };
                match self.peek_kind() {
                    Some(next) if next.closes(kind) => {
                        self.cursor += 1;
                        Ok(inner)
                    },
                    Some(found) => {
                        Err(self.error(error::UnexpectedToken { expected, found }))
                    },
                    None => Err(Error::new(vec![token.span], error::UnclosedBracket)),
                }
            },
            kind => Err(Error::new(
                vec![token.span],
                error::UnexpectedToken {
                    expected: &[
                        TokenKind::Number,
                        TokenKind::Symbol,
                        TokenKind::OpenParen,
                        TokenKind::OpenBracket,
                        TokenKind::OpenBrace,
                    ],
                    found: kind,
                },
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Parses the input and renders the resulting polynomial.
    fn rendered(input: &str) -> String {
        parse(input).unwrap().to_string()
    }

    /// Parses the input and returns the debug form of the error kind.
    fn defect(input: &str) -> String {
        format!("{:?}", parse(input).unwrap_err().kind)
    }

    #[test]
    fn single_primaries() {
        assert_eq!(rendered("x"), "x");
        assert_eq!(rendered("66"), "66");
        assert_eq!(rendered("66.66"), "66.66");
    }

    #[test]
    fn scientific_notation_expands() {
        assert_eq!(rendered("66e10"), "660000000000");
        assert_eq!(rendered("2e-3"), "0.002");
    }

    #[test]
    fn sums_combine_like_terms() {
        assert_eq!(rendered("x + x + x"), "3*x");
        assert_eq!(rendered("x**2+3.5*x*y+y - y**2+x*y-y"), "x**2 + 4.5*x*y - y**2");
    }

    #[test]
    fn brackets_expand() {
        assert_eq!(rendered("x-(y**2-x)"), "2*x - y**2");
        assert_eq!(rendered("x-(0-(0-x))"), "0");
        assert_eq!(rendered("x-[0-{0-x}]"), "0");
    }

    #[test]
    fn sign_chains_fold() {
        assert_eq!(rendered("-x"), "-x");
        assert_eq!(rendered("1--2"), "3");
        assert_eq!(rendered("+x"), "x");
        assert_eq!(rendered("1 - - 2"), "3");
    }

    #[test]
    fn powers_expand() {
        assert_eq!(rendered("x**2"), "x**2");
        assert_eq!(rendered("(x+1)**2"), "x**2 + 2*x + 1");
        assert_eq!(rendered("x**0"), "1");
    }

    #[test]
    fn power_binds_tighter_than_multiplication() {
        assert_eq!(rendered("x*y**2"), "x*y**2");
        assert_eq!(rendered("2*x**3"), "2*x**3");
    }

    #[test]
    fn implicit_multiplication_by_adjacency() {
        assert_eq!(rendered("2(x+1)"), "2*x + 2");
        assert_eq!(rendered("(x+1)y"), "x*y + y");
        assert_eq!(rendered("(x+1)(x-1)"), "x**2 - 1");
    }

    #[test]
    fn empty_expression() {
        assert_eq!(defect(""), "UnexpectedEof");
    }

    #[test]
    fn trailing_operator() {
        assert_eq!(defect("x+"), "UnexpectedEof");
    }

    #[test]
    fn unclosed_bracket() {
        assert_eq!(defect("(x+1"), "UnclosedBracket");
    }

    #[test]
    fn mismatched_bracket() {
        assert_eq!(
            defect("(x+1]"),
            "UnexpectedToken { expected: [CloseParen], found: CloseBracket }",
        );
    }

    #[test]
    fn empty_brackets() {
        assert_eq!(defect("2()"), "EmptyBrackets");
    }

    #[test]
    fn power_without_integer_exponent() {
        assert_eq!(defect("x**2.5"), "NonIntegerExponent");
        assert_eq!(
            defect("x**y"),
            "UnexpectedToken { expected: [Number], found: Symbol }",
        );
    }

    #[test]
    fn oversized_exponent() {
        assert_eq!(defect("x**4294967296"), "ExponentOutOfRange");
        assert_eq!(defect("x**70000"), "ExponentOutOfRange");
    }

    #[test]
    fn foreign_character() {
        assert_eq!(defect("x = 1"), "UnexpectedCharacter { c: '=' }");
    }
}
