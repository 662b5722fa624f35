//! Splits the sanitized equation into structural symbols and raw term tokens.
//!
//! The structural symbols `+ - ( ) [ ] { } =` are kept as separate tokens, not consumed; the
//! substrings between them come out as raw [`Term`](TokenKind::Term) tokens. Token order is
//! exactly input order, and the equation assembler depends on that.

pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, in input
/// order.
///
/// The token patterns cover every character the validator lets through, so tokenization itself
/// cannot fail; anything that is not a structural symbol lands in a term token and is judged by
/// the term transformer instead.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(
        input: &'source str,
        expected: [(TokenKind, &'source str); N],
    ) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_equation() {
        compare_tokens(
            "x+1=0",
            [
                (TokenKind::Term, "x"),
                (TokenKind::Add, "+"),
                (TokenKind::Term, "1"),
                (TokenKind::Equals, "="),
                (TokenKind::Term, "0"),
            ],
        );
    }

    #[test]
    fn terms_swallow_everything_between_symbols() {
        compare_tokens(
            "x^2+3.5xy=66e10",
            [
                (TokenKind::Term, "x^2"),
                (TokenKind::Add, "+"),
                (TokenKind::Term, "3.5xy"),
                (TokenKind::Equals, "="),
                (TokenKind::Term, "66e10"),
            ],
        );
    }

    #[test]
    fn all_bracket_kinds() {
        compare_tokens(
            "{[(x)]}=0",
            [
                (TokenKind::OpenBrace, "{"),
                (TokenKind::OpenBracket, "["),
                (TokenKind::OpenParen, "("),
                (TokenKind::Term, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::CloseBracket, "]"),
                (TokenKind::CloseBrace, "}"),
                (TokenKind::Equals, "="),
                (TokenKind::Term, "0"),
            ],
        );
    }

    #[test]
    fn adjacent_structural_symbols_produce_no_empty_terms() {
        compare_tokens(
            "x-(-y)=0",
            [
                (TokenKind::Term, "x"),
                (TokenKind::Sub, "-"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Sub, "-"),
                (TokenKind::Term, "y"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Equals, "="),
                (TokenKind::Term, "0"),
            ],
        );
    }

    #[test]
    fn complete_token_sequence_preserves_order_and_spans() {
        let tokens = tokenize_complete("x^2-y=0");
        let lexemes = tokens.iter().map(|token| token.lexeme).collect::<Vec<_>>();
        assert_eq!(lexemes, ["x^2", "-", "y", "=", "0"]);
        assert_eq!(tokens[0].span, 0..3);
        assert_eq!(tokens[3].span, 5..6);
    }
}
