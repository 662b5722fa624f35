//! End-to-end tests: raw equation in, canonical `expression = 0` out, through the full
//! pipeline with the real engine.

use canon_algebra::Engine;
use canon_parser::equation::Equation;
use pretty_assertions::assert_eq;

/// Canonicalizes one equation with the real engine.
fn canonicalize(input: &str) -> String {
    Equation::new(input).unwrap().canonicalize(&Engine::new()).unwrap()
}

#[test]
fn general() {
    assert_eq!(
        canonicalize("x^2 + 3.5xy + y = y^2 - xy + y"),
        "x^2 + 4.5xy - y^2 = 0",
    );
}

#[test]
fn identity() {
    assert_eq!(canonicalize("x = 1"), "x - 1 = 0");
}

#[test]
fn simplify() {
    assert_eq!(canonicalize("x - (y^2 - x) = 0"), "2x - y^2 = 0");
}

#[test]
fn tricky() {
    assert_eq!(canonicalize("x - (0 - (0 - x)) = 0"), "0 = 0");
}

#[test]
fn explicit_multiplication_spelling() {
    assert_eq!(
        canonicalize("x**2 + 3.5*x*y + y = y**2 - x*y + y"),
        "x^2 + 4.5xy - y^2 = 0",
    );
}

#[test]
fn mixed_spelling() {
    assert_eq!(
        canonicalize("x^2 + 3.5xy + y = y**2 - x*y + y"),
        "x^2 + 4.5xy - y^2 = 0",
    );
}

#[test]
fn canonicalizing_a_canonical_equation_is_identity() {
    let canonical = canonicalize("x^2 + 3.5xy + y = y^2 - xy + y");
    assert_eq!(canonicalize(&canonical), canonical);

    let canonical = canonicalize("x - (y^2 - x) = 0");
    assert_eq!(canonicalize(&canonical), canonical);

    assert_eq!(canonicalize("0 = 0"), "0 = 0");
}

#[test]
fn variables_collapse_across_sides() {
    assert_eq!(canonicalize("yx = xy"), "0 = 0");
}

#[test]
fn all_bracket_kinds_group() {
    assert_eq!(canonicalize("x - [0 - {0 - x}] = 0"), "0 = 0");
}

#[test]
fn higher_order_terms() {
    assert_eq!(canonicalize("x^3 = x"), "x^3 - x = 0");
    assert_eq!(canonicalize("tu^2 = 0"), "tu^2 = 0");
}

#[test]
fn constants_fold() {
    assert_eq!(canonicalize("2 + 2 = 5"), "-1 = 0");
    assert_eq!(canonicalize("66.66 = 0.66"), "66 = 0");
}

#[test]
fn scientific_notation_reaches_the_engine() {
    assert_eq!(canonicalize("66e1x = 0"), "660x = 0");
    assert_eq!(canonicalize("x = 25e2"), "x - 2500 = 0");
}

#[test]
fn scientific_suffix_cannot_carry_a_sign() {
    // `-` is structural, so `2e-1` splits into the term `2e` and the term `1`; the dangling
    // `e` is an unknown variable, exactly as if it had been typed alone
    let err = Equation::new("x = 2e-1").unwrap_err();
    assert_eq!(
        format!("{:?}", err.kind),
        "UnexpectedVariableNames { term: \"2e\", name: 'e' }",
    );
}

#[test]
fn sign_chains_across_removed_whitespace() {
    assert_eq!(canonicalize("x = 1 - - 2"), "x - 3 = 0");
}

#[test]
fn coefficient_bracket_adjacency_multiplies() {
    assert_eq!(canonicalize("2(x + 1) = 0"), "2x + 2 = 0");
}

#[test]
fn alphabet_order_governs_rendering() {
    assert_eq!(canonicalize("zy + wt = 0"), "tw + yz = 0");
}
