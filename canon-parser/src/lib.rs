//! Parsing and canonicalization pipeline for algebraic equations.
//!
//! This crate turns a free-form algebraic equation, written the way a person would type it, into
//! a strict, unambiguous expression syntax that a symbolic algebra engine can consume, and back.
//! An equation may be of any order, contain any number of variables (drawn from a fixed
//! seven-letter alphabet) and brackets, and spell multiplication and exponentiation either way:
//! `3.5xy` and `3.5*x*y` are the same term, as are `x^2` and `x**2`.
//!
//! The pipeline runs in fixed stages:
//!
//! 1. [`validate`](validate::validate) rejects disallowed characters, a wrong number of `=`
//!    signs, and forbidden operator sequences, before anything else looks at the input.
//! 2. [`sanitize`](sanitize::sanitize) rewrites `**` to `^` and strips `*` and whitespace,
//!    producing one canonical input syntax (and an offset map back onto the raw input).
//! 3. [`tokenize_complete`](tokenizer::tokenize_complete) splits the sanitized text into
//!    structural symbols and raw term tokens.
//! 4. [`process_term`](term::process_term) parses each term against the term grammar and
//!    re-renders it in engine syntax (explicit `*`, `**` exponents, variables in alphabet
//!    order).
//! 5. [`Equation`](equation::Equation) reassembles the tokens, splits the result on `=`, and
//!    hands both sides to an [`AlgebraEngine`](engine::AlgebraEngine) to be subtracted and
//!    simplified; the engine's output is reformatted back into display syntax as
//!    `<expression> = 0`.
//!
//! ```
//! use canon_parser::equation::Equation;
//!
//! let equation = Equation::new("x^2 + 3.5xy + y = y^2 - xy + y").unwrap();
//! assert_eq!(equation.left_hand_side(), "x**2+3.5*x*y+y");
//! assert_eq!(equation.right_hand_side(), "y**2-x*y+y");
//! ```
//!
//! The actual polynomial arithmetic is *not* implemented here; it is injected through the
//! [`AlgebraEngine`](engine::AlgebraEngine) trait, so the whole pipeline can be unit-tested
//! against a deterministic test double.

pub mod engine;
pub mod equation;
pub mod error;
pub mod sanitize;
pub mod term;
pub mod tokenizer;
pub mod validate;

pub use engine::AlgebraEngine;
pub use equation::Equation;

/// The variable names that may appear in an equation, in canonical order.
///
/// This is a closed alphabet: any other lowercase letter appearing in the variable segment of a
/// term is an error, not a new variable. Variable products are always rendered in this order,
/// regardless of the order the variables were typed in.
pub const VAR_NAMES: [char; 7] = ['t', 'u', 'v', 'w', 'x', 'y', 'z'];
