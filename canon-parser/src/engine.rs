//! The symbolic algebra capability the canonicalizer delegates to.
//!
//! The pipeline itself never does polynomial arithmetic. Expanding brackets, combining like
//! monomials and reducing `left - right` to a single expression is the job of an injected
//! [`AlgebraEngine`]; the pipeline only prepares engine syntax for it and reformats what comes
//! back. This keeps the tokenizer, validator and renderer testable against a deterministic
//! test double, independent of any particular algebra backend.

use canon_error::Error;

/// A symbolic algebra engine capable of subtracting and simplifying two expressions.
pub trait AlgebraEngine {
    /// Reduces `left - right` to a single simplified expression.
    ///
    /// Both arguments and the return value are in engine syntax: explicit `*` multiplication,
    /// `**` exponentiation, standard arithmetic parenthesization. The engine must expand all
    /// parenthesized sign and multiplication structure, combine like monomials by summing their
    /// coefficients, and render the result in a deterministic form of its choosing; callers do
    /// not re-order engine output.
    fn simplify_difference(&self, left: &str, right: &str) -> Result<String, EngineError>;
}

/// An error produced by an [`AlgebraEngine`].
///
/// The engine works on expression strings the caller may no longer have (each side of an
/// equation, already rewritten into engine syntax), so the error carries the text it rejected
/// along with the spans into it.
#[derive(Debug)]
pub struct EngineError {
    /// The expression the engine rejected.
    pub expr: String,

    /// What went wrong, with spans relative to `expr`.
    pub error: Error,
}

impl EngineError {
    /// Creates a new engine error for the given expression.
    pub fn new(expr: impl Into<String>, error: Error) -> Self {
        Self { expr: expr.into(), error }
    }

    /// Renders the report for this error against the rejected expression, with all terminal
    /// styling removed.
    pub fn report_to_string(&self) -> String {
        self.error.report_to_string("expression", &self.expr)
    }
}
