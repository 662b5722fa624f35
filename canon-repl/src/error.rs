use ariadne::Source;
use canon_parser::engine::EngineError;
use canon_parser::error::Error as ParseError;

/// Utility enum to package errors that can occur while parsing / canonicalizing.
pub enum Error {
    /// An error from the parsing pipeline. Spans refer to the raw input line.
    Parse(ParseError),

    /// An error from the algebra engine. Spans refer to the expression the engine rejected,
    /// which the error carries along.
    Engine(EngineError),
}

impl Error {
    /// Report the error to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type actually does not have a
    /// `Display` implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Parse(err) => {
                let report = err.build_report("input");
                report.eprint(("input", Source::from(input))).unwrap();
            },
            Self::Engine(err) => {
                let report = err.error.build_report("expression");
                report
                    .eprint(("expression", Source::from(err.expr.as_str())))
                    .unwrap();
            },
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Self {
        Self::Engine(err)
    }
}
