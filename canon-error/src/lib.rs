//! Contains the common [`ErrorKind`] trait used by all errors raised while canonicalizing an
//! equation to display user-facing error messages.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, ops::Range};

// Generated `ErrorKind` impls name this crate by its package name; let the tests below use the
// derive too.
#[cfg(test)]
extern crate self as canon_error;

/// The color to use to highlight parts of an equation.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while processing an equation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of an equation that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source equation that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error against the given source equation, with all terminal
    /// styling removed.
    ///
    /// The `ariadne` crate is built around writing styled reports directly to a stream; this
    /// method exists so that callers (and tests) can get at the text of a report.
    pub fn report_to_string(&self, src_id: &str, source: &str) -> String {
        let mut buf = Vec::new();
        self.build_report(src_id)
            .write((src_id, Source::from(source)), &mut buf)
            .expect("writing to a `Vec` cannot fail");
        let stripped = strip_ansi_escapes::strip(&buf);
        String::from_utf8_lossy(&stripped).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_attrs::ErrorKind;

    /// A sample error kind to exercise the report machinery.
    #[derive(Debug, ErrorKind, PartialEq)]
    #[error(
        message = format!("cannot make sense of `{}`", part),
        labels = ["this part"],
        help = "rewrite the equation",
    )]
    struct Confusing {
        part: String,
    }

    #[test]
    fn report_contains_message_and_help() {
        let err = Error::new(vec![4..6], Confusing { part: "@#".to_string() });
        let text = err.report_to_string("input", "x + @# = 1");

        assert!(text.contains("cannot make sense of `@#`"));
        assert!(text.contains("rewrite the equation"));
    }
}
