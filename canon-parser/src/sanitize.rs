//! Normalization of the raw equation into the canonical input syntax.
//!
//! Both accepted spellings collapse to one: `**` becomes `^`, explicit multiplication and
//! whitespace disappear. `a*x**k` and `ax^k` are byte-identical after this pass. No validation
//! happens here; malformed input is transformed, never rejected.

use std::ops::Range;

/// A sanitized equation, together with a map back onto the raw input.
///
/// Sanitization moves characters around, so spans raised against the sanitized text would point
/// at the wrong place in what the user actually typed. Every byte of the sanitized text
/// remembers the byte range of the raw input it came from; [`raw_span`](Sanitized::raw_span)
/// remaps error spans for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    text: String,
    map: Vec<Range<usize>>,
}

impl Sanitized {
    /// The sanitized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Remaps a span over the sanitized text onto the raw input.
    pub fn raw_span(&self, span: Range<usize>) -> Range<usize> {
        let (Some(first), Some(last)) = (
            self.map.get(span.start),
            span.end.checked_sub(1).and_then(|at| self.map.get(at)),
        ) else {
            // an empty or out-of-bounds span can only point at the end of the input
            let end = self.map.last().map_or(0, |range| range.end);
            return end..end;
        };

        if span.start < span.end {
            first.start..last.end
        } else {
            first.start..first.start
        }
    }
}

/// Rewrites the raw equation into the canonical input syntax.
pub fn sanitize(input: &str) -> Sanitized {
    let mut text = String::with_capacity(input.len());
    let mut map = Vec::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        match c {
            '*' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                text.push('^');
                map.push(at..at + 2);
            },
            '*' => (),
            c if c.is_whitespace() => (),
            c => {
                text.push(c);
                for _ in 0..c.len_utf8() {
                    map.push(at..at + c.len_utf8());
                }
            },
        }
    }

    Sanitized { text, map }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn removes_whitespace() {
        assert_eq!(sanitize("x + y = 1").text(), "x+y=1");
    }

    #[test]
    fn rewrites_double_operator_power() {
        assert_eq!(sanitize("x**2 = 1").text(), "x^2=1");
        assert_eq!(sanitize("x^2 = 1").text(), "x^2=1");
    }

    #[test]
    fn removes_explicit_multiplication() {
        assert_eq!(sanitize("3.5*x*y = 0").text(), "3.5xy=0");
    }

    #[test]
    fn both_spellings_collapse_to_the_same_text() {
        assert_eq!(
            sanitize("x**2 + 3.5*x*y + y = y**2 - x*y + y").text(),
            sanitize("x^2 + 3.5xy + y = y^2 - xy + y").text(),
        );
    }

    #[test]
    fn spans_remap_onto_the_raw_input() {
        let sanitized = sanitize("x**2 + 3.5*x*y");
        assert_eq!(sanitized.text(), "x^2+3.5xy");

        // `x` at the start maps to itself
        assert_eq!(sanitized.raw_span(0..1), 0..1);
        // the `^` came from `**`
        assert_eq!(sanitized.raw_span(1..2), 1..3);
        // `xy` spans the `x*y` tail, `*` included
        assert_eq!(sanitized.raw_span(7..9), 11..14);
        // an empty span degenerates to a point
        assert_eq!(sanitized.raw_span(3..3), 5..5);
    }

    #[test]
    fn empty_input() {
        let sanitized = sanitize("");
        assert_eq!(sanitized.text(), "");
        assert_eq!(sanitized.raw_span(0..0), 0..0);
    }
}
