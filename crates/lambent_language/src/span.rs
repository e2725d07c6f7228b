//! Source location tracking for reader diagnostics.

/// A span of source text.
///
/// Byte offsets index the source; line and column are 1-based and count
/// characters, for error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
    /// Line number where this span starts.
    pub line: u32,
    /// Column number where this span starts.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns the text this span covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Returns the full source line this span starts on, without its
    /// line terminator.
    #[must_use]
    pub fn line_text<'a>(&self, source: &'a str) -> &'a str {
        let line_start = source[..self.start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[self.start..]
            .find('\n')
            .map_or(source.len(), |i| self.start + i);
        source[line_start..line_end].trim_end_matches('\r')
    }
}
