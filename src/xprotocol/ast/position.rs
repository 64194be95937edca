//! Source positions for diagnostics
//!
//! Tokens and errors report where they came from as 1-based line and column
//! numbers. Columns count characters, not bytes, so a position points at the
//! same place an editor would.

use serde::Serialize;
use std::fmt;

/// A position in source text (1-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Converts byte offsets within one source text to positions
#[derive(Debug, Clone)]
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// Offsets past the end clamp to the end of the source.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map(|text| text.chars().count())
            .unwrap_or(offset - line_start);

        Position::new(line + 1, column + 1)
    }

    /// Position just past the last character
    pub fn end_position(&self) -> Position {
        self.byte_to_position(self.source.len())
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
