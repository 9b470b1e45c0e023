//! Source locations
//!
//!     Every token carries a [`Location`]: the name of the source it came from plus a line and
//!     column. Lines are 1-based. Columns are byte offsets measured from the last newline at or
//!     before the position, so on the first line the first byte is column 0 and on later lines the
//!     newline character itself sits at column 0.
//!
//!     [`LineIndex`] precomputes newline offsets once per source so converting a cursor offset
//!     into a location is a binary search rather than a rescan.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (source name, line, column) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub filename: String,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Location{{filename={}, line={}, column={}}}",
            self.filename, self.line, self.column
        )
    }
}

/// Newline offsets of one source, used to turn byte offsets into line/column pairs.
#[derive(Debug, Clone)]
pub struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let newlines = source
            .char_indices()
            .filter(|(_, ch)| *ch == '\n')
            .map(|(offset, _)| offset)
            .collect();
        Self { newlines }
    }

    /// Line and column for a byte offset.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        // Number of newlines at or before `offset`
        let passed = self.newlines.partition_point(|&newline| newline <= offset);
        match passed {
            0 => (1, offset),
            n => (n + 1, offset - self.newlines[n - 1]),
        }
    }

    pub fn locate(&self, filename: &str, offset: usize) -> Location {
        let (line, column) = self.position(offset);
        Location::new(filename, line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_columns_start_at_zero() {
        let index = LineIndex::new("abc");
        assert_eq!(index.position(0), (1, 0));
        assert_eq!(index.position(2), (1, 2));
    }

    #[test]
    fn test_newline_belongs_to_following_line() {
        let index = LineIndex::new("ab\ncd\nef");
        // the newline at offset 2 is column 0 of line 2
        assert_eq!(index.position(2), (2, 0));
        assert_eq!(index.position(3), (2, 1));
        assert_eq!(index.position(5), (3, 0));
        assert_eq!(index.position(7), (3, 2));
    }

    #[test]
    fn test_offset_past_last_newline() {
        let index = LineIndex::new("a\n\n\nb");
        assert_eq!(index.position(4), (4, 1));
    }

    #[test]
    fn test_location_display() {
        let location = Location::new("main.src", 3, 7);
        assert_eq!(
            location.to_string(),
            "Location{filename=main.src, line=3, column=7}"
        );
    }

    #[test]
    fn test_locate_uses_source_name() {
        let index = LineIndex::new("x\ny");
        assert_eq!(index.locate("f", 2), Location::new("f", 2, 1));
    }
}
