//! Forward-only text cursor
//!
//! A small scanner over a borrowed string. It knows nothing about tokens or rules; the lexer and
//! the grammar rule parser drive it. Positions are byte offsets into the original string and
//! always sit on a char boundary.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LEADING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+").expect("whitespace pattern is valid"));

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Everything from the cursor to the end of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Advance `len` bytes, clamped to the end of the source.
    ///
    /// A position that lands inside a multi-byte char moves forward to the next char boundary.
    pub fn skip(&mut self, len: usize) {
        let mut position = (self.position + len).min(self.source.len());
        while !self.source.is_char_boundary(position) {
            position += 1;
        }
        self.position = position;
    }

    /// Consume text up to (not including) `delimiter`, or to the end if it never occurs.
    pub fn read_until(&mut self, delimiter: char) -> &'a str {
        let rest = self.remaining();
        let len = rest.find(delimiter).unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }

    /// Match `pattern` against the remaining text without advancing.
    ///
    /// Only matches starting exactly at the cursor count.
    pub fn peek(&self, pattern: &Regex) -> Option<Captures<'a>> {
        pattern
            .captures(self.remaining())
            .filter(|caps| caps.get(0).map_or(false, |m| m.start() == 0))
    }

    /// Match `pattern` at the cursor and advance past the whole match.
    pub fn chunk_with(&mut self, pattern: &Regex) -> Option<Captures<'a>> {
        let caps = self.peek(pattern)?;
        let end = caps.get(0).map_or(0, |m| m.end());
        self.position += end;
        Some(caps)
    }

    /// Skip a run of whitespace at the cursor, if any.
    pub fn skip_whitespace(&mut self) {
        let _ = self.chunk_with(&LEADING_WHITESPACE);
    }
}
