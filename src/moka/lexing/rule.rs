//! Lexical rules
//!
//!     A [`LexRule`] maps a regular expression to a token kind. Patterns are anchored: a leading
//!     `^` is injected when missing, and matching always happens against the text remaining at the
//!     cursor, so a rule can only ever match starting exactly at the cursor.
//!
//!     Priority is metadata. The lexer tries rules in the order it was given them; callers that
//!     want priority-first matching sort beforehand with [`sort_by_priority`].

use crate::moka::cursor::Cursor;
use crate::moka::error::FormatError;
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct LexRule {
    priority: i64,
    kind: String,
    pattern: String,
    regex: Regex,
}

/// A successful rule application: the token text and how many bytes the full match consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub text: &'a str,
    pub consumed: usize,
}

impl LexRule {
    /// Build a rule, compiling its pattern.
    pub fn new(
        priority: i64,
        kind: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<Self, FormatError> {
        let kind = kind.into();
        let mut pattern = pattern.into();
        if !pattern.starts_with('^') {
            pattern.insert(0, '^');
        }
        // The group keeps top-level alternations anchored too
        let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|err| {
            FormatError::new(
                format!("Lex Rule {}", kind),
                format!("invalid pattern {}: {}", pattern, err),
            )
        })?;
        Ok(Self {
            priority,
            kind,
            pattern,
            regex,
        })
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The anchored pattern source.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Try this rule at the cursor without advancing it.
    ///
    /// Zero-length matches count as no match. When the pattern has a capture group the token
    /// text is the first group, otherwise the whole match.
    pub fn apply<'a>(&self, cursor: &Cursor<'a>) -> Option<RuleMatch<'a>> {
        let caps = cursor.peek(&self.regex)?;
        let whole = caps.get(0)?;
        if whole.as_str().is_empty() {
            return None;
        }
        let text = if caps.len() > 1 {
            caps.get(1).map_or("", |group| group.as_str())
        } else {
            whole.as_str()
        };
        Some(RuleMatch {
            text,
            consumed: whole.end(),
        })
    }
}

impl PartialEq for LexRule {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.kind == other.kind && self.pattern == other.pattern
    }
}

impl Eq for LexRule {}

impl Hash for LexRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.priority.hash(state);
        self.kind.hash(state);
        self.pattern.hash(state);
    }
}

impl fmt::Display for LexRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} : {}", self.priority, self.kind, self.pattern)
    }
}

/// Stable ascending sort by priority; equal priorities keep their relative order.
pub fn sort_by_priority(rules: &mut [LexRule]) {
    rules.sort_by_key(LexRule::priority);
}
