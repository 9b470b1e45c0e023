//! The rule-driven lexer
//!
//!     A [`Lexer`] owns an ordered list of [`LexRule`]s and turns one source string at a time
//!     into a `Vec<Token>`. At every position the rules are tried in list order and the first
//!     non-empty match wins; if none matches, the whole call fails with a [`SyntaxError`] at that
//!     location. There is no partial output.
//!
//!     With whitespace stripping on, the source is trimmed first and any whitespace after each
//!     token is skipped. Locations are always computed from the newline table of the text actually
//!     scanned (the trimmed source in that mode).

use crate::moka::config::LexerConfig;
use crate::moka::cursor::Cursor;
use crate::moka::error::SyntaxError;
use crate::moka::lexing::rule::LexRule;
use crate::moka::lexing::token::Token;
use crate::moka::location::LineIndex;
use uuid::Uuid;

pub const DEFAULT_SOURCE_EXTENSION: &str = ".source";

#[derive(Debug, Clone)]
pub struct Lexer {
    rules: Vec<LexRule>,
    strip_whitespace: bool,
    anonymous_extension: String,
}

impl Lexer {
    /// Create a lexer trying `rules` in the given order.
    pub fn new(rules: Vec<LexRule>) -> Self {
        Self {
            rules,
            strip_whitespace: false,
            anonymous_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }

    pub fn from_config(rules: Vec<LexRule>, config: &LexerConfig) -> Self {
        Self {
            rules,
            strip_whitespace: config.strip_whitespace,
            anonymous_extension: config.anonymous_source_extension.clone(),
        }
    }

    pub fn with_strip_whitespace(mut self, strip: bool) -> Self {
        self.strip_whitespace = strip;
        self
    }

    pub fn set_strip_whitespace(&mut self, strip: bool) {
        self.strip_whitespace = strip;
    }

    pub fn strip_whitespace(&self) -> bool {
        self.strip_whitespace
    }

    pub fn rules(&self) -> &[LexRule] {
        &self.rules
    }

    /// Tokenize `source`.
    ///
    /// Without a `source_name`, a fresh unique name is generated for this call so locations
    /// from different anonymous sources never compare equal.
    pub fn process(&self, source: &str, source_name: Option<&str>) -> Result<Vec<Token>, SyntaxError> {
        let name = match source_name {
            Some(name) => name.to_string(),
            None => format!("{}{}", Uuid::new_v4(), self.anonymous_extension),
        };
        let source = if self.strip_whitespace {
            source.trim()
        } else {
            source
        };

        log::debug!(
            "Tokenizing {} ({} bytes, {} rules)",
            name,
            source.len(),
            self.rules.len()
        );

        let lines = LineIndex::new(source);
        let mut cursor = Cursor::new(source);
        let mut tokens = Vec::new();

        while !cursor.at_end() {
            let location = lines.locate(&name, cursor.position());
            let matched = self
                .rules
                .iter()
                .find_map(|rule| rule.apply(&cursor).map(|found| (rule, found)));

            let (rule, found) = match matched {
                Some(hit) => hit,
                None => {
                    return Err(SyntaxError::new(
                        "Invalid syntax; no matching token",
                        location,
                    ))
                }
            };

            log::trace!("{} matched {:?} at {}", rule.kind(), found.text, location);
            tokens.push(Token::new(rule.kind(), found.text, location));
            cursor.skip(found.consumed);

            if self.strip_whitespace {
                cursor.skip_whitespace();
            }
        }

        log::debug!("Produced {} tokens for {}", tokens.len(), name);
        Ok(tokens)
    }
}
