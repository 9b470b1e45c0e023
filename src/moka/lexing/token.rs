//! Token type produced by the lexer

use crate::moka::location::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One matched fragment of source: the kind a lexical rule assigned, the captured text, and where
/// it started.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: String,
    pub text: String,
    pub loc: Location,
}

impl Token {
    pub fn new(kind: impl Into<String>, text: impl Into<String>, loc: Location) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.kind, self.text, self.loc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new("T_IDENT", "foo", Location::new("a.src", 1, 4));
        assert_eq!(
            token.to_string(),
            "T_IDENT;foo;Location{filename=a.src, line=1, column=4}"
        );
    }

    #[test]
    fn test_token_equality_is_structural() {
        let a = Token::new("A", "a", Location::new("x", 1, 0));
        assert_eq!(a, Token::new("A", "a", Location::new("x", 1, 0)));
        assert_ne!(a, Token::new("A", "a", Location::new("y", 1, 0)));
    }
}
