//! Tokens of a grammar rule body
//!
//! Whitespace separates tokens and is dropped. Brackets are only meaningful when fused to an
//! identifier (`(A`, `B)`, `((C`); a bracket standing on its own lexes as
//! [`RuleToken::OpenBracket`]/[`RuleToken::CloseBracket`] so the parser can reject it.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0B\f]+")]
pub enum RuleToken {
    /// An identifier with any fused brackets, e.g. `(T_IDENT` or `S_DATA))`
    #[regex(r"\(*[A-Za-z0-9_]+\)*", |lex| lex.slice().to_owned())]
    Element(String),

    #[token("?")]
    Optional,

    #[token("(")]
    OpenBracket,

    #[token(")")]
    CloseBracket,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(body: &str) -> Vec<Result<RuleToken, ()>> {
        RuleToken::lexer(body).collect()
    }

    #[test]
    fn test_identifiers_and_markers() {
        assert_eq!(
            lex("A B? C ?"),
            vec![
                Ok(RuleToken::Element("A".into())),
                Ok(RuleToken::Element("B".into())),
                Ok(RuleToken::Optional),
                Ok(RuleToken::Element("C".into())),
                Ok(RuleToken::Optional),
            ]
        );
    }

    #[test]
    fn test_fused_brackets_stay_with_identifier() {
        assert_eq!(
            lex("((A B) C)?"),
            vec![
                Ok(RuleToken::Element("((A".into())),
                Ok(RuleToken::Element("B)".into())),
                Ok(RuleToken::Element("C)".into())),
                Ok(RuleToken::Optional),
            ]
        );
    }

    #[test]
    fn test_detached_brackets() {
        assert_eq!(
            lex("( A )"),
            vec![
                Ok(RuleToken::OpenBracket),
                Ok(RuleToken::Element("A".into())),
                Ok(RuleToken::CloseBracket),
            ]
        );
    }

    #[test]
    fn test_any_ascii_whitespace_separates() {
        assert_eq!(
            lex("A\u{0B}B\u{0C}C\r\nD"),
            vec![
                Ok(RuleToken::Element("A".into())),
                Ok(RuleToken::Element("B".into())),
                Ok(RuleToken::Element("C".into())),
                Ok(RuleToken::Element("D".into())),
            ]
        );
    }

    #[test]
    fn test_unknown_character_is_error() {
        assert_eq!(lex("A | B")[1], Err(()));
    }
}
