//! Lexical rule files
//!
//! One rule per line, three colon-separated fields:
//!
//!     PRIORITY : TOKEN_KIND : REGEX
//!
//! Fields are trimmed. The regex is the rest of the line and may itself contain colons. Blank
//! lines and lines starting with `#` are ignored. Any malformed line rejects the whole file, since
//! a lexer missing one of its rules would silently tokenize differently.

use crate::moka::definition_lines;
use crate::moka::error::FormatError;
use crate::moka::lexing::rule::LexRule;
use chumsky::prelude::*;

type RuleLine = (i64, String, String);

#[derive(Debug, Clone)]
pub struct LexFile {
    module_id: String,
    rules: Vec<LexRule>,
}

impl LexFile {
    pub fn parse(module_id: impl Into<String>, source: &str) -> Result<Self, FormatError> {
        let module_id = module_id.into();
        log::debug!("Reading lexical rules for {}", module_id);

        let mut rules = Vec::new();
        for (number, line) in definition_lines(source) {
            let context = format!("{}:{}", module_id, number);
            let (priority, kind, pattern) = parse_rule_line(line)
                .map_err(|reason| FormatError::new(context.clone(), reason))?;
            let rule = LexRule::new(priority, kind, pattern)
                .map_err(|err| FormatError::new(context, err.reason))?;
            rules.push(rule);
        }

        Ok(Self { module_id, rules })
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    pub fn rules(&self) -> &[LexRule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<LexRule> {
        self.rules
    }
}

fn rule_line() -> impl Parser<char, RuleLine, Error = Simple<char>> {
    let priority = just('-')
        .or_not()
        .then(text::int::<_, Simple<char>>(10))
        .try_map(|(sign, digits), span| {
            let literal = format!("{}{}", sign.map_or("", |_| "-"), digits);
            literal
                .parse::<i64>()
                .map_err(|err| Simple::custom(span, format!("invalid priority: {}", err)))
        })
        .padded();

    let kind = filter(|c: &char| *c != ':')
        .repeated()
        .collect::<String>();

    let pattern = any().repeated().collect::<String>();

    priority
        .then_ignore(just(':'))
        .then(kind)
        .then_ignore(just(':'))
        .then(pattern)
        .then_ignore(end())
        .map(|((priority, kind), pattern)| {
            (priority, kind.trim().to_string(), pattern.trim().to_string())
        })
}

fn parse_rule_line(line: &str) -> Result<RuleLine, String> {
    let (priority, kind, pattern) = rule_line().parse(line).map_err(|errors| {
        errors
            .iter()
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    })?;
    if kind.is_empty() {
        return Err("missing token kind".to_string());
    }
    if pattern.is_empty() {
        return Err(format!("missing pattern for {}", kind));
    }
    Ok((priority, kind, pattern))
}
