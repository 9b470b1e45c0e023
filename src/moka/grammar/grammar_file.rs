//! Grammar rule files
//!
//! One rule per non-blank line; `#` starts a comment line. A malformed rule is logged and
//! recorded in [`GrammarFile::errors`] but never stops the rest of the file from loading.

use crate::moka::definition_lines;
use crate::moka::error::FormatError;
use crate::moka::grammar::rule::GrammarRule;

#[derive(Debug, Clone)]
pub struct GrammarFile {
    module_id: String,
    rules: Vec<GrammarRule>,
    errors: Vec<(usize, FormatError)>,
}

impl GrammarFile {
    pub fn parse(module_id: impl Into<String>, source: &str) -> Self {
        let module_id = module_id.into();
        log::debug!("Reading grammar rules for {}", module_id);

        let mut rules = Vec::new();
        let mut errors = Vec::new();
        for (number, line) in definition_lines(source) {
            match GrammarRule::parse(line) {
                Ok(rule) => rules.push(rule),
                Err(err) => {
                    log::warn!("Skipping rule at {}:{}: {}", module_id, number, err);
                    errors.push((number, err));
                }
            }
        }

        Self {
            module_id,
            rules,
            errors,
        }
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    /// Successfully parsed rules, in file order.
    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    /// Rules that failed to parse, with their 1-based line numbers.
    pub fn errors(&self) -> &[(usize, FormatError)] {
        &self.errors
    }

    pub fn into_rules(self) -> Vec<GrammarRule> {
        self.rules
    }
}
