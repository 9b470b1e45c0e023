//! Accumulating grammar rules across sources
//!
//! The same target is often defined on several lines, or in several files. [`RuleMerger`] keeps
//! one [`GrammarRule`] per target, unioning alternatives as rules arrive, and remembers the order
//! in which targets were first seen.

use crate::moka::grammar::rule::GrammarRule;
use std::collections::HashMap;
use std::fmt;

/// Not synchronized; callers feeding it from several threads must serialize `add_rule`.
#[derive(Debug, Clone, Default)]
pub struct RuleMerger {
    rules: Vec<GrammarRule>,
    by_target: HashMap<String, usize>,
}

impl RuleMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `rule` into the entry for its target, creating the entry if needed.
    pub fn add_rule(&mut self, rule: GrammarRule) {
        match self.by_target.get(rule.target()) {
            Some(&index) => self.rules[index].absorb(rule),
            None => {
                log::trace!("New grammar target {}", rule.target());
                self.by_target
                    .insert(rule.target().to_string(), self.rules.len());
                self.rules.push(rule);
            }
        }
    }

    /// Accumulated rules in first-seen target order.
    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    pub fn get(&self, target: &str) -> Option<&GrammarRule> {
        self.by_target.get(target).map(|&index| &self.rules[index])
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_rules(self) -> Vec<GrammarRule> {
        self.rules
    }
}

impl Extend<GrammarRule> for RuleMerger {
    fn extend<I: IntoIterator<Item = GrammarRule>>(&mut self, rules: I) {
        for rule in rules {
            self.add_rule(rule);
        }
    }
}

impl FromIterator<GrammarRule> for RuleMerger {
    fn from_iter<I: IntoIterator<Item = GrammarRule>>(rules: I) -> Self {
        let mut merger = RuleMerger::new();
        merger.extend(rules);
        merger
    }
}

impl fmt::Display for RuleMerger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, rule) in self.rules.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}
