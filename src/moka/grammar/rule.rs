//! Grammar rules and their alternatives
//!
//! A rule definition line reads `TARGET : ELEMENT ELEMENT? (ELEMENT ELEMENT)? ...`. Parsing it
//! yields a [`GrammarRule`]: the target plus the set of every concrete [`GrammarAlternative`] the
//! body permits. Rules for the same target can be merged; rules for different targets cannot.

use crate::moka::cursor::Cursor;
use crate::moka::error::{FormatError, MismatchedTargetError};
use crate::moka::grammar::element::{collapse, expand, parse_elements};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One fully expanded sequence of token kinds and rule names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GrammarAlternative(Vec<String>);

impl GrammarAlternative {
    pub fn new(elements: Vec<String>) -> Self {
        Self(elements)
    }

    pub fn elements(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for GrammarAlternative {
    fn from(elements: Vec<String>) -> Self {
        Self(elements)
    }
}

impl From<&[&str]> for GrammarAlternative {
    fn from(elements: &[&str]) -> Self {
        Self(elements.iter().map(|name| name.to_string()).collect())
    }
}

impl fmt::Display for GrammarAlternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// A target and every alternative it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarRule {
    target: String,
    alternatives: BTreeSet<GrammarAlternative>,
}

impl GrammarRule {
    /// Parse one rule definition line.
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let mut cursor = Cursor::new(source);
        let target = cursor.read_until(':').trim();
        if cursor.at_end() {
            return Err(FormatError::new(
                format!("Rule Parse {}", target),
                "Missing ':' between target and rule body",
            ));
        }
        if target.is_empty() {
            return Err(FormatError::new("Rule Parse", "Missing rule target"));
        }
        cursor.skip(1);

        let flat = parse_elements(target, cursor.remaining())?;
        let elements = collapse(target, flat)?;
        if log::log_enabled!(log::Level::Trace) {
            let shape: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
            log::trace!("Rule {} collapsed to {}", target, shape.join(" "));
        }

        let alternatives = expand(&elements)
            .into_iter()
            .map(GrammarAlternative::from)
            .collect();

        Ok(Self {
            target: target.to_string(),
            alternatives,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn alternatives(&self) -> &BTreeSet<GrammarAlternative> {
        &self.alternatives
    }

    pub fn contains(&self, names: &[&str]) -> bool {
        self.alternatives.contains(&GrammarAlternative::from(names))
    }

    /// Union `other`'s alternatives into this rule.
    ///
    /// Fails, leaving this rule untouched, when the targets differ.
    pub fn merge(&mut self, other: GrammarRule) -> Result<(), MismatchedTargetError> {
        if self.target != other.target {
            return Err(MismatchedTargetError {
                expected: self.target.clone(),
                found: other.target,
            });
        }
        self.absorb(other);
        Ok(())
    }

    /// Union without the target check; callers guarantee the targets match.
    pub(crate) fn absorb(&mut self, other: GrammarRule) {
        log::trace!(
            "Merging {} alternative(s) into {}",
            other.alternatives.len(),
            self.target
        );
        self.alternatives.extend(other.alternatives);
    }
}

impl FromStr for GrammarRule {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrammarRule::parse(s)
    }
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target: {}", self.target)?;
        for alternative in &self.alternatives {
            write!(f, "\n\t{}", alternative)?;
        }
        Ok(())
    }
}
