//! Error types for the rule engine
//!
//! Each failure family gets its own type so callers can recover at the right granularity: a
//! [`FormatError`] on one grammar rule is usually skipped, while a [`SyntaxError`] aborts the
//! tokenization of that source. [`MokaError`] wraps all of them for callers that chain steps.

use crate::moka::location::Location;
use std::fmt;

/// No lexical rule matched at `location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub location: Location,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}:{}",
            self.message, self.location.filename, self.location.line, self.location.column
        )
    }
}

impl std::error::Error for SyntaxError {}

/// A rule definition (lexical or grammar) could not be understood.
///
/// `context` names what was being parsed, e.g. `Rule Parse S_ASSIGN` or `tokens.lex:4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub context: String,
    pub reason: String,
}

impl FormatError {
    pub fn new(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid format in {}: {}", self.context, self.reason)
    }
}

impl std::error::Error for FormatError {}

/// Attempted to merge grammar rules with different targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchedTargetError {
    pub expected: String,
    pub found: String,
}

impl fmt::Display for MismatchedTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot merge rule for target '{}' into rule for target '{}'",
            self.found, self.expected
        )
    }
}

impl std::error::Error for MismatchedTargetError {}

/// Any error produced while loading rules or running the engine.
#[derive(Debug)]
pub enum MokaError {
    Syntax(SyntaxError),
    Format(FormatError),
    MismatchedTarget(MismatchedTargetError),
    Config(::config::ConfigError),
}

impl fmt::Display for MokaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MokaError::Syntax(err) => write!(f, "Syntax error: {}", err),
            MokaError::Format(err) => write!(f, "Format error: {}", err),
            MokaError::MismatchedTarget(err) => write!(f, "Merge error: {}", err),
            MokaError::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl std::error::Error for MokaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MokaError::Syntax(err) => Some(err),
            MokaError::Format(err) => Some(err),
            MokaError::MismatchedTarget(err) => Some(err),
            MokaError::Config(err) => Some(err),
        }
    }
}

impl From<SyntaxError> for MokaError {
    fn from(err: SyntaxError) -> Self {
        MokaError::Syntax(err)
    }
}

impl From<FormatError> for MokaError {
    fn from(err: FormatError) -> Self {
        MokaError::Format(err)
    }
}

impl From<MismatchedTargetError> for MokaError {
    fn from(err: MismatchedTargetError) -> Self {
        MokaError::MismatchedTarget(err)
    }
}

impl From<::config::ConfigError> for MokaError {
    fn from(err: ::config::ConfigError) -> Self {
        MokaError::Config(err)
    }
}
