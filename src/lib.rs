//! # moka
//!
//! A rule engine for defining small custom languages declaratively.
//!
//! Layout
//!
//! src/moka
//!   ├── lexing     Lexical rules, rule files and the lexer producing located tokens
//!   ├── grammar    Grammar rule expansion, rule files and per-target merging
//!   ├── location   Source locations and the newline index used to compute them
//!   ├── cursor     Forward-only text scanner shared by both pipelines
//!   ├── config     Layered configuration (embedded defaults + user files)
//!   └── error      Error types
//!
//! Lexing and grammar expansion are independent pipelines. Turning a token stream into a parse
//! tree with the expanded alternatives is left to consumers of this crate.

pub mod moka;

pub use moka::error::{FormatError, MismatchedTargetError, MokaError, SyntaxError};
pub use moka::grammar::{GrammarAlternative, GrammarFile, GrammarRule, RuleMerger};
pub use moka::lexing::{sort_by_priority, LexFile, LexRule, Lexer, Token};
pub use moka::location::Location;
