//! Lexing
//!
//!     Lexical rules come from rule files (see [lex_file]) or are built directly with
//!     [`LexRule::new`]. Each rule is a priority, a token kind and a regex that is always anchored
//!     to the cursor. The [`Lexer`] tries its rules in the order given and emits a [`Token`] for
//!     the first non-empty match, failing with a `SyntaxError` when nothing matches.
//!
//!     Ordering is the caller's job. Rule files are usually loaded from several places and
//!     concatenated, then stable-sorted with [`sort_by_priority`] before building the lexer.

pub mod lex_file;
pub mod lexer;
pub mod rule;
pub mod token;

pub use lex_file::LexFile;
pub use lexer::Lexer;
pub use rule::{sort_by_priority, LexRule, RuleMatch};
pub use token::Token;
