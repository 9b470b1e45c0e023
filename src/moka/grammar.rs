//! Grammar rules
//!
//!     A grammar rule line names a target and the elements it is built from. Elements may be
//!     marked optional with a trailing `?` and grouped with brackets fused to the first and last
//!     identifier of the group:
//!
//!         S_ASSIGN : (T_VAR T_WS)? T_IDENT T_WS? T_ASSIGN T_WS? S_DATA
//!
//!     Parsing a line expands it into the complete set of concrete alternatives (see [element]
//!     for the three passes). [`RuleMerger`] then unions rules sharing a target, and
//!     [`GrammarFile`] loads a whole file of lines, skipping the malformed ones.
//!
//!     Nothing here consumes alternatives to parse a token stream.

pub mod element;
pub mod grammar_file;
pub mod merger;
pub mod rule;
pub mod syntax;

pub use element::{Element, Markers};
pub use grammar_file::GrammarFile;
pub use merger::RuleMerger;
pub use rule::{GrammarAlternative, GrammarRule};
