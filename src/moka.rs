//! Rule engine for small declarative languages
//!
//!     lexing    Priority-ordered regex rules turning source text into located tokens.
//!     grammar   Grammar rule lines expanded into every concrete alternative they accept,
//!               and merged per target.
//!
//! The two pipelines are independent: nothing here runs a grammar against a token stream.

pub mod config;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod lexing;
pub mod location;

/// Numbered (1-based) definition lines of a rule file, skipping blank lines and `#` comments.
///
/// Lines may end in `\n`, `\r\n` or a lone `\r`.
pub(crate) fn definition_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .flat_map(|line| line.split('\r'))
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_lines_numbering() {
        let lines: Vec<(usize, &str)> =
            definition_lines("A : b\n\n# note\r\nC : d\rE : f").collect();
        assert_eq!(lines, vec![(1, "A : b"), (4, "C : d"), (5, "E : f")]);
    }
}
