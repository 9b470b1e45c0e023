//! Rule body trees
//!
//!     A rule body is read in three passes:
//!
//!     1. [`parse_elements`] turns the body text into a flat list of atomic elements, each
//!        remembering how many brackets it opens and closes and whether a `?` followed it.
//!     2. [`collapse`] folds bracketed runs into [`Element::Group`]s with a stack of open frames.
//!        A `?` after an element that closes groups marks the outermost group it closes.
//!     3. [`expand`] walks the tree left to right, forking every in-progress sequence at each
//!        optional element, and returns every concrete name sequence the body accepts.
//!
//!     Nesting is unrestricted: `((A B)? C)?` expands its inner optional group as well as the
//!     outer one.

use crate::moka::error::FormatError;
use crate::moka::grammar::syntax::RuleToken;
use logos::Logos;
use std::fmt;

/// Bracket and optional markers attached to an atomic element while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    pub optional: bool,
    pub opens: usize,
    pub closes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Atomic { name: String, markers: Markers },
    Group { children: Vec<Element>, optional: bool },
}

impl Element {
    pub fn atomic(name: impl Into<String>, optional: bool) -> Self {
        Element::Atomic {
            name: name.into(),
            markers: Markers {
                optional,
                ..Markers::default()
            },
        }
    }

    pub fn is_optional(&self) -> bool {
        match self {
            Element::Atomic { markers, .. } => markers.optional,
            Element::Group { optional, .. } => *optional,
        }
    }

    fn set_optional(&mut self) {
        match self {
            Element::Atomic { markers, .. } => markers.optional = true,
            Element::Group { optional, .. } => *optional = true,
        }
    }

    /// Every sequence this element produces when it is present.
    fn variants(&self) -> Vec<Vec<String>> {
        match self {
            Element::Atomic { name, .. } => vec![vec![name.clone()]],
            Element::Group { children, .. } => expand(children),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Atomic { name, markers } => {
                write!(
                    f,
                    "{}{}{}",
                    "(".repeat(markers.opens),
                    name,
                    ")".repeat(markers.closes)
                )?;
            }
            Element::Group { children, .. } => {
                let inner: Vec<String> = children.iter().map(|c| c.to_string()).collect();
                write!(f, "({})", inner.join(" "))?;
            }
        }
        if self.is_optional() {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// Read a rule body into flat atomic elements.
pub fn parse_elements(target: &str, body: &str) -> Result<Vec<Element>, FormatError> {
    let context = || format!("Rule Parse {}", target);
    let mut elements: Vec<Element> = Vec::new();
    let mut lexer = RuleToken::lexer(body);

    while let Some(token) = lexer.next() {
        match token {
            Ok(RuleToken::Element(text)) => {
                let name = text.trim_start_matches('(').trim_end_matches(')');
                let opens = text.len() - text.trim_start_matches('(').len();
                let closes = text.len() - text.trim_end_matches(')').len();
                elements.push(Element::Atomic {
                    name: name.to_string(),
                    markers: Markers {
                        optional: false,
                        opens,
                        closes,
                    },
                });
            }
            Ok(RuleToken::Optional) => match elements.last_mut() {
                None => {
                    return Err(FormatError::new(
                        context(),
                        "Dangling optional operator; no prior token",
                    ))
                }
                Some(last) if last.is_optional() => {
                    log::debug!("Redundant optional operator for {} rule", target);
                }
                Some(last) => last.set_optional(),
            },
            Ok(RuleToken::OpenBracket) | Ok(RuleToken::CloseBracket) => {
                return Err(FormatError::new(
                    context(),
                    "Unattached bracket in rule; remove whitespace between bracket and target token",
                ))
            }
            Err(()) => {
                return Err(FormatError::new(
                    context(),
                    format!(
                        "Unexpected '{}' at offset {}",
                        lexer.slice(),
                        lexer.span().start
                    ),
                ))
            }
        }
    }

    Ok(elements)
}

/// Fold bracketed runs of a flat element list into groups.
pub fn collapse(target: &str, flat: Vec<Element>) -> Result<Vec<Element>, FormatError> {
    let context = || format!("Rule Parse {}", target);
    let mut frames: Vec<Vec<Element>> = vec![Vec::new()];

    for element in flat {
        let (name, markers) = match element {
            Element::Atomic { name, markers } => (name, markers),
            group @ Element::Group { .. } => {
                push_into_top(&mut frames, group);
                continue;
            }
        };

        for _ in 0..markers.opens {
            frames.push(Vec::new());
        }
        push_into_top(
            &mut frames,
            Element::atomic(name, markers.optional && markers.closes == 0),
        );

        for closed in 1..=markers.closes {
            if frames.len() < 2 {
                return Err(FormatError::new(context(), "Unmatched closing bracket"));
            }
            let children = frames.pop().unwrap_or_default();
            let group = Element::Group {
                children,
                optional: markers.optional && closed == markers.closes,
            };
            push_into_top(&mut frames, group);
        }
    }

    if frames.len() != 1 {
        return Err(FormatError::new(
            context(),
            format!("{} bracket group(s) left unclosed", frames.len() - 1),
        ));
    }
    Ok(frames.pop().unwrap_or_default())
}

fn push_into_top(frames: &mut Vec<Vec<Element>>, element: Element) {
    if let Some(top) = frames.last_mut() {
        top.push(element);
    }
}

/// Every concrete name sequence accepted by `elements`.
///
/// Sequences that include an optional element come before those that skip it.
pub fn expand(elements: &[Element]) -> Vec<Vec<String>> {
    let mut sequences: Vec<Vec<String>> = vec![Vec::new()];

    for element in elements {
        let variants = element.variants();
        let mut extended = Vec::with_capacity(sequences.len() * (variants.len() + 1));
        for sequence in &sequences {
            for variant in &variants {
                let mut next = sequence.clone();
                next.extend(variant.iter().cloned());
                extended.push(next);
            }
        }
        if element.is_optional() {
            extended.extend(sequences);
        }
        sequences = extended;
    }

    sequences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(body: &str) -> Vec<Element> {
        let flat = parse_elements("S", body).expect("body parses");
        collapse("S", flat).expect("brackets balance")
    }

    fn expanded(body: &str) -> Vec<Vec<String>> {
        expand(&tree(body))
    }

    fn seq(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_flat_parse_records_markers() {
        let flat = parse_elements("S", "(A B)? C").unwrap();
        assert_eq!(
            flat,
            vec![
                Element::Atomic {
                    name: "A".into(),
                    markers: Markers {
                        optional: false,
                        opens: 1,
                        closes: 0
                    }
                },
                Element::Atomic {
                    name: "B".into(),
                    markers: Markers {
                        optional: true,
                        opens: 0,
                        closes: 1
                    }
                },
                Element::atomic("C", false),
            ]
        );
    }

    #[test]
    fn test_collapse_builds_group_with_closing_optional() {
        assert_eq!(
            tree("(A B)? C"),
            vec![
                Element::Group {
                    children: vec![Element::atomic("A", false), Element::atomic("B", false)],
                    optional: true,
                },
                Element::atomic("C", false),
            ]
        );
    }

    #[test]
    fn test_display_round_trips_shape() {
        let rendered: Vec<String> = tree("X ((A? B) C)? D").iter().map(|e| e.to_string()).collect();
        assert_eq!(rendered, vec!["X", "((A? B) C)?", "D"]);
    }

    #[test]
    fn test_required_group_flattens() {
        assert_eq!(expanded("(The Worst)"), vec![seq(&["The", "Worst"])]);
    }

    #[test]
    fn test_optional_atomic_forks() {
        assert_eq!(
            expanded("A B? C"),
            vec![seq(&["A", "B", "C"]), seq(&["A", "C"])]
        );
    }

    #[test]
    fn test_self_closed_element_is_plain() {
        assert_eq!(expanded("(A)? B"), expanded("A? B"));
    }

    #[test]
    fn test_nested_groups_expand_inner_optionals() {
        let mut sequences = expanded("((A B)? C)?");
        sequences.sort();
        assert_eq!(
            sequences,
            vec![seq(&[]), seq(&["A", "B", "C"]), seq(&["C"])]
        );
    }

    #[test]
    fn test_optional_inside_group() {
        assert_eq!(
            expanded("(A? B) C"),
            vec![seq(&["A", "B", "C"]), seq(&["B", "C"])]
        );
    }

    #[test]
    fn test_dangling_optional() {
        let err = parse_elements("S", "? A").unwrap_err();
        assert_eq!(err.context, "Rule Parse S");
        assert!(err.reason.contains("Dangling optional"));
    }

    #[test]
    fn test_redundant_optional_is_tolerated() {
        assert_eq!(expanded("A? ? B"), expanded("A? B"));
    }

    #[test]
    fn test_detached_bracket_is_rejected() {
        let err = parse_elements("S", "( A B)").unwrap_err();
        assert!(err.reason.contains("Unattached bracket"));
    }

    #[test]
    fn test_unbalanced_brackets() {
        let unmatched = collapse("S", parse_elements("S", "A B)").unwrap()).unwrap_err();
        assert!(unmatched.reason.contains("Unmatched closing"));
        let unclosed = collapse("S", parse_elements("S", "(A B").unwrap()).unwrap_err();
        assert!(unclosed.reason.contains("unclosed"));
    }

    #[test]
    fn test_unexpected_character() {
        let err = parse_elements("S", "A | B").unwrap_err();
        assert!(err.reason.contains("'|'"));
    }
}
