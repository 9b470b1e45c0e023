//! Integration tests for the lexer driven by rule files
//!
//! The fixtures under `tests/fixtures` define a tiny assignment language; these tests load its
//! lexical rules the way an application would and check the produced token stream.

use moka::{sort_by_priority, LexFile, LexRule, Lexer, Location, Token};
use rstest::rstest;
use std::fs;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(path).expect("Failed to read fixture")
}

fn assign_lexer() -> Lexer {
    let mut rules = LexFile::parse("assign", &fixture("assign.lex"))
        .expect("fixture rules parse")
        .into_rules();
    sort_by_priority(&mut rules);
    Lexer::new(rules)
}

fn kinds(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.kind.as_str()).collect()
}

#[test]
fn test_program_tokenization() {
    let tokens = assign_lexer()
        .process(&fixture("program.src"), Some("program.src"))
        .unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            "T_VAR",
            "T_WHITESPACE",
            "T_IDENT",
            "T_WHITESPACE",
            "T_ASSIGN",
            "T_WHITESPACE",
            "T_NUMBER",
            "T_SEMI",
            "T_NEWLINE",
            "T_IDENT",
            "T_WHITESPACE",
            "T_ASSIGN",
            "T_WHITESPACE",
            "T_STRING",
            "T_SEMI",
            "T_NEWLINE",
        ]
    );

    // string literals keep only their captured contents
    assert_eq!(tokens[13].text, "hi");
    assert_eq!(tokens[13].loc, Location::new("program.src", 2, 5));
    assert_eq!(tokens[14].loc, Location::new("program.src", 2, 9));
}

#[test]
fn test_token_rendering() {
    let tokens = assign_lexer().process("var", Some("one.src")).unwrap();
    insta::assert_snapshot!(
        tokens[0].to_string(),
        @"T_VAR;var;Location{filename=one.src, line=1, column=0}"
    );
}

#[rstest]
#[case("x=1", vec!["T_IDENT", "T_ASSIGN", "T_NUMBER"])]
#[case("variable", vec!["T_IDENT"])]
#[case("var var", vec!["T_VAR", "T_WHITESPACE", "T_VAR"])]
#[case("\"a b\";", vec!["T_STRING", "T_SEMI"])]
#[case("1\r\n2", vec!["T_NUMBER", "T_NEWLINE", "T_NUMBER"])]
fn test_kinds_for_snippets(#[case] source: &str, #[case] expected: Vec<&str>) {
    let tokens = assign_lexer().process(source, Some("snippet")).unwrap();
    assert_eq!(kinds(&tokens), expected);
}

#[rstest]
#[case("x = @", 1, 4)]
#[case("x = 1;\n  y = #", 2, 7)]
fn test_unmatched_input_is_a_syntax_error(
    #[case] source: &str,
    #[case] line: usize,
    #[case] column: usize,
) {
    let err = assign_lexer().process(source, Some("bad.src")).unwrap_err();
    assert_eq!(err.location, Location::new("bad.src", line, column));
}

#[test]
fn test_array_order_decides_not_priority() {
    // Unsorted: the identifier rule comes first even though its priority is higher
    let rules = vec![
        LexRule::new(2, "T_IDENT", "[a-z]+").unwrap(),
        LexRule::new(1, "T_VAR", "var").unwrap(),
    ];
    let tokens = Lexer::new(rules.clone()).process("var", Some("s")).unwrap();
    assert_eq!(kinds(&tokens), vec!["T_IDENT"]);

    let mut sorted = rules;
    sort_by_priority(&mut sorted);
    let tokens = Lexer::new(sorted).process("var", Some("s")).unwrap();
    assert_eq!(kinds(&tokens), vec!["T_VAR"]);
}

#[test]
fn test_strip_whitespace_drops_blank_tokens() {
    let rules = LexFile::parse("assign", &fixture("assign.lex"))
        .unwrap()
        .into_rules()
        .into_iter()
        .filter(|rule| rule.kind() != "T_WHITESPACE" && rule.kind() != "T_NEWLINE")
        .collect();
    let lexer = Lexer::new(rules).with_strip_whitespace(true);
    let tokens = lexer.process("\n  x = 1 ;\n\ty = 2\n", Some("s")).unwrap();
    assert_eq!(
        kinds(&tokens),
        vec!["T_IDENT", "T_ASSIGN", "T_NUMBER", "T_SEMI", "T_IDENT", "T_ASSIGN", "T_NUMBER"]
    );
    // trimmed source is "x = 1 ;\n\ty = 2"; 'y' sits two bytes past the newline
    assert_eq!(tokens[4].loc, Location::new("s", 2, 2));
}
