//! Unit tests for the structural splitter.

use super::splitter::{split, BracketPair, TokenGroup};

fn fragment(text: &str) -> TokenGroup {
    TokenGroup::Fragment(text.to_string())
}

fn split_curly(text: &str) -> Vec<TokenGroup> {
    split(text, BracketPair::CURLY, 64).unwrap()
}

#[test]
fn test_no_brackets_returns_trimmed_input() {
    let output = split_curly("  hello\nworld  ");

    assert_eq!(output, vec![fragment("hello\nworld")]);
}

#[test]
fn test_single_block() {
    let output = split_curly("hello {\nblock\n}\nworld");

    assert_eq!(
        output,
        vec![
            fragment("hello"),
            TokenGroup::Group(vec![fragment("block")]),
            fragment("world"),
        ]
    );
}

#[test]
fn test_nested_blocks() {
    let source = "hello {\n    blocks {\n        all {\n            the {\n                way {\n                    down {\n                    }\n                }\n            }\n        }\n    }\n}\nworld";
    let output = split_curly(source);

    assert_eq!(output.len(), 3);
    assert_eq!(output[0].as_fragment(), Some("hello"));
    assert_eq!(output[2].as_fragment(), Some("world"));

    let mut level = output[1].as_group().unwrap();
    for name in ["blocks", "all", "the", "way", "down"] {
        assert_eq!(level.len(), 2);
        assert_eq!(level[0].as_fragment(), Some(name));
        level = level[1].as_group().unwrap();
    }
    assert!(level.is_empty());
    assert_eq!(output[1].depth(), 6);
}

#[test]
fn test_parentheses() {
    let output = split("2 * ((x + 1) / 2)", BracketPair::PAREN, 64).unwrap();

    assert_eq!(
        output,
        vec![
            fragment("2 *"),
            TokenGroup::Group(vec![
                TokenGroup::Group(vec![fragment("x + 1")]),
                fragment("/ 2"),
            ]),
        ]
    );
}

#[test]
fn test_sibling_groups() {
    let output = split("(a) - (b) - c", BracketPair::PAREN, 64).unwrap();

    assert_eq!(
        output,
        vec![
            TokenGroup::Group(vec![fragment("a")]),
            fragment("-"),
            TokenGroup::Group(vec![fragment("b")]),
            fragment("- c"),
        ]
    );
}

#[test]
fn test_brackets_inside_literals_are_inert() {
    let output = split_curly("a \"{ not a block }\" b '}' c");

    assert_eq!(output, vec![fragment("a \"{ not a block }\" b '}' c")]);
}

#[test]
fn test_single_quote_inside_string_is_inert() {
    let output = split_curly("s = \"it's\" { x }");

    assert_eq!(
        output,
        vec![fragment("s = \"it's\""), TokenGroup::Group(vec![fragment("x")])]
    );
}

#[test]
fn test_unmatched_close_at_top_level_is_text() {
    let output = split_curly("a } b");

    assert_eq!(output, vec![fragment("a } b")]);
}

#[test]
fn test_unmatched_open_keeps_partial_group() {
    let output = split_curly("a { b { c");

    assert_eq!(
        output,
        vec![
            fragment("a"),
            TokenGroup::Group(vec![fragment("b"), TokenGroup::Group(vec![fragment("c")])]),
        ]
    );
}

#[test]
fn test_depth_limit() {
    let error = split("((((x))))", BracketPair::PAREN, 2).unwrap_err();

    assert_eq!(error.get_error_name(), "RecursionLimitExceeded");
    assert!(split("((x))", BracketPair::PAREN, 2).is_ok());
}

#[test]
fn test_default_brackets_are_curly() {
    assert_eq!(BracketPair::default(), BracketPair::CURLY);
}
