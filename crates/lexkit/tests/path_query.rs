//! A small path-query language built on the tokenizer.
//!
//! These tests drive a realistic grammar end to end: ordered literal
//! definitions, ignored whitespace, quoted values, virtual token types
//! assigned by a consumer, the nesting frames and cancellation.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lexkit::extractors::{decimal, identifier, literal, quoted_string, whitespace};
use lexkit::{CaseMode, Extractor, Token, TokenDefinition, TokenType, Tokenizer};
use pretty_assertions::assert_eq;

const OPERATORS: [&str; 13] = [
    "+", "-", "/", "%", "=", "!=", "!==", ">=", "<=", "<", "&&", "||", "!",
];

fn exact(literals: &[&str]) -> Extractor {
    literal(literals, CaseMode::Sensitive)
}

fn path_query() -> Tokenizer {
    let names = [
        ("SLASH", exact(&["/"])),
        ("NUMBER", decimal()),
        ("STRING", quoted_string()),
        ("WILDCARD", exact(&["..", "**"])),
        ("DOLLAR", exact(&["$"])),
        ("ASTERISK", exact(&["*"])),
        ("OPERATOR", exact(&OPERATORS)),
        ("PARENTHESIS_OPEN", exact(&["("])),
        ("PARENTHESIS_CLOSE", exact(&[")"])),
        ("BRACKET_OPEN", exact(&["["])),
        ("BRACKET_CLOSE", exact(&["]"])),
        ("COMMA", exact(&[","])),
        ("DOT", exact(&["."])),
        ("ANGLE", exact(&[">"])),
        ("ATTR_PREFIX", exact(&["@"])),
        ("AXE_SEPARATOR", exact(&["::"])),
        ("NAME", identifier()),
    ];

    let mut definitions: Vec<TokenDefinition> = names
        .into_iter()
        .zip(0..)
        .map(|((name, extractor), kind)| TokenDefinition::new(kind, name, extractor))
        .collect();
    definitions.push(TokenDefinition::new(17, "SPACE", whitespace()).ignored());
    for (kind, name) in (18..).zip(["FUNCTION", "ELEMENT", "ATTRIBUTE", "VARIABLE"]) {
        definitions.push(TokenDefinition::virtual_type(kind, name));
    }
    Tokenizer::new(definitions).unwrap()
}

/// `(type name, value)` pairs, with `UNKNOWN` for unrecognized chars.
fn named(
    tokenizer: &Tokenizer,
    tokens: impl IntoIterator<Item = Token>,
) -> Vec<(String, String)> {
    tokens
        .into_iter()
        .map(|token| {
            let name = tokenizer.token_name(token.kind).unwrap_or("UNKNOWN");
            (name.to_owned(), token.value)
        })
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|&(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
}

fn tokenize(text: &str) -> Vec<(String, String)> {
    let tokenizer = path_query();
    let tokens: Vec<Token> = tokenizer.generate(text).collect();
    named(&tokenizer, tokens)
}

// === Plain tokenization ===

#[test]
fn element_with_attribute_predicate() {
    assert_eq!(
        tokenize("parent:div[@class='container']"),
        pairs(&[
            ("NAME", "parent"),
            ("UNKNOWN", ":"),
            ("NAME", "div"),
            ("BRACKET_OPEN", "["),
            ("ATTR_PREFIX", "@"),
            ("NAME", "class"),
            ("OPERATOR", "="),
            ("STRING", "container"),
            ("BRACKET_CLOSE", "]"),
        ])
    );
}

#[test]
fn unknown_token_uses_reserved_type() {
    let tokenizer = path_query();
    let unknown = tokenizer.generate("a:b").nth(1).unwrap();
    assert_eq!(unknown.kind, TokenType::UNKNOWN);
    assert_eq!(unknown.kind.raw(), -1);
    assert_eq!(unknown.value, ":");
}

#[test]
fn descendant_path_with_comparison() {
    assert_eq!(
        tokenize("//book[ price > 35.5 ]/title"),
        pairs(&[
            ("SLASH", "/"),
            ("SLASH", "/"),
            ("NAME", "book"),
            ("BRACKET_OPEN", "["),
            ("NAME", "price"),
            ("ANGLE", ">"),
            ("NUMBER", "35.5"),
            ("BRACKET_CLOSE", "]"),
            ("SLASH", "/"),
            ("NAME", "title"),
        ])
    );
}

#[test]
fn axis_and_wildcards() {
    assert_eq!(
        tokenize("child::* | ../**"),
        pairs(&[
            ("NAME", "child"),
            ("AXE_SEPARATOR", "::"),
            ("ASTERISK", "*"),
            ("UNKNOWN", "|"),
            ("WILDCARD", ".."),
            ("SLASH", "/"),
            ("WILDCARD", "**"),
        ])
    );
}

#[test]
fn operator_list_is_first_match() {
    // `!=` is listed before `!==`, so the longer operator is split.
    assert_eq!(
        tokenize("$a !== 1"),
        pairs(&[
            ("DOLLAR", "$"),
            ("NAME", "a"),
            ("OPERATOR", "!="),
            ("OPERATOR", "="),
            ("NUMBER", "1"),
        ])
    );
}

#[test]
fn lone_dot_is_not_a_number() {
    assert_eq!(
        tokenize(". .5"),
        pairs(&[("DOT", "."), ("NUMBER", ".5")])
    );
}

// === Lookups ===

#[test]
fn type_names_round_trip() {
    let tokenizer = path_query();
    assert_eq!(tokenizer.len(), 22);
    for def in tokenizer.definitions() {
        assert_eq!(tokenizer.token_type(def.name()), Some(def.kind()));
        assert_eq!(tokenizer.token_name(def.kind()), Some(def.name()));
    }
    assert!(tokenizer.is_ignored(tokenizer.token_type("SPACE").unwrap()));
    assert!(tokenizer.is_ignored(tokenizer.token_type("FUNCTION").unwrap()));
    assert!(!tokenizer.is_ignored(tokenizer.token_type("NAME").unwrap()));
}

// === Consumer grammar ===

/// Retype a name followed by `(` as a function, holding the name in the
/// nesting frame until the next token decides.
fn with_functions(tokenizer: &Tokenizer, text: &str) -> Vec<Token> {
    let name = tokenizer.token_type("NAME").unwrap();
    let open = tokenizer.token_type("PARENTHESIS_OPEN").unwrap();
    let function = tokenizer.token_type("FUNCTION").unwrap();

    let mut stream = tokenizer.generate(text);
    let mut out = Vec::new();
    while let Some(token) = stream.next() {
        let state = stream.state_mut();
        if let Some(pending) = state.pop() {
            let kind = if token.kind == open { function } else { pending.kind };
            out.push(Token::new(kind, pending.value));
        }
        if token.kind == name {
            state.push(token);
        } else {
            out.push(token);
        }
    }
    out.extend(stream.state_mut().pop());
    out
}

#[test]
fn consumer_assigns_virtual_types() {
    let tokenizer = path_query();
    let tokens = with_functions(&tokenizer, "count(//item) + total");
    assert_eq!(
        named(&tokenizer, tokens),
        pairs(&[
            ("FUNCTION", "count"),
            ("PARENTHESIS_OPEN", "("),
            ("SLASH", "/"),
            ("SLASH", "/"),
            ("NAME", "item"),
            ("PARENTHESIS_CLOSE", ")"),
            ("OPERATOR", "+"),
            ("NAME", "total"),
        ])
    );
}

#[test]
fn consumer_cancels_on_unbalanced_bracket() {
    let tokenizer = path_query();
    let open = tokenizer.token_type("BRACKET_OPEN").unwrap();
    let close = tokenizer.token_type("BRACKET_CLOSE").unwrap();

    let mut stream = tokenizer.generate("a[b]]c[d");
    let mut seen = Vec::new();
    while let Some(token) = stream.next() {
        let state = stream.state_mut();
        if token.kind == open {
            state.push_level();
        } else if token.kind == close && state.pop_level().is_err() {
            let message = format!("unbalanced `]` at column {}", state.line_position());
            state.cancel(message);
        }
        seen.push(token.value);
    }

    assert_eq!(seen, ["a", "[", "b", "]", "]"]);
    let state = stream.state();
    assert!(state.is_canceled());
    assert_eq!(state.error(), Some("unbalanced `]` at column 5"));
    assert_eq!(state.line_text(lexkit::LineEnd::Terminator), "a[b]]c[d");
}
