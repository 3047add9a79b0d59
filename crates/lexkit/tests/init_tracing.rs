//! Subscriber installation through `init_tracing`.
//!
//! Lives in its own test binary: the global subscriber can only be set once
//! per process.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lexkit::extractors::{identifier, whitespace};
use lexkit::{Token, TokenDefinition, Tokenizer};
use pretty_assertions::assert_eq;

#[test]
fn init_tracing_installs_once() {
    std::env::set_var("RUST_LOG", "lexkit=trace");
    lexkit::init_tracing();
    // A second call must not try to install another global subscriber.
    lexkit::init_tracing();
    assert!(tracing::enabled!(target: "lexkit", tracing::Level::TRACE));
    assert!(!tracing::enabled!(target: "other", tracing::Level::DEBUG));

    // Instrumented paths run under the installed subscriber.
    let tokenizer = Tokenizer::new([
        TokenDefinition::new(1, "NAME", identifier()),
        TokenDefinition::new(2, "SPACE", whitespace()).ignored(),
    ])
    .unwrap();
    let tokens: Vec<Token> = tokenizer.generate("a ?").collect();
    assert_eq!(tokens, [Token::new(1.into(), "a"), Token::unknown('?')]);
}
