//! Composable token extractors and a lazy tokenizer engine.
//!
//! A grammar declares an ordered list of [`TokenDefinition`]s, each pairing a
//! token type with an [`Extractor`] built from the combinators in
//! [`extractors`]. [`Tokenizer::generate`] then turns text into a pull-based
//! [`TokenStream`]:
//!
//! - definitions are tried in declaration order at every position
//! - matches of ignored definitions (whitespace, comments) are skipped
//! - a character nothing recognizes becomes a one-char
//!   [`TokenType::UNKNOWN`] token, so the stream always makes progress
//! - a consumer can stop the stream early through
//!   [`ScanState::cancel`](lexkit_core::ScanState::cancel)
//!
//! Grammars that want finer control drive [`Tokenizer::next`] over their
//! own [`ScanState`] and use its nesting frames directly.
//!
//! # Tracing
//!
//! Matching and stream progress are instrumented with `tracing` at `trace`
//! and `debug` level. Enable output with `RUST_LOG=lexkit=trace` after
//! calling [`init_tracing`].

mod definition;
mod extractor;
pub mod extractors;
mod stream;
mod tokenizer;

pub use definition::{DefinitionError, TokenDefinition};
pub use extractor::Extractor;
pub use extractors::ConditionOptions;
pub use lexkit_core::{
    char_class, CaseMode, Direction, IgnorePrefix, LineEnd, LiteralSet, Lookup, Matcher,
    NestingError, ScanState, Token, TokenType,
};
pub use stream::TokenStream;
pub use tokenizer::Tokenizer;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lexkit=debug` or `RUST_LOG=lexkit=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
