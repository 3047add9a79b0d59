//! Low-level scanning core for lexkit.
//!
//! This crate holds everything a hand-written grammar needs to walk a text
//! buffer speculatively:
//! - [`char_class`]: code-point classification predicates
//! - [`Token`] and [`TokenType`]: the produced token shape
//! - [`LiteralSet`] and [`Lookup`]: ordered literal lists and the
//!   direction/case resolution used to match them
//! - [`ScanState`]: scan pointer, extraction pointer, line tracking,
//!   nesting frames and the consumer failure channel
//!
//! The crate has no knowledge of token definitions or extractors; those live
//! in the `lexkit` crate, which layers a combinator library and a tokenizer
//! engine on top of [`ScanState`].
//!
//! # Positions
//!
//! Pointers are byte offsets into the UTF-8 buffer and always sit on
//! character boundaries. Count arguments (`advance_n`, `commit_n`,
//! `extract_with`, `peek`) count `char`s, never bytes.

pub mod char_class;
mod literal;
mod nesting;
mod scan_state;
mod token;

pub use literal::{CaseMode, Direction, LiteralSet, Lookup, Matcher};
pub use nesting::NestingError;
pub use scan_state::{IgnorePrefix, LineEnd, ScanState};
pub use token::{Token, TokenType};
