//! Extractor combinators.
//!
//! Each function here builds an [`Extractor`](crate::Extractor) from
//! character predicates, literal sets or other extractors. Option values
//! (case mode, lookup direction, condition flags) are resolved when the
//! extractor is built, so the returned closure never re-reads them.
//!
//! Predicate-based extractors take any `Fn(char) -> bool`; the functions in
//! [`char_class`](crate::char_class) are the usual choice.

mod adapter;
mod basics;
mod literal;

pub use adapter::adapter;
pub use basics::{decimal, identifier, layout, name, number, quoted, quoted_string, run, whitespace};
pub use literal::{conditional, literal, ConditionOptions};
