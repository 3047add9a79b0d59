//! Predicate-driven extractors: names, runs, layout, quoted values, numbers.

use lexkit_core::char_class::{
    is_digit, is_name_char, is_name_start, is_quotable, is_quote, is_space,
};
use lexkit_core::{IgnorePrefix, Token};

use crate::Extractor;

/// A char satisfying `start` followed by any run of chars satisfying `body`.
pub fn name<S, B>(start: S, body: B) -> Extractor
where
    S: Fn(char) -> bool + Send + Sync + 'static,
    B: Fn(char) -> bool + Send + Sync + 'static,
{
    Extractor::new(move |state, kind| {
        if !state.current().is_some_and(&start) {
            return None;
        }
        while state.advance() && state.current().is_some_and(&body) {}
        Some(Token::new(kind, state.extract()))
    })
}

/// XML-style names: [`is_name_start`] then [`is_name_char`].
pub fn identifier() -> Extractor {
    name(is_name_start, is_name_char)
}

/// One or more chars satisfying `pred`.
pub fn run<P>(pred: P) -> Extractor
where
    P: Fn(char) -> bool + Send + Sync + 'static,
{
    Extractor::new(move |state, kind| {
        if !state.current().is_some_and(&pred) {
            return None;
        }
        while state.advance() && state.current().is_some_and(&pred) {}
        Some(Token::new(kind, state.extract()))
    })
}

/// Runs of [`is_space`].
pub fn whitespace() -> Extractor {
    run(is_space)
}

/// Like [`run`], but every complete `terminator` inside the run counts as a
/// line break and is reported through
/// [`ScanState::mark_new_line`](lexkit_core::ScanState::mark_new_line).
///
/// The terminator may span several chars (`"\r\n"`); its chars must satisfy
/// `pred` for the run to reach past them.
pub fn layout<P>(pred: P, terminator: impl Into<String>) -> Extractor
where
    P: Fn(char) -> bool + Send + Sync + 'static,
{
    let terminator: Box<str> = terminator.into().into_boxed_str();
    let first = terminator.chars().next();
    let width = terminator.chars().count();

    Extractor::new(move |state, kind| {
        if !state.current().is_some_and(&pred) {
            return None;
        }
        loop {
            let at_terminator = first.is_some_and(|f| state.current() == Some(f))
                && state.matches_forward(&terminator);
            if at_terminator {
                state.advance_n(width);
                state.mark_new_line();
            } else {
                state.advance();
            }
            if !state.current().is_some_and(&pred) {
                break;
            }
        }
        Some(Token::new(kind, state.extract()))
    })
}

/// A value between two identical delimiters.
///
/// The opening char must satisfy `quote`; the interior is a run of chars
/// satisfying `quotable`, ended by the same delimiter. The token holds the
/// interior only, and both delimiters are consumed. Text pending before the
/// opening delimiter is dropped from the value. An unterminated value does
/// not match.
pub fn quoted<Q, C>(quote: Q, quotable: C) -> Extractor
where
    Q: Fn(char) -> bool + Send + Sync + 'static,
    C: Fn(char) -> bool + Send + Sync + 'static,
{
    Extractor::new(move |state, kind| {
        let delimiter = state.current().filter(|&c| quote(c))?;
        let start = state.checkpoint();
        let skip = state.consumed() + 1;
        while state.advance()
            && state
                .current()
                .is_some_and(|c| c != delimiter && quotable(c))
        {}

        if state.current() != Some(delimiter) {
            state.reset(start);
            return None;
        }
        let value = state.extract_with(IgnorePrefix::Chars(skip), 0);
        state.commit();
        Some(Token::new(kind, value))
    })
}

/// Single- or double-quoted strings that stay on one line.
pub fn quoted_string() -> Extractor {
    quoted(is_quote, is_quotable)
}

/// Digits with at most one `separator`.
///
/// The number may start or end with the separator (`.5`, `5.`), but a lone
/// separator does not match.
pub fn number<D>(digit: D, separator: char) -> Extractor
where
    D: Fn(char) -> bool + Send + Sync + 'static,
{
    Extractor::new(move |state, kind| {
        let first = state.current()?;
        if first != separator && !digit(first) {
            return None;
        }

        let start = state.checkpoint();
        let mut seen_separator = first == separator;
        let mut count = 1usize;
        while state.advance() {
            match state.current() {
                Some(c) if c == separator && !seen_separator => seen_separator = true,
                Some(c) if c != separator && digit(c) => {}
                _ => break,
            }
            count += 1;
        }

        if seen_separator && count == 1 {
            state.reset(start);
            return None;
        }
        Some(Token::new(kind, state.extract()))
    })
}

/// ASCII decimal numbers with `.` as the separator.
pub fn decimal() -> Extractor {
    number(is_digit, '.')
}
