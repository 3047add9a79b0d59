//! Positional state for one scan over an in-memory text buffer.
//!
//! A [`ScanState`] tracks two offsets:
//!
//! ```text
//!   already extracted | pending attempt | untested
//!   ------------------+-----------------+----------
//!                     ^                 ^
//!              extraction pointer   scan pointer
//! ```
//!
//! Extractors move the scan pointer forward speculatively. On success they
//! call [`extract`](ScanState::extract) (or [`extract_with`](ScanState::extract_with)),
//! which materializes the pending text and moves the extraction pointer up
//! to the scan pointer. On failure they call [`rewind`](ScanState::rewind),
//! which drops the scan pointer back to the extraction pointer. Everything
//! between the two pointers is therefore backtrackable; everything before
//! the extraction pointer is final.
//!
//! Besides the pointers, the state carries line bookkeeping for diagnostics,
//! the nesting frames a grammar uses to hold pending tokens, and the
//! error/cancellation channel a grammar uses to stop a token stream.

use crate::literal::{CaseMode, LiteralSet, Lookup, Matcher};
use crate::nesting::{NestingError, NestingStack};
use crate::{Direction, Token};

/// How much of the pending text [`ScanState::extract_with`] leaves out of
/// the extracted value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IgnorePrefix {
    /// Skip this many chars after the extraction pointer.
    Chars(usize),
    /// Skip everything consumed by the current attempt, so the value only
    /// holds the included suffix.
    Consumed,
}

impl IgnorePrefix {
    /// Keep the whole pending text.
    pub const NONE: IgnorePrefix = IgnorePrefix::Chars(0);
}

/// Where [`ScanState::line_text`] stops.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LineEnd<'a> {
    /// The next line feed at or after the scan pointer.
    #[default]
    Terminator,
    /// This many chars past the scan pointer.
    Chars(usize),
    /// The next occurrence of this string at or after the scan pointer.
    Needle(&'a str),
}

/// Scan state over one immutable text buffer.
///
/// Created once per scan and exclusively owned by it.
///
/// # Invariants
///
/// - `extraction_pointer <= scan_pointer <= text.len()`
/// - both pointers sit on UTF-8 character boundaries
/// - the nesting stack always has at least one frame
#[derive(Clone, Debug)]
pub struct ScanState {
    text: Box<str>,
    /// Next untested byte offset.
    scan: usize,
    /// Start of the token in progress.
    extraction: usize,
    line: usize,
    line_start: usize,
    nesting: NestingStack,
    canceled: bool,
    error: Option<String>,
}

impl ScanState {
    pub fn new(text: impl Into<Box<str>>) -> Self {
        ScanState {
            text: text.into(),
            scan: 0,
            extraction: 0,
            line: 0,
            line_start: 0,
            nesting: NestingStack::default(),
            canceled: false,
            error: None,
        }
    }

    // === Buffer access ===

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn scan_pointer(&self) -> usize {
        self.scan
    }

    #[inline]
    pub fn extraction_pointer(&self) -> usize {
        self.extraction
    }

    /// Returns `true` while untested text remains.
    #[inline]
    pub fn has_remaining(&self) -> bool {
        self.scan < self.text.len()
    }

    /// Text from the scan pointer to the end.
    #[inline]
    pub fn rest(&self) -> &str {
        &self.text[self.scan..]
    }

    /// Text consumed by the current attempt.
    #[inline]
    pub fn pending_text(&self) -> &str {
        &self.text[self.extraction..self.scan]
    }

    /// Number of chars consumed by the current attempt.
    pub fn consumed(&self) -> usize {
        self.pending_text().chars().count()
    }

    /// Char at the scan pointer, `None` at end of text.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Char `offset` chars past the scan pointer. `peek(0)` is
    /// [`current`](Self::current).
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    /// Byte offset `chars` chars past `from`, clamped to the end of text.
    fn offset_after(&self, from: usize, chars: usize) -> usize {
        if chars == 0 {
            return from;
        }
        self.text[from..]
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| from + i)
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            self.extraction <= self.scan,
            "extraction pointer {} is past scan pointer {}",
            self.extraction,
            self.scan
        );
        debug_assert!(
            self.scan <= self.text.len(),
            "scan pointer {} exceeds text length {}",
            self.scan,
            self.text.len()
        );
        debug_assert!(
            self.text.is_char_boundary(self.scan) && self.text.is_char_boundary(self.extraction),
            "pointers must sit on char boundaries"
        );
    }

    // === Movement ===

    /// Move the scan pointer one char forward. Returns whether text remains.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.advance_n(1)
    }

    /// Move the scan pointer `n` chars forward, leaving the extraction
    /// pointer in place. Returns whether text remains.
    pub fn advance_n(&mut self, n: usize) -> bool {
        self.scan = self.offset_after(self.scan, n);
        self.debug_check();
        self.has_remaining()
    }

    /// Advance one char and drop it from the pending attempt.
    #[inline]
    pub fn commit(&mut self) {
        self.commit_n(1);
    }

    /// Advance `n` chars and move the extraction pointer along. The
    /// committed text can no longer be rewound or extracted; used to skip
    /// delimiters after a token has been materialized.
    pub fn commit_n(&mut self, n: usize) {
        self.scan = self.offset_after(self.scan, n);
        self.extraction = self.scan;
        self.debug_check();
    }

    /// Undo the current attempt.
    #[inline]
    pub fn rewind(&mut self) {
        self.scan = self.extraction;
    }

    /// Position to come back to with [`reset`](Self::reset). Unlike
    /// [`rewind`](Self::rewind), this keeps text a grammar advanced over
    /// before the attempt started.
    #[inline]
    pub fn checkpoint(&self) -> usize {
        self.scan
    }

    /// Move the scan pointer back to a [`checkpoint`](Self::checkpoint)
    /// taken earlier in the same attempt.
    pub fn reset(&mut self, checkpoint: usize) {
        debug_assert!(
            self.extraction <= checkpoint && checkpoint <= self.scan,
            "checkpoint {checkpoint} is outside the pending attempt {}..{}",
            self.extraction,
            self.scan
        );
        self.scan = checkpoint;
        self.debug_check();
    }

    // === Extraction ===

    /// Materialize the whole pending text.
    pub fn extract(&mut self) -> String {
        self.extract_with(IgnorePrefix::NONE, 0)
    }

    /// Materialize `text[extraction + prefix .. scan + include_suffix)`.
    ///
    /// Afterwards both pointers sit at `scan + include_suffix`. This is the
    /// only way a token value comes into existence, and an extractor calls
    /// it exactly once per success.
    pub fn extract_with(&mut self, ignore_prefix: IgnorePrefix, include_suffix: usize) -> String {
        let end = self.offset_after(self.scan, include_suffix);
        let start = match ignore_prefix {
            IgnorePrefix::Chars(n) => self.offset_after(self.extraction, n).min(end),
            IgnorePrefix::Consumed => self.scan,
        };
        let value = self.text[start..end].to_owned();
        self.scan = end;
        self.extraction = end;
        self.debug_check();
        value
    }

    // === Literal matching ===

    fn haystack(&self, direction: Direction) -> &str {
        match direction {
            Direction::Forward => &self.text[self.scan..],
            Direction::Backward => &self.text[..self.extraction],
        }
    }

    /// Match one literal with a resolved matcher. Returns the number of
    /// source chars covered by the match.
    #[inline]
    pub fn match_with(&self, literal: &str, matcher: Matcher) -> Option<usize> {
        matcher.apply(self.haystack(matcher.direction()), literal)
    }

    /// Match one literal under `lookup`. Returns the number of source chars
    /// covered by the match.
    pub fn match_literal(&self, literal: &str, lookup: Lookup) -> Option<usize> {
        self.match_with(literal, lookup.resolve())
    }

    /// First entry of `set` matching under a resolved matcher, as
    /// `(entry index, matched source chars)`.
    #[inline]
    pub fn match_any_with(&self, set: &LiteralSet, matcher: Matcher) -> Option<(usize, usize)> {
        set.find(self.haystack(matcher.direction()), matcher)
    }

    /// First entry of `set` matching under `lookup`, as
    /// `(entry index, matched source chars)`.
    pub fn match_any(&self, set: &LiteralSet, lookup: Lookup) -> Option<(usize, usize)> {
        self.match_any_with(set, lookup.resolve())
    }

    /// Text at the scan pointer starts with `literal`.
    pub fn matches_forward(&self, literal: &str) -> bool {
        self.match_literal(literal, Lookup::forward(CaseMode::Sensitive))
            .is_some()
    }

    pub fn matches_forward_ci(&self, literal: &str) -> bool {
        self.match_literal(literal, Lookup::forward(CaseMode::Insensitive))
            .is_some()
    }

    /// Text right before the extraction pointer ends with `literal`.
    pub fn matches_backward(&self, literal: &str) -> bool {
        self.match_literal(literal, Lookup::backward(CaseMode::Sensitive))
            .is_some()
    }

    pub fn matches_backward_ci(&self, literal: &str) -> bool {
        self.match_literal(literal, Lookup::backward(CaseMode::Insensitive))
            .is_some()
    }

    /// Index of the first entry of `set` found at the scan pointer.
    pub fn match_any_forward(&self, set: &LiteralSet) -> Option<usize> {
        self.match_any(set, Lookup::forward(CaseMode::Sensitive))
            .map(|(index, _)| index)
    }

    pub fn match_any_forward_ci(&self, set: &LiteralSet) -> Option<usize> {
        self.match_any(set, Lookup::forward(CaseMode::Insensitive))
            .map(|(index, _)| index)
    }

    /// Index of the first entry of `set` found right before the extraction
    /// pointer.
    pub fn match_any_backward(&self, set: &LiteralSet) -> Option<usize> {
        self.match_any(set, Lookup::backward(CaseMode::Sensitive))
            .map(|(index, _)| index)
    }

    pub fn match_any_backward_ci(&self, set: &LiteralSet) -> Option<usize> {
        self.match_any(set, Lookup::backward(CaseMode::Insensitive))
            .map(|(index, _)| index)
    }

    // === Lines ===

    /// Record that a line terminator has just been consumed: the line
    /// number goes up and the new line starts at the scan pointer.
    ///
    /// Nothing calls this implicitly; whoever scans a terminator calls it
    /// exactly once per terminator.
    pub fn mark_new_line(&mut self) {
        self.line += 1;
        self.line_start = self.scan;
    }

    /// Zero-based line number.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Byte offset where the current line starts.
    #[inline]
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// Zero-based column of the scan pointer, in chars.
    pub fn line_position(&self) -> usize {
        self.text
            .get(self.line_start..self.scan)
            .map_or(0, |line| line.chars().count())
    }

    /// The current line, from its start up to `end`. Falls back to the end
    /// of text when the terminator or needle does not occur.
    pub fn line_text(&self, end: LineEnd<'_>) -> &str {
        let rest = self.rest().as_bytes();
        let stop = match end {
            LineEnd::Terminator => memchr::memchr(b'\n', rest).map(|i| self.scan + i),
            LineEnd::Chars(n) => Some(self.offset_after(self.scan, n)),
            LineEnd::Needle(needle) => {
                memchr::memmem::find(rest, needle.as_bytes()).map(|i| self.scan + i)
            }
        }
        .unwrap_or(self.text.len());
        let start = self.line_start.min(stop);
        &self.text[start..stop]
    }

    // === Nesting ===

    /// Push a pending token onto the top frame.
    pub fn push(&mut self, token: Token) {
        self.nesting.push(token);
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.nesting.pop()
    }

    /// Most recently pushed token of the top frame.
    pub fn last(&self) -> Option<&Token> {
        self.nesting.last()
    }

    /// Tokens held by the top frame.
    pub fn pending_count(&self) -> usize {
        self.nesting.pending()
    }

    /// Open a nesting level with an empty frame.
    pub fn push_level(&mut self) {
        self.nesting.push_level();
    }

    /// Close the top nesting level.
    ///
    /// Fails if the top frame still holds tokens or if it is the base frame.
    /// Either case is a grammar bug.
    pub fn pop_level(&mut self) -> Result<(), NestingError> {
        self.nesting.pop_level()
    }

    /// Number of open levels, at least 1.
    pub fn nesting_level(&self) -> usize {
        self.nesting.level()
    }

    // === Failure channel ===

    /// Last error recorded by the consumer grammar.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    #[inline]
    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    /// Record `message` and ask the token stream to stop.
    pub fn cancel(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.canceled = true;
    }
}
