//! The extractor type shared by every combinator.

use std::fmt;

use lexkit_core::{ScanState, Token, TokenType};

type ExtractFn = dyn Fn(&mut ScanState, TokenType) -> Option<Token> + Send + Sync;

/// Decides whether a token of a given type starts at the scan pointer.
///
/// An extractor either returns `None` and leaves both pointers exactly where
/// it found them, or returns a token after materializing it with
/// [`ScanState::extract`] (or [`ScanState::extract_with`]) exactly once.
///
/// Extractors are immutable once built and can be shared across threads.
pub struct Extractor {
    func: Box<ExtractFn>,
}

impl Extractor {
    /// Wrap a custom extraction function. The function must honor the
    /// no-match contract above; debug builds check it.
    ///
    /// A match that consumes nothing is allowed, but the tokenizer does not
    /// count it as progress and tries the next definition instead.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&mut ScanState, TokenType) -> Option<Token> + Send + Sync + 'static,
    {
        Extractor {
            func: Box::new(func),
        }
    }

    /// Try to extract a token of type `kind` at the scan pointer.
    #[inline]
    pub fn extract(&self, state: &mut ScanState, kind: TokenType) -> Option<Token> {
        let before = (state.scan_pointer(), state.extraction_pointer());
        let token = (self.func)(state, kind);
        if token.is_none() {
            debug_assert_eq!(
                (state.scan_pointer(), state.extraction_pointer()),
                before,
                "extractor for type {kind} moved the pointers without matching"
            );
        }
        token
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor").finish_non_exhaustive()
    }
}
