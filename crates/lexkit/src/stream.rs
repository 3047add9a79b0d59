//! Pull-based token streams.

use std::iter::FusedIterator;

use lexkit_core::{ScanState, Token};

use crate::Tokenizer;

/// Lazy token sequence over one scan.
///
/// Each pull asks the tokenizer for the next token. When nothing matches,
/// the stream yields a one-char [`TokenType::UNKNOWN`](lexkit_core::TokenType::UNKNOWN)
/// token and moves on, so unrecognized input never stalls it. The stream
/// ends at the end of text, or before the next pull once the state has been
/// canceled through [`state_mut`](Self::state_mut).
#[derive(Debug)]
pub struct TokenStream<'t> {
    tokenizer: &'t Tokenizer,
    state: ScanState,
    finished: bool,
}

impl<'t> TokenStream<'t> {
    /// Stream tokens from a prepared state, starting at its scan pointer.
    pub fn new(tokenizer: &'t Tokenizer, state: ScanState) -> Self {
        TokenStream {
            tokenizer,
            state,
            finished: false,
        }
    }

    #[inline]
    pub fn tokenizer(&self) -> &'t Tokenizer {
        self.tokenizer
    }

    /// The scan state, for line information and the nesting frames.
    #[inline]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Mutable scan state, for recording errors and canceling between pulls.
    #[inline]
    pub fn state_mut(&mut self) -> &mut ScanState {
        &mut self.state
    }

    pub fn into_state(self) -> ScanState {
        self.state
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        if self.state.is_canceled() {
            tracing::debug!(
                offset = self.state.scan_pointer(),
                line = self.state.line_number(),
                error = self.state.error(),
                "token stream canceled"
            );
            self.finished = true;
            return None;
        }

        if let Some(token) = self.tokenizer.next(&mut self.state) {
            return Some(token);
        }

        let Some(c) = self.state.current() else {
            self.finished = true;
            return None;
        };
        tracing::trace!(
            ?c,
            offset = self.state.scan_pointer(),
            line = self.state.line_number(),
            "unrecognized character"
        );
        self.state.commit();
        Some(Token::unknown(c))
    }
}

impl FusedIterator for TokenStream<'_> {}
