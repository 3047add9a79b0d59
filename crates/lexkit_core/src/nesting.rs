//! Two-level stack of pending tokens.
//!
//! A grammar pushes tokens it cannot reduce yet onto the top frame (for
//! example the parts of a dotted name) and opens a new frame when it enters a
//! bracketed sub-expression. Frames are closed only when empty, so a grammar
//! that forgets to reduce its pending tokens fails loudly at the level
//! transition instead of leaking tokens into the enclosing level.

use thiserror::Error;

use crate::Token;

/// Invalid nesting-level transition. Always a grammar bug, never a property
/// of the input text.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum NestingError {
    /// The top frame still holds tokens.
    #[error("cannot close nesting level: {count} pending token(s) in the top frame")]
    PendingTokens { count: usize },
    /// Only the base frame is left.
    #[error("cannot close nesting level: no enclosing level")]
    NoEnclosingLevel,
}

/// Owned stack of frames. Never empty: the base frame lives as long as the
/// stack.
#[derive(Clone, Debug)]
pub(crate) struct NestingStack {
    frames: Vec<Vec<Token>>,
}

impl Default for NestingStack {
    fn default() -> Self {
        NestingStack {
            frames: vec![Vec::new()],
        }
    }
}

impl NestingStack {
    #[inline]
    fn top(&self) -> &Vec<Token> {
        debug_assert!(!self.frames.is_empty(), "nesting stack lost its base frame");
        &self.frames[self.frames.len() - 1]
    }

    #[inline]
    fn top_mut(&mut self) -> &mut Vec<Token> {
        debug_assert!(!self.frames.is_empty(), "nesting stack lost its base frame");
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.top_mut().push(token);
    }

    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.top_mut().pop()
    }

    pub(crate) fn last(&self) -> Option<&Token> {
        self.top().last()
    }

    pub(crate) fn pending(&self) -> usize {
        self.top().len()
    }

    pub(crate) fn level(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn push_level(&mut self) {
        self.frames.push(Vec::new());
    }

    pub(crate) fn pop_level(&mut self) -> Result<(), NestingError> {
        let count = self.pending();
        if count > 0 {
            return Err(NestingError::PendingTokens { count });
        }
        if self.frames.len() < 2 {
            return Err(NestingError::NoEnclosingLevel);
        }
        self.frames.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
