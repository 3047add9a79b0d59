//! Token type ids and materialized tokens.

use std::fmt;

/// Numeric token type id.
///
/// Grammars pick their own ids; the only reserved value is
/// [`TokenType::UNKNOWN`], carried by the one-character tokens a tokenizer
/// synthesizes for input no definition recognizes.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TokenType(i32);

impl TokenType {
    /// Sentinel for unrecognized characters.
    pub const UNKNOWN: TokenType = TokenType(-1);

    #[inline]
    pub const fn new(raw: i32) -> Self {
        TokenType(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }
}

impl From<i32> for TokenType {
    fn from(raw: i32) -> Self {
        TokenType(raw)
    }
}

impl fmt::Debug for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            write!(f, "TokenType(UNKNOWN)")
        } else {
            write!(f, "TokenType({})", self.0)
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A typed fragment of source text produced by a successful extraction.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenType,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenType, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    /// Synthetic token for a single unrecognized character.
    pub fn unknown(c: char) -> Self {
        Token {
            kind: TokenType::UNKNOWN,
            value: c.to_string(),
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.kind.is_unknown()
    }
}
