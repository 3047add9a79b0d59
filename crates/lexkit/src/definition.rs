//! Token definitions and the errors raised when a definition set is invalid.

use lexkit_core::TokenType;

use crate::Extractor;

/// One entry of a tokenizer's ordered definition list.
///
/// A definition either carries an extractor, or is *virtual*: a named type
/// the tokenizer never produces, reserved for tokens a grammar synthesizes
/// later (e.g. retyping a name as a function call).
#[derive(Debug)]
pub struct TokenDefinition {
    kind: TokenType,
    name: Box<str>,
    extractor: Option<Extractor>,
    ignored: bool,
}

impl TokenDefinition {
    pub fn new(kind: impl Into<TokenType>, name: impl Into<String>, extractor: Extractor) -> Self {
        TokenDefinition {
            kind: kind.into(),
            name: name.into().into_boxed_str(),
            extractor: Some(extractor),
            ignored: false,
        }
    }

    /// A type without an extractor. Virtual types must come after every
    /// extracting definition, and count as ignored.
    pub fn virtual_type(kind: impl Into<TokenType>, name: impl Into<String>) -> Self {
        TokenDefinition {
            kind: kind.into(),
            name: name.into().into_boxed_str(),
            extractor: None,
            ignored: true,
        }
    }

    /// Drop matches of this definition from the token stream. The matched
    /// text is still consumed.
    #[must_use]
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    #[inline]
    pub fn kind(&self) -> TokenType {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn extractor(&self) -> Option<&Extractor> {
        self.extractor.as_ref()
    }

    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    #[inline]
    pub fn is_virtual(&self) -> bool {
        self.extractor.is_none()
    }
}

/// Reasons [`Tokenizer::new`](crate::Tokenizer::new) rejects a definition
/// list.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("token type {kind} is defined twice (`{first}` and `{second}`)")]
    DuplicateType {
        kind: TokenType,
        first: String,
        second: String,
    },

    #[error("token name `{name}` is defined twice")]
    DuplicateName { name: String },

    #[error("token `{name}` has an extractor but follows virtual token `{virtual_name}`")]
    ExtractorAfterVirtual { name: String, virtual_name: String },

    #[error("token `{name}` uses the reserved type {}", TokenType::UNKNOWN)]
    ReservedType { name: String },
}
