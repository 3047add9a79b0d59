//! The tokenizer engine: an ordered definition list driven over a scan state.

use lexkit_core::{ScanState, Token, TokenType};
use rustc_hash::FxHashMap;

use crate::{DefinitionError, TokenDefinition, TokenStream};

/// An immutable, validated list of token definitions.
///
/// At each position the definitions are tried in declaration order and the
/// first match wins. Build one tokenizer per grammar and share it; every
/// scan runs over its own [`ScanState`].
#[derive(Debug)]
pub struct Tokenizer {
    definitions: Vec<TokenDefinition>,
    /// Number of leading definitions that carry an extractor.
    extracting: usize,
    by_type: FxHashMap<TokenType, usize>,
    by_name: FxHashMap<Box<str>, usize>,
}

impl Tokenizer {
    /// Validate `definitions` and build a tokenizer.
    ///
    /// # Errors
    ///
    /// Fails when a type id or name repeats, when a definition with an
    /// extractor follows a virtual one, or when a definition uses
    /// [`TokenType::UNKNOWN`].
    pub fn new<I>(definitions: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = TokenDefinition>,
    {
        Self::from_definitions(definitions.into_iter().collect())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(count = definitions.len()))]
    fn from_definitions(definitions: Vec<TokenDefinition>) -> Result<Self, DefinitionError> {
        let mut tokenizer = Tokenizer {
            extracting: definitions.len(),
            by_type: FxHashMap::default(),
            by_name: FxHashMap::default(),
            definitions: Vec::new(),
        };
        if let Err(err) = tokenizer.index(&definitions) {
            tracing::debug!(%err, "token definitions rejected");
            return Err(err);
        }
        tokenizer.definitions = definitions;
        tracing::debug!(extracting = tokenizer.extracting, "token definitions accepted");
        Ok(tokenizer)
    }

    /// Fill the lookup tables, checking uniqueness and the virtual suffix.
    fn index(&mut self, definitions: &[TokenDefinition]) -> Result<(), DefinitionError> {
        let mut first_virtual: Option<&TokenDefinition> = None;

        for (index, def) in definitions.iter().enumerate() {
            if def.kind().is_unknown() {
                return Err(DefinitionError::ReservedType {
                    name: def.name().to_owned(),
                });
            }
            if let Some(&previous) = self.by_type.get(&def.kind()) {
                return Err(DefinitionError::DuplicateType {
                    kind: def.kind(),
                    first: definitions[previous].name().to_owned(),
                    second: def.name().to_owned(),
                });
            }
            if self.by_name.contains_key(def.name()) {
                return Err(DefinitionError::DuplicateName {
                    name: def.name().to_owned(),
                });
            }
            match first_virtual {
                Some(virtual_def) if !def.is_virtual() => {
                    return Err(DefinitionError::ExtractorAfterVirtual {
                        name: def.name().to_owned(),
                        virtual_name: virtual_def.name().to_owned(),
                    });
                }
                None if def.is_virtual() => {
                    first_virtual = Some(def);
                    self.extracting = index;
                }
                _ => {}
            }
            self.by_type.insert(def.kind(), index);
            self.by_name.insert(Box::from(def.name()), index);
        }
        Ok(())
    }

    /// Produce the next non-ignored token at the scan pointer.
    ///
    /// Matches of ignored definitions are consumed and scanning restarts from
    /// the first definition. A match that consumes nothing, ignored or not,
    /// is not progress, so the remaining definitions are tried instead.
    /// Returns `None`, without advancing past the last ignored match, when
    /// no definition matches.
    pub fn next(&self, state: &mut ScanState) -> Option<Token> {
        'scan: loop {
            let start = state.scan_pointer();
            for def in &self.definitions[..self.extracting] {
                let Some(extractor) = def.extractor() else {
                    continue;
                };
                let Some(token) = extractor.extract(state, def.kind()) else {
                    continue;
                };
                if state.scan_pointer() == start {
                    tracing::trace!(name = def.name(), offset = start, "zero-width match skipped");
                    continue;
                }
                if def.is_ignored() {
                    continue 'scan;
                }
                tracing::trace!(
                    kind = %token.kind,
                    name = def.name(),
                    value = token.value.as_str(),
                    "token"
                );
                return Some(token);
            }
            return None;
        }
    }

    /// Lazily tokenize `text`.
    pub fn generate(&self, text: impl Into<Box<str>>) -> TokenStream<'_> {
        TokenStream::new(self, ScanState::new(text))
    }

    /// Name of the definition with type `kind`.
    pub fn token_name(&self, kind: TokenType) -> Option<&str> {
        self.by_type
            .get(&kind)
            .map(|&index| self.definitions[index].name())
    }

    /// Type id of the definition called `name`.
    pub fn token_type(&self, name: &str) -> Option<TokenType> {
        self.by_name
            .get(name)
            .map(|&index| self.definitions[index].kind())
    }

    /// Whether tokens of type `kind` are dropped from the stream. Unknown
    /// types are not ignored.
    pub fn is_ignored(&self, kind: TokenType) -> bool {
        self.by_type
            .get(&kind)
            .is_some_and(|&index| self.definitions[index].is_ignored())
    }

    pub fn definitions(&self) -> &[TokenDefinition] {
        &self.definitions
    }

    /// Number of definitions, virtual ones included.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
