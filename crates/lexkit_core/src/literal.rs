//! Ordered literal sets and lookup resolution.
//!
//! A literal match is parameterized by two independent choices: which side
//! of the pending token to look at ([`Direction`]) and whether letter case
//! matters ([`CaseMode`]). [`Lookup`] pairs them and resolves, once, into a
//! plain function pointer, so combinators built on top never branch on the
//! options while scanning.
//!
//! # First match, not longest match
//!
//! A [`LiteralSet`] lookup returns the first entry in declaration order that
//! matches. Overlapping literals must be ordered most-specific first by the
//! caller (`!=` before `!`); grammars rely on that order to disambiguate.

/// Which side of the pending token a literal is matched against.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Text starting at the scan pointer.
    Forward,
    /// Text ending at the extraction pointer.
    Backward,
}

/// Whether letter case participates in literal equality.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CaseMode {
    #[default]
    Sensitive,
    /// Characters compare equal when their lower-case foldings are equal.
    /// The extracted text keeps the source casing.
    Insensitive,
}

impl CaseMode {
    /// `Insensitive` when `ignore_case` is set.
    #[inline]
    pub const fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }
}

/// Matches `literal` against a haystack slice, returning the number of
/// source chars matched.
///
/// Forward matchers receive the text from the scan pointer to the end;
/// backward matchers receive the text from the start to the extraction
/// pointer.
pub(crate) type MatchFn = fn(haystack: &str, literal: &str) -> Option<usize>;

/// A direction paired with a case mode.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Lookup {
    pub direction: Direction,
    pub case: CaseMode,
}

impl Lookup {
    pub const fn new(direction: Direction, case: CaseMode) -> Self {
        Lookup { direction, case }
    }

    pub const fn forward(case: CaseMode) -> Self {
        Lookup::new(Direction::Forward, case)
    }

    pub const fn backward(case: CaseMode) -> Self {
        Lookup::new(Direction::Backward, case)
    }

    /// Resolve this lookup into its concrete matcher.
    ///
    /// Combinators call this once at construction time and keep the
    /// returned [`Matcher`].
    #[inline]
    pub fn resolve(self) -> Matcher {
        let func: MatchFn = match (self.direction, self.case) {
            (Direction::Forward, CaseMode::Sensitive) => forward_sensitive,
            (Direction::Forward, CaseMode::Insensitive) => forward_insensitive,
            (Direction::Backward, CaseMode::Sensitive) => backward_sensitive,
            (Direction::Backward, CaseMode::Insensitive) => backward_insensitive,
        };
        Matcher {
            direction: self.direction,
            func,
        }
    }
}

/// A [`Lookup`] resolved into its matching function.
#[derive(Copy, Clone, Debug)]
pub struct Matcher {
    direction: Direction,
    func: MatchFn,
}

impl Matcher {
    #[inline]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Matched source chars if `literal` matches `haystack`.
    #[inline]
    pub(crate) fn apply(self, haystack: &str, literal: &str) -> Option<usize> {
        (self.func)(haystack, literal)
    }
}

#[inline]
fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn forward_sensitive(haystack: &str, literal: &str) -> Option<usize> {
    haystack
        .starts_with(literal)
        .then(|| literal.chars().count())
}

fn backward_sensitive(haystack: &str, literal: &str) -> Option<usize> {
    haystack
        .ends_with(literal)
        .then(|| literal.chars().count())
}

fn forward_insensitive(haystack: &str, literal: &str) -> Option<usize> {
    fold_match(haystack.chars(), literal.chars())
}

fn backward_insensitive(haystack: &str, literal: &str) -> Option<usize> {
    fold_match(haystack.chars().rev(), literal.chars().rev())
}

fn fold_match(
    mut source: impl Iterator<Item = char>,
    literal: impl Iterator<Item = char>,
) -> Option<usize> {
    let mut count = 0;
    for expected in literal {
        let found = source.next()?;
        if !eq_ignore_case(found, expected) {
            return None;
        }
        count += 1;
    }
    Some(count)
}

/// An ordered, non-empty-entry list of literals.
///
/// Built from a single literal or any list of them; a single literal is a
/// one-entry set. Empty literals are dropped, since a zero-width literal
/// match would never make progress.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LiteralSet {
    entries: Box<[Box<str>]>,
}

impl LiteralSet {
    pub fn new<I, S>(literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = literals
            .into_iter()
            .filter(|lit| !lit.as_ref().is_empty())
            .map(|lit| Box::<str>::from(lit.as_ref()))
            .collect();
        LiteralSet { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(AsRef::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(AsRef::as_ref)
    }

    /// First entry matching `haystack` under `matcher`, as
    /// `(entry index, matched source chars)`.
    #[inline]
    pub(crate) fn find(&self, haystack: &str, matcher: Matcher) -> Option<(usize, usize)> {
        self.entries
            .iter()
            .enumerate()
            .find_map(|(index, lit)| matcher.apply(haystack, lit).map(|chars| (index, chars)))
    }
}

impl From<&str> for LiteralSet {
    fn from(literal: &str) -> Self {
        LiteralSet::new([literal])
    }
}

impl From<String> for LiteralSet {
    fn from(literal: String) -> Self {
        LiteralSet::new([literal])
    }
}

impl From<&[&str]> for LiteralSet {
    fn from(literals: &[&str]) -> Self {
        LiteralSet::new(literals)
    }
}

impl<const N: usize> From<[&str; N]> for LiteralSet {
    fn from(literals: [&str; N]) -> Self {
        LiteralSet::new(literals)
    }
}

impl From<Vec<&str>> for LiteralSet {
    fn from(literals: Vec<&str>) -> Self {
        LiteralSet::new(literals)
    }
}

impl From<Vec<String>> for LiteralSet {
    fn from(literals: Vec<String>) -> Self {
        LiteralSet::new(literals)
    }
}
