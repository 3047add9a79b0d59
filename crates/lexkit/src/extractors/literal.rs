//! Literal-set extractors, with optional look-ahead/look-behind conditions.

use bitflags::bitflags;
use lexkit_core::{CaseMode, Direction, IgnorePrefix, LiteralSet, Lookup, Token};

use crate::Extractor;

bitflags! {
    /// Options for [`conditional`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ConditionOptions: u8 {
        /// Match the primary literals ignoring case.
        const MATCH_CASE_INSENSITIVE = 1 << 0;
        /// Match the condition literals ignoring case.
        const CONDITION_CASE_INSENSITIVE = 1 << 1;
        /// Look for the condition right before the token instead of at its
        /// start.
        const CONDITION_PRECEDING = 1 << 2;
        /// Require the condition to be absent.
        const NEGATE_CONDITION = 1 << 3;
    }
}

impl ConditionOptions {
    /// Case mode for the primary literals.
    pub const fn match_case(self) -> CaseMode {
        CaseMode::from_ignore_case(self.contains(Self::MATCH_CASE_INSENSITIVE))
    }

    /// Direction and case mode for the condition literals.
    pub const fn condition_lookup(self) -> Lookup {
        let direction = if self.contains(Self::CONDITION_PRECEDING) {
            Direction::Backward
        } else {
            Direction::Forward
        };
        Lookup::new(
            direction,
            CaseMode::from_ignore_case(self.contains(Self::CONDITION_CASE_INSENSITIVE)),
        )
    }
}

/// The first entry of `literals` found at the scan pointer.
///
/// Entries are tried in order and the first match wins, so list longer
/// literals before their prefixes (`"!=="` before `"!="` before `"!"`). The
/// token holds the matched source text, which keeps the source casing under
/// [`CaseMode::Insensitive`].
pub fn literal(literals: impl Into<LiteralSet>, case: CaseMode) -> Extractor {
    let literals = literals.into();
    let matcher = Lookup::forward(case).resolve();

    Extractor::new(move |state, kind| {
        let (_, chars) = state.match_any_with(&literals, matcher)?;
        Some(Token::new(
            kind,
            state.extract_with(IgnorePrefix::Consumed, chars),
        ))
    })
}

/// Like [`literal`], but only matches when one of `condition` is present.
///
/// The condition is checked before anything is consumed. By default it must
/// occur at the scan pointer, overlapping the primary literal, so
/// `conditional("on", "once", ..)` matches the `on` of `once` only. With
/// [`ConditionOptions::CONDITION_PRECEDING`] it must end right before the
/// token. [`ConditionOptions::NEGATE_CONDITION`] turns the requirement into a
/// prohibition.
pub fn conditional(
    literals: impl Into<LiteralSet>,
    condition: impl Into<LiteralSet>,
    options: ConditionOptions,
) -> Extractor {
    let literals = literals.into();
    let condition = condition.into();
    let matcher = Lookup::forward(options.match_case()).resolve();
    let condition_matcher = options.condition_lookup().resolve();
    let negate = options.contains(ConditionOptions::NEGATE_CONDITION);

    Extractor::new(move |state, kind| {
        let (_, chars) = state.match_any_with(&literals, matcher)?;
        let present = state
            .match_any_with(&condition, condition_matcher)
            .is_some();
        if present == negate {
            return None;
        }
        Some(Token::new(
            kind,
            state.extract_with(IgnorePrefix::Consumed, chars),
        ))
    })
}
