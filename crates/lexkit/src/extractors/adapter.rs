//! Extractor composition.

use crate::Extractor;

/// Try `primary`; only when it does not match, try `fallback`.
///
/// Both run for the same token type, which lets one definition accept
/// several shapes (a quoted or a bare attribute value, say).
pub fn adapter(primary: Extractor, fallback: Extractor) -> Extractor {
    Extractor::new(move |state, kind| {
        primary
            .extract(state, kind)
            .or_else(|| fallback.extract(state, kind))
    })
}
