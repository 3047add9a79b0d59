//! Code-point classification predicates.
//!
//! Every predicate is a pure, total `fn(char) -> bool`, so they can be handed
//! directly to the extractor combinators in `lexkit::extractors`.
//!
//! The name ranges follow the XML `NameStartChar` production minus the
//! colon, which grammars usually want as a separator.

/// Returns `true` if `c` may start a name.
///
/// ASCII letters, `_`, and the supplementary Unicode ranges of the XML
/// `NameStartChar` production.
#[inline]
pub const fn is_name_start(c: char) -> bool {
    matches!(
        c,
        'A'..='Z'
            | 'a'..='z'
            | '_'
            | '\u{C0}'..='\u{D6}'
            | '\u{D8}'..='\u{F6}'
            | '\u{F8}'..='\u{2FF}'
            | '\u{370}'..='\u{37D}'
            | '\u{37F}'..='\u{1FFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{2070}'..='\u{218F}'
            | '\u{2C00}'..='\u{2FEF}'
            | '\u{3001}'..='\u{D7FF}'
            | '\u{F900}'..='\u{FDCF}'
            | '\u{FDF0}'..='\u{FFFD}'
            | '\u{10000}'..='\u{EFFFF}'
    )
}

/// Returns `true` if `c` may continue a name: any name-start character,
/// ASCII digits, `-` and `&`.
#[inline]
pub const fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-' || c == '&'
}

/// Space, tab, carriage return or line feed.
#[inline]
pub const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[inline]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Line feed only. Grammars that need CRLF use a multi-char terminator with
/// `lexkit::extractors::layout`.
#[inline]
pub const fn is_end_of_line(c: char) -> bool {
    c == '\n'
}

/// Single or double quote.
#[inline]
pub const fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Anything a quoted value may contain: every code point except line feed.
#[inline]
pub const fn is_quotable(c: char) -> bool {
    c != '\n'
}

/// Returns `true` if the upper-case and lower-case forms of `c` differ.
pub fn is_letter(c: char) -> bool {
    !c.to_uppercase().eq(c.to_lowercase())
}

/// A letter that is its own upper-case form.
pub fn is_upper_case(c: char) -> bool {
    is_letter(c) && c.to_uppercase().eq(std::iter::once(c))
}

/// A letter that is its own lower-case form.
pub fn is_lower_case(c: char) -> bool {
    is_letter(c) && c.to_lowercase().eq(std::iter::once(c))
}
