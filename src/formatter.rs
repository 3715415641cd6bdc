//! Textual rendering of variants as C match expressions and comments.
//!
//! The emitted branch text is C source pasted into a hand-maintained
//! decoder, so every literal here must be valid C: printable ASCII bytes
//! render as character literals (quote and backslash escaped), everything
//! else as lowercase hex.

use crate::normalize::character_name;
use crate::table::UnicodeVariant;

/// Human-readable description of which composition produced a variant:
/// the canonical name of each code point, joined with `" + "`.
///
/// # Examples
///
/// ```
/// use codepage_oxide::{formatter, UnicodeVariant};
///
/// let decomposed = UnicodeVariant::new("e\u{0301}".to_string());
/// assert_eq!(
///     formatter::explain(&decomposed),
///     "LATIN SMALL LETTER E + COMBINING ACUTE ACCENT"
/// );
/// ```
pub fn explain(variant: &UnicodeVariant) -> String {
    variant
        .chars()
        .map(character_name)
        .collect::<Vec<_>>()
        .join(" + ")
}

/// C condition matching a variant's UTF-8 encoding at `src`: one
/// `src[i]==<lit>` clause per byte, joined with `" && "`.
///
/// The clause count always equals [`UnicodeVariant::byte_len`], which is
/// how far the emitted branch advances the read cursor.
pub fn match_expression(variant: &UnicodeVariant) -> String {
    variant
        .as_bytes()
        .iter()
        .enumerate()
        .map(|(i, &b)| format!("src[{}]=={}", i, byte_literal(b)))
        .collect::<Vec<_>>()
        .join(" && ")
}

/// Render one byte as a C literal: a single-quoted character for
/// printable ASCII (32–126), a lowercase hex literal otherwise.
pub fn byte_literal(byte: u8) -> String {
    match byte {
        b'\'' => "'\\''".to_string(),
        b'\\' => "'\\\\'".to_string(),
        32..=126 => format!("'{}'", char::from(byte)),
        _ => format!("{:#x}", byte),
    }
}
