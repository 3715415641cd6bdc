//! Unicode normalization oracle for legacy code page characters.
//!
//! Wraps a [`CodePage`] and answers, for each byte value, the NFC and NFD
//! spellings of the character assigned to it. Normalization itself comes
//! from the `unicode-normalization` crate; character names for the
//! generated comments come from `unicode_names2`.

use crate::codepage::CodePage;
use crate::error::{Error, Result};
use unicode_normalization::UnicodeNormalization;

/// Computes the composed and decomposed Unicode spellings of each code
/// page character.
///
/// # Examples
///
/// ```
/// use codepage_oxide::{MacRoman, NormalizationOracle};
///
/// let oracle = NormalizationOracle::new(MacRoman);
/// // 0x8E is é: precomposed under NFC, e + combining acute under NFD
/// assert_eq!(oracle.composed_form(0x8E).unwrap(), "\u{00E9}");
/// assert_eq!(oracle.decomposed_form(0x8E).unwrap(), "e\u{0301}");
/// ```
#[derive(Debug, Clone)]
pub struct NormalizationOracle<P: CodePage> {
    page: P,
}

impl<P: CodePage> NormalizationOracle<P> {
    /// Create an oracle over the given code page.
    pub fn new(page: P) -> Self {
        Self { page }
    }

    /// The underlying code page.
    pub fn code_page(&self) -> &P {
        &self.page
    }

    /// NFC (canonical composition) spelling of the character at `byte`.
    pub fn composed_form(&self, byte: u8) -> Result<String> {
        let ch = self.decode(byte)?;
        Ok(std::iter::once(ch).nfc().collect())
    }

    /// NFD (canonical decomposition) spelling of the character at `byte`.
    pub fn decomposed_form(&self, byte: u8) -> Result<String> {
        let ch = self.decode(byte)?;
        Ok(std::iter::once(ch).nfd().collect())
    }

    fn decode(&self, byte: u8) -> Result<char> {
        self.page
            .decode(byte)
            .ok_or_else(|| Error::IncompleteCodePage {
                code_page: self.page.name().to_string(),
                byte,
            })
    }
}

/// Canonical Unicode name of a code point, for human review of the
/// generated branches.
///
/// Unnamed code points (controls, private use) render as `U+XXXX` with at
/// least four uppercase hex digits, so every code point has a printable
/// label.
pub fn character_name(ch: char) -> String {
    match unicode_names2::name(ch) {
        Some(name) => name.to_string(),
        None => format!("U+{:04X}", ch as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepage::MacRoman;

    #[test]
    fn test_composed_and_decomposed_differ_for_accented_letters() {
        let oracle = NormalizationOracle::new(MacRoman);
        // 0x80 is Ä
        assert_eq!(oracle.composed_form(0x80).unwrap(), "\u{00C4}");
        assert_eq!(oracle.decomposed_form(0x80).unwrap(), "A\u{0308}");
    }

    #[test]
    fn test_forms_coincide_without_decomposition() {
        let oracle = NormalizationOracle::new(MacRoman);
        // 0xA5 is • which has no canonical decomposition
        assert_eq!(oracle.composed_form(0xA5).unwrap(), "\u{2022}");
        assert_eq!(oracle.decomposed_form(0xA5).unwrap(), "\u{2022}");
    }

    #[test]
    fn test_ascii_passes_through_both_forms() {
        let oracle = NormalizationOracle::new(MacRoman);
        assert_eq!(oracle.composed_form(b'x').unwrap(), "x");
        assert_eq!(oracle.decomposed_form(b'x').unwrap(), "x");
    }

    #[test]
    fn test_incomplete_code_page_is_fatal() {
        struct Holey;
        impl CodePage for Holey {
            fn name(&self) -> &str {
                "holey"
            }
            fn decode(&self, byte: u8) -> Option<char> {
                (byte != 0x90).then(|| char::from(byte & 0x7F))
            }
        }

        let oracle = NormalizationOracle::new(Holey);
        let err = oracle.composed_form(0x90).unwrap_err();
        assert!(matches!(
            err,
            Error::IncompleteCodePage { byte: 0x90, .. }
        ));
    }

    #[test]
    fn test_character_name_lookup() {
        assert_eq!(character_name('é'), "LATIN SMALL LETTER E WITH ACUTE");
        assert_eq!(character_name('\u{0301}'), "COMBINING ACUTE ACCENT");
    }

    #[test]
    fn test_character_name_fallback() {
        // Private use and controls have no registered name
        assert_eq!(character_name('\u{F8FF}'), "U+F8FF");
        assert_eq!(character_name('\u{0001}'), "U+0001");
    }
}
