//! Mapping table from legacy bytes to their Unicode spellings.
//!
//! For every byte value of the code page the table stores the set of
//! Unicode variants (NFC and NFD spellings, deduplicated) that denote the
//! same character. Variant sets are `BTreeSet`s ordered by UTF-8 byte
//! sequence, so iteration order is deterministic across runs and
//! platforms; emission depends on this ordering contract.

use std::collections::BTreeSet;

use crate::codepage::CodePage;
use crate::error::{Error, Result};
use crate::normalize::NormalizationOracle;

/// One Unicode spelling of a code page character, stored as its UTF-8
/// text.
///
/// Ordering and equality follow the UTF-8 byte sequence (`str` ordering is
/// byte-lexicographic), which is the sort key the emitted branch order
/// relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnicodeVariant(String);

impl UnicodeVariant {
    /// Wrap a normalized spelling.
    pub fn new(text: String) -> Self {
        Self(text)
    }

    /// The spelling as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The spelling's UTF-8 encoding.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of UTF-8 bytes; the emitted branch advances the input
    /// cursor by exactly this much.
    pub fn byte_len(&self) -> usize {
        self.0.len()
    }

    /// Code points of the spelling, in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

/// Read-only mapping from every byte value to its variant set.
///
/// Built once by [`MappingTableBuilder`]; every byte has at least one
/// variant (NFC and NFD may coincide, collapsing to a single entry).
#[derive(Debug)]
pub struct MappingTable {
    variants: Vec<BTreeSet<UnicodeVariant>>,
}

impl MappingTable {
    /// Variant set for one byte value, sorted ascending by byte sequence.
    pub fn variants(&self, byte: u8) -> &BTreeSet<UnicodeVariant> {
        &self.variants[byte as usize]
    }

    /// All 256 entries in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BTreeSet<UnicodeVariant>)> {
        self.variants
            .iter()
            .enumerate()
            .map(|(byte, set)| (byte as u8, set))
    }

    /// Verify that no emitted variant could shadow another in the
    /// generated `else if` chain.
    ///
    /// Branches are tried in order and the first match wins, so a variant
    /// whose byte sequence is a prefix of (or equal to) another's would
    /// make the longer match unreachable. Only non-ASCII bytes are
    /// checked, since ASCII bytes are never emitted.
    pub fn verify_unambiguous(&self) -> Result<()> {
        let mut sequences: Vec<&[u8]> = self
            .iter()
            .filter(|(byte, _)| *byte >= 0x80)
            .flat_map(|(_, set)| set.iter().map(UnicodeVariant::as_bytes))
            .collect();
        sequences.sort_unstable();

        // After sorting, any prefix pair appears as neighbors.
        for pair in sequences.windows(2) {
            if pair[1].starts_with(pair[0]) {
                return Err(Error::AmbiguousVariants {
                    shadowing: hex_dump(pair[0]),
                    shadowed: hex_dump(pair[1]),
                });
            }
        }
        Ok(())
    }
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the full [`MappingTable`] for a code page.
#[derive(Debug)]
pub struct MappingTableBuilder<P: CodePage> {
    oracle: NormalizationOracle<P>,
}

impl<P: CodePage> MappingTableBuilder<P> {
    /// Create a builder over the given code page.
    pub fn new(page: P) -> Self {
        Self {
            oracle: NormalizationOracle::new(page),
        }
    }

    /// Compute the variant set for all 256 byte values.
    ///
    /// Fails with [`Error::IncompleteCodePage`] if the code page cannot
    /// decode some byte; there is no partial output mode, since a missing
    /// entry would silently corrupt the generated decoder.
    pub fn build(&self) -> Result<MappingTable> {
        let mut variants = Vec::with_capacity(256);

        for byte in 0..=255u8 {
            let mut set = BTreeSet::new();
            set.insert(UnicodeVariant::new(self.oracle.composed_form(byte)?));
            set.insert(UnicodeVariant::new(self.oracle.decomposed_form(byte)?));

            log::debug!(
                "byte {:#04x}: {} variant(s)",
                byte,
                set.len()
            );
            variants.push(set);
        }

        let total: usize = variants.iter().map(BTreeSet::len).sum();
        log::info!(
            "built mapping table for {}: {} variants over 256 bytes",
            self.oracle.code_page().name(),
            total
        );

        Ok(MappingTable { variants })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepage::MacRoman;

    fn mac_roman_table() -> MappingTable {
        MappingTableBuilder::new(MacRoman).build().unwrap()
    }

    #[test]
    fn test_every_byte_has_a_variant() {
        let table = mac_roman_table();
        for byte in 0..=255u8 {
            assert!(
                !table.variants(byte).is_empty(),
                "byte {:#04x} has no variants",
                byte
            );
        }
    }

    #[test]
    fn test_accented_letter_has_two_variants() {
        let table = mac_roman_table();
        // 0x8E is é: precomposed (c3 a9) and decomposed (65 cc 81)
        let variants: Vec<&[u8]> =
            table.variants(0x8E).iter().map(UnicodeVariant::as_bytes).collect();
        assert_eq!(variants, vec![&[0x65, 0xCC, 0x81][..], &[0xC3, 0xA9][..]]);
    }

    #[test]
    fn test_symbol_collapses_to_one_variant() {
        let table = mac_roman_table();
        // 0xA5 is • with no canonical decomposition
        let variants: Vec<&[u8]> =
            table.variants(0xA5).iter().map(UnicodeVariant::as_bytes).collect();
        assert_eq!(variants, vec![&[0xE2, 0x80, 0xA2][..]]);
    }

    #[test]
    fn test_variants_sorted_by_byte_sequence() {
        let table = mac_roman_table();
        for byte in 0..=255u8 {
            let seqs: Vec<&[u8]> =
                table.variants(byte).iter().map(UnicodeVariant::as_bytes).collect();
            let mut sorted = seqs.clone();
            sorted.sort_unstable();
            assert_eq!(seqs, sorted);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = mac_roman_table();
        let b = mac_roman_table();
        for byte in 0..=255u8 {
            assert_eq!(a.variants(byte), b.variants(byte));
        }
    }

    #[test]
    fn test_mac_roman_is_unambiguous() {
        mac_roman_table().verify_unambiguous().unwrap();
    }

    #[test]
    fn test_prefix_collision_is_rejected() {
        // 0x80 decodes to Ä (NFD spelling "A" + U+0308) and 0x81 to bare
        // "A": the one-byte match would shadow the three-byte one.
        struct Ambiguous;
        impl CodePage for Ambiguous {
            fn name(&self) -> &str {
                "ambiguous"
            }
            fn decode(&self, byte: u8) -> Option<char> {
                match byte {
                    0x80 => Some('\u{00C4}'),
                    0x81 => Some('A'),
                    b if b < 0x80 => Some(char::from(b)),
                    // Distinct private-use filler for the remaining bytes
                    b => char::from_u32(0xE000 + u32::from(b)),
                }
            }
        }

        let table = MappingTableBuilder::new(Ambiguous).build().unwrap();
        let err = table.verify_unambiguous().unwrap_err();
        assert!(matches!(err, Error::AmbiguousVariants { .. }));
    }

    #[test]
    fn test_round_trip_through_normalization() {
        use unicode_normalization::UnicodeNormalization;

        let table = mac_roman_table();
        for byte in 0x80..=0xFFu8 {
            let ch = MacRoman.decode(byte).unwrap();
            let nfc: String = std::iter::once(ch).nfc().collect();
            for variant in table.variants(byte) {
                let renormalized: String = variant.as_str().nfc().collect();
                assert_eq!(
                    renormalized, nfc,
                    "variant of {:#04x} does not round-trip",
                    byte
                );
            }
        }
    }
}
