//! Error types for the code page generator.
//!
//! This module defines all error types that can occur while building the
//! mapping table and emitting decoder branches.

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during table construction and emission.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The code page has no character assigned to a byte value.
    ///
    /// A single-byte code page must be total over [0, 255]; a missing entry
    /// would silently drop a character from the generated decoder, so this
    /// aborts the whole run.
    #[error("Code page {code_page} has no character for byte {byte:#04x}")]
    IncompleteCodePage {
        /// Name of the offending code page
        code_page: String,
        /// Byte value with no assigned character
        byte: u8,
    },

    /// Two emitted variants would shadow each other in the `else if` chain.
    ///
    /// Branches are chained so that the first matching condition fires; if
    /// one variant's byte sequence is a prefix of (or equal to) another's,
    /// the longer match could never fire.
    #[error("Ambiguous variants: {shadowing} would shadow {shadowed}")]
    AmbiguousVariants {
        /// Hex dump of the shorter (earlier-matching) byte sequence
        shadowing: String,
        /// Hex dump of the byte sequence that could never match
        shadowed: String,
    },

    /// IO error while writing generated source text
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_code_page_error() {
        let err = Error::IncompleteCodePage {
            code_page: "mac_roman".to_string(),
            byte: 0xF0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("mac_roman"));
        assert!(msg.contains("0xf0"));
    }

    #[test]
    fn test_ambiguous_variants_error() {
        let err = Error::AmbiguousVariants {
            shadowing: "41".to_string(),
            shadowed: "41 cc 88".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("41 cc 88"));
        assert!(msg.contains("shadow"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
