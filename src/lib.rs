//! # Codepage Oxide
//!
//! Reconciles a legacy 8-bit single-byte code page with Unicode and
//! generates the C decoder branches that translate UTF-8 text back into
//! legacy bytes.
//!
//! A single legacy byte may be spelled several ways in Unicode: é is one
//! precomposed code point under NFC and a base letter plus combining
//! accent under NFD. For every byte value the mapping table collects the
//! deduplicated, sorted set of such spellings; the emitter then prints one
//! `else if` branch per spelling, matching its exact UTF-8 bytes and
//! advancing the read cursor by the bytes consumed.
//!
//! ## Quick Start
//!
//! ```
//! use codepage_oxide::{DecoderEmitter, MacRoman, MappingTableBuilder};
//!
//! # fn main() -> codepage_oxide::Result<()> {
//! let table = MappingTableBuilder::new(MacRoman).build()?;
//! let mut emitter = DecoderEmitter::new(Vec::new());
//! emitter.emit(&table)?;
//! let fragments = String::from_utf8(emitter.into_inner()).unwrap();
//! assert!(fragments.starts_with("else if ("));
//! # Ok(())
//! # }
//! ```
//!
//! The whole run is a deterministic single-pass batch transform: the table
//! is built once, checked for shadowed matches, and walked in ascending
//! byte order. Output is meant for human review before inclusion in a
//! hand-maintained decoder.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Legacy encoding tables
pub mod codepage;

// Unicode normalization oracle
pub mod normalize;

// Byte-to-variants mapping table
pub mod table;

// Branch text rendering
pub mod formatter;

// Decoder branch emission
pub mod emit;

// Re-exports
pub use codepage::{CodePage, MacRoman};
pub use emit::DecoderEmitter;
pub use error::{Error, Result};
pub use normalize::{character_name, NormalizationOracle};
pub use table::{MappingTable, MappingTableBuilder, UnicodeVariant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
