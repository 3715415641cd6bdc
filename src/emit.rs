//! Emission of the cascading C decoder branches.
//!
//! Walks the mapping table in ascending byte order and prints one
//! `else if` branch per variant of every non-ASCII byte. The fragments are
//! pasted after an existing `if` in a hand-maintained decoder, so the very
//! first branch already reads `else if`, and consecutive branches share a
//! line at the closing brace:
//!
//! ```text
//! else if (src[0]=='A' && src[1]==0xcc && src[2]==0x88) {
//!     *dest++ = 0x80; // LATIN CAPITAL LETTER A + COMBINING DIAERESIS
//!     src += 3;
//! } else if (src[0]==0xc3 && src[1]==0x84) {
//!     ...
//! }
//! ```
//!
//! Branch order is semantically significant (the first match wins), so
//! emission is strictly sequential and the table's ambiguity check runs
//! before any text is written.

use std::io::Write;

use crate::error::Result;
use crate::formatter;
use crate::table::MappingTable;

/// First byte value that needs a translation branch; everything below is
/// plain ASCII and identical in the legacy encoding.
const FIRST_NON_ASCII: u8 = 0x80;

/// Writes decoder branch fragments for a [`MappingTable`].
#[derive(Debug)]
pub struct DecoderEmitter<W: Write> {
    out: W,
}

impl<W: Write> DecoderEmitter<W> {
    /// Create an emitter over an output stream.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit one conditional branch per variant of every non-ASCII byte.
    ///
    /// Verifies the table is free of shadowed matches first and writes
    /// nothing on failure. Each branch translates one Unicode spelling
    /// back to its legacy byte and advances the read cursor by the number
    /// of bytes matched.
    pub fn emit(&mut self, table: &MappingTable) -> Result<()> {
        table.verify_unambiguous()?;

        let mut emitted = 0usize;
        for (byte, variants) in table.iter() {
            if byte < FIRST_NON_ASCII {
                continue;
            }

            for variant in variants {
                let chain = if emitted == 0 { "" } else { "} " };
                writeln!(
                    self.out,
                    "{}else if ({}) {{",
                    chain,
                    formatter::match_expression(variant)
                )?;
                writeln!(
                    self.out,
                    "\t*dest++ = {:#x}; // {}",
                    byte,
                    formatter::explain(variant)
                )?;
                writeln!(self.out, "\tsrc += {};", variant.byte_len())?;
                emitted += 1;
            }
        }
        // Close the last branch; the trailing space lets the caller
        // continue the chain or drop a final else on the same line.
        if emitted > 0 {
            write!(self.out, "}} ")?;
        }

        log::info!("emitted {} decoder branches", emitted);
        Ok(())
    }

    /// Consume the emitter, returning the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
