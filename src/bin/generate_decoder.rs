//! Generate UTF-8 → Mac Roman decoder branches
//!
//! Builds the Mac Roman mapping table and prints the cascading `else if`
//! fragments to stdout, ready to paste into the hand-maintained decoder.
//!
//! Usage:
//!   cargo run --release --bin generate_decoder > branches.c
//!   RUST_LOG=debug cargo run --bin generate_decoder

use std::io::{self, Write};

use codepage_oxide::{DecoderEmitter, MacRoman, MappingTableBuilder, Result};

fn run() -> Result<()> {
    let table = MappingTableBuilder::new(MacRoman).build()?;

    let stdout = io::stdout();
    let mut emitter = DecoderEmitter::new(io::BufWriter::new(stdout.lock()));
    emitter.emit(&table)?;
    emitter.into_inner().flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
