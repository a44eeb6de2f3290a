//! Generates one note per built-in profile and writes the WAV files to the
//! current directory.
//!
//! Run with: `cargo run --example write_note`

use anyhow::Result;
use tonegen::Synth;

fn main() -> Result<()> {
    let synth = Synth::new();

    for name in ["acoustic", "edm", "organ", "piano"] {
        let wav = synth.generate(name, "A", 4, 1.5)?;
        let path = format!("{name}_a4.wav");
        std::fs::write(&path, &wav)?;
        println!("wrote {path} ({} bytes)", wav.len());
    }

    Ok(())
}
