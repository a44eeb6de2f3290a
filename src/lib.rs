//! Tonegen - procedural tone synthesis to WAV buffers.
//!
//! This library synthesizes short musical tones from parametric instrument
//! profiles (no sample banks) and encodes them as uncompressed 16-bit PCM
//! WAV byte buffers, suitable for UI sounds, games, and simple synths that
//! do not want to ship audio assets.
//!
//! The pipeline: a note name and octave resolve to a frequency, a sound
//! profile shapes the waveform from a shared bank of modulation functions,
//! an attack/decay envelope renders the tone to PCM samples, and the WAV
//! encoder packs the result into a byte buffer.
//!
//! # Examples
//!
//! ```
//! use tonegen::Synth;
//!
//! let synth = Synth::new();
//! let wav = synth.generate("piano", "A", 4, 0.5).unwrap();
//! assert_eq!(&wav[0..4], b"RIFF");
//! // std::fs::write("a4.wav", &wav) would produce a playable file.
//! ```

pub mod error;
pub mod modulation;
pub mod notes;
pub mod profiles;
pub mod render;
pub mod synth;
pub mod wav;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use modulation::{ModulationBank, ModulationFn};
pub use notes::{Pitch, resolve};
pub use profiles::{Acoustic, Edm, Organ, Piano, SoundProfile, WaveState};
pub use render::render;
pub use synth::{Instrument, ProfileRef, Synth};
pub use wav::{WavFormat, encode};
