//! Note table and frequency resolution.
//!
//! Maps the 12 chromatic pitch classes to reference frequencies at octave 4
//! and resolves `(note, octave)` pairs to frequencies in Hz.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lowest octave accepted by the resolver; lower requests clamp to it.
pub const MIN_OCTAVE: i32 = 1;
/// Highest octave accepted by the resolver; higher requests clamp to it.
pub const MAX_OCTAVE: i32 = 8;

/// Reference octave embedded in the note table.
const REFERENCE_OCTAVE: i32 = 4;

/// The 12 pitch classes of the chromatic scale, sharp notation only.
///
/// # Examples
///
/// ```
/// use tonegen::Pitch;
///
/// let a: Pitch = "A".parse().unwrap();
/// assert_eq!(a.frequency(4), 440.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pitch {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Pitch {
    /// All pitch classes in ascending chromatic order.
    pub const ALL: [Pitch; 12] = [
        Pitch::C,
        Pitch::CSharp,
        Pitch::D,
        Pitch::DSharp,
        Pitch::E,
        Pitch::F,
        Pitch::FSharp,
        Pitch::G,
        Pitch::GSharp,
        Pitch::A,
        Pitch::ASharp,
        Pitch::B,
    ];

    /// Returns the reference frequency of this pitch class at octave 4, in Hz.
    pub fn reference_frequency(self) -> f64 {
        match self {
            Pitch::C => 261.63,
            Pitch::CSharp => 277.18,
            Pitch::D => 293.66,
            Pitch::DSharp => 311.13,
            Pitch::E => 329.63,
            Pitch::F => 349.23,
            Pitch::FSharp => 369.99,
            Pitch::G => 392.00,
            Pitch::GSharp => 415.30,
            Pitch::A => 440.00,
            Pitch::ASharp => 466.16,
            Pitch::B => 493.88,
        }
    }

    /// Returns the frequency of this pitch at the given octave, in Hz.
    ///
    /// The octave is clamped into `[1, 8]` before use; each octave step
    /// doubles or halves the reference frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::Pitch;
    ///
    /// assert_eq!(Pitch::A.frequency(5), 880.0);
    /// assert_eq!(Pitch::A.frequency(0), Pitch::A.frequency(1));
    /// ```
    pub fn frequency(self, octave: i32) -> f64 {
        let octave = octave.clamp(MIN_OCTAVE, MAX_OCTAVE);
        self.reference_frequency() * 2f64.powi(octave - REFERENCE_OCTAVE)
    }

    /// Returns the note name, e.g. `"C#"`.
    pub fn name(self) -> &'static str {
        match self {
            Pitch::C => "C",
            Pitch::CSharp => "C#",
            Pitch::D => "D",
            Pitch::DSharp => "D#",
            Pitch::E => "E",
            Pitch::F => "F",
            Pitch::FSharp => "F#",
            Pitch::G => "G",
            Pitch::GSharp => "G#",
            Pitch::A => "A",
            Pitch::ASharp => "A#",
            Pitch::B => "B",
        }
    }
}

impl FromStr for Pitch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "C" => Ok(Pitch::C),
            "C#" => Ok(Pitch::CSharp),
            "D" => Ok(Pitch::D),
            "D#" => Ok(Pitch::DSharp),
            "E" => Ok(Pitch::E),
            "F" => Ok(Pitch::F),
            "F#" => Ok(Pitch::FSharp),
            "G" => Ok(Pitch::G),
            "G#" => Ok(Pitch::GSharp),
            "A" => Ok(Pitch::A),
            "A#" => Ok(Pitch::ASharp),
            "B" => Ok(Pitch::B),
            _ => Err(Error::InvalidNote(s.to_string())),
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a note name and octave to a frequency in Hz.
///
/// # Arguments
///
/// * `note` - One of the 12 pitch-class names (`"C"` through `"B"`, sharps
///   written as `"C#"`)
/// * `octave` - Octave number, clamped into `[1, 8]`
///
/// # Errors
///
/// Returns [`Error::InvalidNote`] if `note` is not a pitch-class name.
///
/// # Examples
///
/// ```
/// use tonegen::notes::resolve;
///
/// assert_eq!(resolve("A", 4).unwrap(), 440.0);
/// assert_eq!(resolve("A", 5).unwrap(), 880.0);
/// assert!(resolve("Z", 4).is_err());
/// ```
pub fn resolve(note: &str, octave: i32) -> Result<f64> {
    Ok(note.parse::<Pitch>()?.frequency(octave))
}
