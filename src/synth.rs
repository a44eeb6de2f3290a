//! The synthesis engine: profile registry, format settings, and generation.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::modulation::ModulationBank;
use crate::notes;
use crate::profiles::{Acoustic, Edm, Organ, Piano, SoundProfile};
use crate::render::render;
use crate::wav::{WavFormat, encode};

/// Lowest accepted sample rate in Hz; lower requests clamp to it.
pub const MIN_SAMPLE_RATE: u32 = 4000;
/// Highest accepted sample rate in Hz; higher requests clamp to it.
pub const MAX_SAMPLE_RATE: u32 = 44100;
/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Full-scale internal volume; `set_volume(1.0)` maps to this.
pub const MAX_VOLUME: u16 = 32768;

/// A profile reference: either a registry name or a slot index.
///
/// Callers holding a name or an index can pass either directly to the
/// engine's generate operations via the `From` impls.
///
/// # Examples
///
/// ```
/// use tonegen::Synth;
///
/// let synth = Synth::new();
/// let by_name = synth.generate("piano", "A", 4, 0.01).unwrap();
/// let by_index = synth.generate(3usize, "A", 4, 0.01).unwrap();
/// assert_eq!(by_name, by_index);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRef<'a> {
    /// Lookup by unique profile name.
    Name(&'a str),
    /// Lookup by registration slot index.
    Index(usize),
}

impl<'a> From<&'a str> for ProfileRef<'a> {
    fn from(name: &'a str) -> Self {
        ProfileRef::Name(name)
    }
}

impl From<usize> for ProfileRef<'_> {
    fn from(index: usize) -> Self {
        ProfileRef::Index(index)
    }
}

impl fmt::Display for ProfileRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileRef::Name(name) => f.write_str(name),
            ProfileRef::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// A tone synthesis engine.
///
/// Each engine owns its profile registry, modulation bank, and format
/// settings, so independent configurations (different sample rates, custom
/// profiles) can coexist. A new engine carries the four built-in profiles
/// `acoustic`, `edm`, `organ`, `piano` (in that registration order) and the
/// 11 built-in modulation functions.
///
/// Rendering takes `&self`: all per-render state is allocated inside the
/// call, so one engine may serve renders from multiple threads.
///
/// # Examples
///
/// ```
/// use tonegen::Synth;
///
/// let synth = Synth::new();
/// let wav = synth.generate("piano", "C", 4, 0.25).unwrap();
/// assert_eq!(&wav[0..4], b"RIFF");
/// ```
pub struct Synth {
    sample_rate: u32,
    volume: u16,
    bank: ModulationBank,
    profiles: Vec<Box<dyn SoundProfile>>,
    by_name: HashMap<String, usize>,
}

impl Synth {
    /// Creates an engine with the built-in profiles and modulation bank.
    pub fn new() -> Self {
        let mut synth = Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            volume: MAX_VOLUME,
            bank: ModulationBank::with_builtins(),
            profiles: Vec::new(),
            by_name: HashMap::new(),
        };
        let built_ins: [Box<dyn SoundProfile>; 4] = [
            Box::new(Acoustic::new()),
            Box::new(Edm),
            Box::new(Organ),
            Box::new(Piano),
        ];
        for profile in built_ins {
            synth
                .register_profile(profile)
                .expect("built-in profile names are distinct");
        }
        synth
    }

    /// Sets the output sample rate, floored into `[4000, 44100]` Hz, and
    /// returns the value in effect.
    pub fn set_sample_rate(&mut self, rate: u32) -> u32 {
        self.sample_rate = rate.clamp(MIN_SAMPLE_RATE, MAX_SAMPLE_RATE);
        self.sample_rate
    }

    /// Current output sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Sets the peak volume from a `[0.0, 1.0]` level and returns the
    /// internal `0..=32768` value in effect. Out-of-range levels clamp.
    pub fn set_volume(&mut self, level: f64) -> u16 {
        let scaled = (level * f64::from(MAX_VOLUME)).trunc();
        self.volume = scaled.clamp(0.0, f64::from(MAX_VOLUME)) as u16;
        self.volume
    }

    /// Current volume as a `[0.0, 1.0]` level, rounded to 4 decimal places.
    pub fn volume(&self) -> f64 {
        (f64::from(self.volume) / f64::from(MAX_VOLUME) * 1e4).round() / 1e4
    }

    /// Looks up a profile by registry name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] if no profile has that name.
    pub fn profile_by_name(&self, name: &str) -> Result<&dyn SoundProfile> {
        self.resolve(ProfileRef::Name(name))
            .map(|index| self.profiles[index].as_ref())
    }

    /// Looks up a profile by slot index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] if the index is out of range.
    pub fn profile_by_index(&self, index: usize) -> Result<&dyn SoundProfile> {
        self.resolve(ProfileRef::Index(index))
            .map(|index| self.profiles[index].as_ref())
    }

    /// Profile names in registration order.
    pub fn profiles(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name())
    }

    /// The engine's modulation bank.
    pub fn modulations(&self) -> &ModulationBank {
        &self.bank
    }

    /// Registers a profile and returns its slot index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProfileRegistration`] if a profile with the same
    /// name is already registered; the registry is left unchanged.
    pub fn register_profile(&mut self, profile: Box<dyn SoundProfile>) -> Result<usize> {
        let name = profile.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(Error::ProfileRegistration(name));
        }
        let index = self.profiles.len();
        self.by_name.insert(name, index);
        self.profiles.push(profile);
        Ok(index)
    }

    /// Appends a modulation function to the bank and returns its index.
    pub fn register_modulation(
        &mut self,
        f: impl Fn(usize, f64, f64, f64) -> f64 + Send + Sync + 'static,
    ) -> usize {
        self.bank.register(f)
    }

    /// Renders a note to PCM samples without encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] for an unknown profile reference.
    pub fn render_samples<'p>(
        &self,
        profile: impl Into<ProfileRef<'p>>,
        frequency: f64,
        duration: f64,
    ) -> Result<Vec<i16>> {
        let index = self.resolve(profile.into())?;
        Ok(render(
            self.profiles[index].as_ref(),
            &self.bank,
            frequency,
            duration,
            self.sample_rate,
            self.volume,
        ))
    }

    /// Renders a note and encodes it into a WAV byte buffer.
    ///
    /// # Arguments
    ///
    /// * `profile` - Profile name (`&str`) or slot index (`usize`)
    /// * `note` - Pitch-class name, e.g. `"C#"`
    /// * `octave` - Octave number, clamped into `[1, 8]`
    /// * `duration` - Tone length in seconds
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNote`] for an unknown note name and
    /// [`Error::InvalidProfile`] for an unknown profile reference; nothing
    /// is rendered or encoded on failure.
    pub fn generate<'p>(
        &self,
        profile: impl Into<ProfileRef<'p>>,
        note: &str,
        octave: i32,
        duration: f64,
    ) -> Result<Vec<u8>> {
        let frequency = notes::resolve(note, octave)?;
        self.generate_frequency(profile, frequency, duration)
    }

    /// Renders a raw frequency and encodes it into a WAV byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] for an unknown profile reference.
    pub fn generate_frequency<'p>(
        &self,
        profile: impl Into<ProfileRef<'p>>,
        frequency: f64,
        duration: f64,
    ) -> Result<Vec<u8>> {
        let samples = self.render_samples(profile, frequency, duration)?;
        Ok(encode(&samples, &WavFormat::mono(self.sample_rate)))
    }

    /// Creates a handle bound to one validated profile slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] for an unknown profile reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::Synth;
    ///
    /// let synth = Synth::new();
    /// let organ = synth.instrument("organ").unwrap();
    /// let wav = organ.generate("G", 3, 0.1).unwrap();
    /// assert!(!wav.is_empty());
    /// ```
    pub fn instrument<'p>(&self, profile: impl Into<ProfileRef<'p>>) -> Result<Instrument<'_>> {
        let index = self.resolve(profile.into())?;
        Ok(Instrument { synth: self, index })
    }

    fn resolve(&self, profile: ProfileRef<'_>) -> Result<usize> {
        let index = match profile {
            ProfileRef::Name(name) => self.by_name.get(name).copied(),
            ProfileRef::Index(index) => (index < self.profiles.len()).then_some(index),
        };
        index.ok_or_else(|| Error::InvalidProfile(profile.to_string()))
    }
}

impl Default for Synth {
    fn default() -> Self {
        Self::new()
    }
}

/// A thin handle pinning one profile slot of a [`Synth`].
///
/// Mirrors the engine's generate operations with the profile argument fixed.
pub struct Instrument<'a> {
    synth: &'a Synth,
    index: usize,
}

impl Instrument<'_> {
    /// The bound profile's name.
    pub fn name(&self) -> &str {
        self.synth.profiles[self.index].name()
    }

    /// The bound profile's slot index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Renders a note through the bound profile. See [`Synth::generate`].
    pub fn generate(&self, note: &str, octave: i32, duration: f64) -> Result<Vec<u8>> {
        self.synth.generate(self.index, note, octave, duration)
    }

    /// Renders a raw frequency through the bound profile.
    /// See [`Synth::generate_frequency`].
    pub fn generate_frequency(&self, frequency: f64, duration: f64) -> Result<Vec<u8>> {
        self.synth.generate_frequency(self.index, frequency, duration)
    }
}
