//! Acoustic profile: plucked-string texture from a decaying noise loop.
//!
//! This is the one stateful profile. Each render grows a table of random
//! `{-1, +1}` values until it covers one fundamental period, then plays the
//! table in a loop while averaging neighboring entries, a Karplus-Strong
//! style low-pass that darkens the noise burst into a string-like decay.
//! The loop cursor wraps on a fractional-period schedule so the loop length
//! stays locked to `sample_rate / frequency` on average.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{SoundProfile, WaveState};
use crate::modulation::ModulationBank;

/// Stateful plucked-string profile.
///
/// The random noise burst is the only non-deterministic element of the
/// synthesis pipeline. By default each render draws a fresh seed from OS
/// entropy; [`Acoustic::seeded`] pins the seed so that repeated renders are
/// byte-identical, which keeps result caching sound.
///
/// # Examples
///
/// ```
/// use tonegen::{Acoustic, Synth};
///
/// let mut synth = Synth::new();
/// synth.register_profile(Box::new(Acoustic::seeded(7).named("acoustic-7"))).unwrap();
/// let a = synth.generate("acoustic-7", "E", 3, 0.1).unwrap();
/// let b = synth.generate("acoustic-7", "E", 3, 0.1).unwrap();
/// assert_eq!(a, b);
/// ```
pub struct Acoustic {
    name: String,
    seed: Option<u64>,
}

impl Acoustic {
    /// Creates the profile with entropy-seeded randomness per render.
    pub fn new() -> Self {
        Self {
            name: "acoustic".to_string(),
            seed: None,
        }
    }

    /// Creates the profile with a fixed seed, making renders reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            name: "acoustic".to_string(),
            seed: Some(seed),
        }
    }

    /// Overrides the registry name, e.g. to register a seeded variant next
    /// to the default profile.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for Acoustic {
    fn default() -> Self {
        Self::new()
    }
}

struct AcousticWave {
    rng: StdRng,
    table: Vec<f64>,
    cursor: usize,
    period_count: u32,
}

impl SoundProfile for Acoustic {
    fn name(&self) -> &str {
        &self.name
    }

    fn attack(&self, _sample_rate: f64, _frequency: f64, _volume: f64) -> f64 {
        0.002
    }

    fn dampen(&self, _sample_rate: f64, _frequency: f64, _volume: f64) -> f64 {
        1.0
    }

    fn wave_state(&self) -> Box<dyn WaveState> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Box::new(AcousticWave {
            rng,
            table: Vec::new(),
            cursor: 0,
            period_count: 0,
        })
    }
}

impl WaveState for AcousticWave {
    fn sample(
        &mut self,
        _sample_index: usize,
        sample_rate: f64,
        frequency: f64,
        _bank: &ModulationBank,
    ) -> f64 {
        let period = sample_rate / frequency;
        let period_hundredths = ((period - period.floor()) * 100.0).floor() as u32;

        // Fill phase: emit raw noise until the table covers one period.
        if self.table.len() <= period.ceil() as usize {
            let value = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            self.table.push(value);
            return value;
        }

        // Average the cursor with its successor (wrapping at the end).
        let next = if self.cursor >= self.table.len() - 1 {
            0
        } else {
            self.cursor + 1
        };
        self.table[self.cursor] = (self.table[next] + self.table[self.cursor]) * 0.5;

        // Wrap on a schedule that honors the fractional part of the period:
        // `period_hundredths` out of every 100 periods run one sample long.
        let mut wrap = false;
        if self.cursor >= period.floor() as usize {
            if self.cursor < period.ceil() as usize {
                if self.period_count % 100 >= period_hundredths {
                    wrap = true;
                    self.table[self.cursor + 1] =
                        (self.table[0] + self.table[self.cursor + 1]) * 0.5;
                    self.period_count += 1;
                }
            } else {
                wrap = true;
            }
        }

        let out = self.table[self.cursor];
        self.cursor = if wrap { 0 } else { self.cursor + 1 };
        out
    }
}
