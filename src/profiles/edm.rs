//! EDM profile: nested FM over odd powers of the carrier.

use super::{SoundProfile, WaveState};
use crate::modulation::ModulationBank;

/// Stateless profile producing a harsh, clipped-feeling timbre.
///
/// Odd powers of the carrier at several phase offsets are fed through three
/// nested modulation stages, which folds the spectrum into dense sidebands.
pub struct Edm;

struct EdmWave;

impl SoundProfile for Edm {
    fn name(&self) -> &str {
        "edm"
    }

    fn attack(&self, _sample_rate: f64, _frequency: f64, _volume: f64) -> f64 {
        0.002
    }

    fn dampen(&self, _sample_rate: f64, _frequency: f64, _volume: f64) -> f64 {
        1.0
    }

    fn wave_state(&self) -> Box<dyn WaveState> {
        Box::new(EdmWave)
    }
}

impl WaveState for EdmWave {
    fn sample(&mut self, i: usize, sample_rate: f64, frequency: f64, bank: &ModulationBank) -> f64 {
        let base = |phase: f64| bank.builtin(1, i, sample_rate, frequency, phase);
        let powers = base(0.0).powi(3) + base(0.5).powi(5) + base(1.0).powi(7);
        bank.builtin(
            1,
            i,
            sample_rate,
            frequency,
            bank.builtin(
                10,
                i,
                sample_rate,
                frequency,
                bank.builtin(3, i, sample_rate, frequency, powers),
            ) + bank.builtin(9, i, sample_rate, frequency, base(1.75)),
        )
    }
}
