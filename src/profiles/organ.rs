//! Organ profile: slow attack, additive stack of phase-shifted carriers.

use super::{SoundProfile, WaveState};
use crate::modulation::ModulationBank;

/// Stateless organ-like profile with a 300 ms attack swell.
pub struct Organ;

struct OrganWave;

impl SoundProfile for Organ {
    fn name(&self) -> &str {
        "organ"
    }

    fn attack(&self, _sample_rate: f64, _frequency: f64, _volume: f64) -> f64 {
        0.3
    }

    fn dampen(&self, _sample_rate: f64, frequency: f64, _volume: f64) -> f64 {
        1.0 + frequency * 0.01
    }

    fn wave_state(&self) -> Box<dyn WaveState> {
        Box::new(OrganWave)
    }
}

impl WaveState for OrganWave {
    fn sample(&mut self, i: usize, sample_rate: f64, frequency: f64, bank: &ModulationBank) -> f64 {
        let carrier = |phase: f64| bank.builtin(0, i, sample_rate, frequency, phase);
        bank.builtin(
            1,
            i,
            sample_rate,
            frequency,
            carrier(0.0) + 0.5 * carrier(0.25) + 0.25 * carrier(0.5),
        )
    }
}
