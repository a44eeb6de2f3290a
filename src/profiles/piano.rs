//! Piano profile: short attack, frequency-dependent decay, mellow overtones.

use super::{SoundProfile, WaveState};
use crate::modulation::ModulationBank;

/// Stateless piano-like profile.
///
/// The dampening exponent `(0.5 * ln(frequency * volume / sample_rate))^2`
/// assumes `frequency * volume > sample_rate`; below that the logarithm goes
/// negative or undefined and the decay shape is unspecified.
pub struct Piano;

struct PianoWave;

impl SoundProfile for Piano {
    fn name(&self) -> &str {
        "piano"
    }

    fn attack(&self, _sample_rate: f64, _frequency: f64, _volume: f64) -> f64 {
        0.002
    }

    fn dampen(&self, sample_rate: f64, frequency: f64, volume: f64) -> f64 {
        (0.5 * (frequency * volume / sample_rate).ln()).powi(2)
    }

    fn wave_state(&self) -> Box<dyn WaveState> {
        Box::new(PianoWave)
    }
}

impl WaveState for PianoWave {
    fn sample(&mut self, i: usize, sample_rate: f64, frequency: f64, bank: &ModulationBank) -> f64 {
        let carrier = |phase: f64| bank.builtin(0, i, sample_rate, frequency, phase);
        bank.builtin(
            1,
            i,
            sample_rate,
            frequency,
            carrier(0.0).powi(2) + 0.75 * carrier(0.25) + 0.1 * carrier(0.5),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_duration() {
        assert_eq!(Piano.attack(44100.0, 440.0, 32768.0), 0.002);
    }

    #[test]
    fn test_dampen_formula() {
        let expected = (0.5 * (440.0 * 32768.0 / 44100.0_f64).ln()).powi(2);
        assert_eq!(Piano.dampen(44100.0, 440.0, 32768.0), expected);
        assert!(expected > 0.0);
    }

    #[test]
    fn test_wave_is_pure() {
        let bank = ModulationBank::with_builtins();
        let mut a = Piano.wave_state();
        let mut b = Piano.wave_state();
        for i in 0..200 {
            assert_eq!(
                a.sample(i, 44100.0, 261.63, &bank),
                b.sample(i, 44100.0, 261.63, &bank)
            );
        }
    }
}
