//! Sound profiles: named synthesis strategies.
//!
//! A profile bundles three operations: the attack duration, the decay-curve
//! exponent, and a waveform function. The waveform runs against a per-render
//! [`WaveState`] so that profiles themselves stay immutable strategy values;
//! stateless profiles hand out a zero-sized state, while `acoustic` keeps a
//! mutable feedback table alive for the duration of one render.

mod acoustic;
mod edm;
mod organ;
mod piano;

pub use acoustic::Acoustic;
pub use edm::Edm;
pub use organ::Organ;
pub use piano::Piano;

use crate::modulation::ModulationBank;

/// A named synthesis strategy.
///
/// Implementations must be safe to share across threads; all per-render
/// mutability lives in the [`WaveState`] returned by
/// [`wave_state`](SoundProfile::wave_state), which is created fresh for each
/// render call and discarded afterwards.
pub trait SoundProfile: Send + Sync {
    /// Unique profile name used for registry lookups.
    fn name(&self) -> &str;

    /// Attack-phase duration in seconds.
    fn attack(&self, sample_rate: f64, frequency: f64, volume: f64) -> f64;

    /// Exponent shaping the decay curve after the attack phase.
    fn dampen(&self, sample_rate: f64, frequency: f64, volume: f64) -> f64;

    /// Creates the waveform state for one render call.
    fn wave_state(&self) -> Box<dyn WaveState>;
}

/// Per-render waveform generator owning the profile's scratch state.
///
/// One value is created per render call and must never be shared between
/// concurrent renders.
pub trait WaveState {
    /// Returns the waveform amplitude in `[-1, 1]` for one sample index.
    fn sample(
        &mut self,
        sample_index: usize,
        sample_rate: f64,
        frequency: f64,
        bank: &ModulationBank,
    ) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built_ins() -> Vec<Box<dyn SoundProfile>> {
        vec![
            Box::new(Acoustic::new()),
            Box::new(Edm),
            Box::new(Organ),
            Box::new(Piano),
        ]
    }

    #[test]
    fn test_names_are_distinct() {
        let profiles = built_ins();
        for (i, a) in profiles.iter().enumerate() {
            for b in &profiles[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_stateless_waveforms_bounded() {
        let bank = ModulationBank::with_builtins();
        for profile in [
            Box::new(Edm) as Box<dyn SoundProfile>,
            Box::new(Organ),
            Box::new(Piano),
        ] {
            let mut wave = profile.wave_state();
            for i in 0..2000 {
                let v = wave.sample(i, 44100.0, 440.0, &bank);
                assert!(
                    v.abs() <= 2.0,
                    "{} produced runaway amplitude {v}",
                    profile.name()
                );
            }
        }
    }
}
