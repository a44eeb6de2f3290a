//! Modulation function library shared by all sound profiles.
//!
//! A modulation function is a parameterized oscillator
//! `(sample_index, sample_rate, frequency, phase_offset) -> amplitude`
//! used as a building block inside profile waveform functions. Functions are
//! identified by a stable integer index; the set is append-only within one
//! bank, and index 0 is the canonical unmodified sine carrier.

use std::f64::consts::PI;

use crate::error::{Error, Result};

/// A boxed modulation function.
///
/// Arguments are `(sample_index, sample_rate, frequency, phase_offset)`;
/// the return value is an amplitude, nominally in `[-1, 1]`.
pub type ModulationFn = Box<dyn Fn(usize, f64, f64, f64) -> f64 + Send + Sync>;

/// Append-only, indexable set of modulation functions.
///
/// Each bank starts with the 11 built-in entries: the sine carrier at index
/// 0, followed by sines at harmonic multiples {2, 4, 8, 0.5, 0.25} of π in
/// two amplitude tiers (1.0 at indices 1-5, 0.5 at indices 6-10).
pub struct ModulationBank {
    entries: Vec<ModulationFn>,
}

/// Builds a sine entry `amplitude * sin(multiple * π * (i/rate * freq) + x)`.
fn harmonic(amplitude: f64, multiple: f64) -> ModulationFn {
    Box::new(move |i, sample_rate, frequency, x| {
        amplitude * (multiple * PI * (i as f64 / sample_rate * frequency) + x).sin()
    })
}

impl ModulationBank {
    /// Creates a bank holding the 11 built-in entries.
    pub fn with_builtins() -> Self {
        let mut entries: Vec<ModulationFn> = Vec::with_capacity(11);
        // Index 0: the canonical carrier.
        entries.push(Box::new(|i, sample_rate, frequency, x| {
            (2.0 * PI * (i as f64 / sample_rate) * frequency + x).sin()
        }));
        for amplitude in [1.0, 0.5] {
            for multiple in [2.0, 4.0, 8.0, 0.5, 0.25] {
                entries.push(harmonic(amplitude, multiple));
            }
        }
        Self { entries }
    }

    /// Evaluates the function at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModulation`] if `index` is not registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::ModulationBank;
    ///
    /// let bank = ModulationBank::with_builtins();
    /// // The carrier starts at phase zero.
    /// assert_eq!(bank.eval(0, 0, 44100.0, 440.0, 0.0).unwrap(), 0.0);
    /// ```
    pub fn eval(
        &self,
        index: usize,
        sample_index: usize,
        sample_rate: f64,
        frequency: f64,
        phase_offset: f64,
    ) -> Result<f64> {
        let f = self
            .entries
            .get(index)
            .ok_or(Error::InvalidModulation(index))?;
        Ok(f(sample_index, sample_rate, frequency, phase_offset))
    }

    /// Evaluates a built-in entry without the bounds check.
    ///
    /// The built-in indices `0..=10` are a structural invariant: every bank
    /// is constructed with them and registration is append-only.
    pub(crate) fn builtin(
        &self,
        index: usize,
        sample_index: usize,
        sample_rate: f64,
        frequency: f64,
        phase_offset: f64,
    ) -> f64 {
        (self.entries[index])(sample_index, sample_rate, frequency, phase_offset)
    }

    /// Appends a modulation function and returns its index.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::ModulationBank;
    ///
    /// let mut bank = ModulationBank::with_builtins();
    /// let index = bank.register(|_i, _rate, _freq, _x| 0.25);
    /// assert_eq!(index, 11);
    /// assert_eq!(bank.eval(index, 0, 44100.0, 440.0, 0.0).unwrap(), 0.25);
    /// ```
    pub fn register(
        &mut self,
        f: impl Fn(usize, f64, f64, f64) -> f64 + Send + Sync + 'static,
    ) -> usize {
        self.entries.push(Box::new(f));
        self.entries.len() - 1
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a bank is never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f64 = 44100.0;

    #[test]
    fn test_builtin_count() {
        let bank = ModulationBank::with_builtins();
        assert_eq!(bank.len(), 11);
        assert!(!bank.is_empty());
    }

    #[test]
    fn test_carrier_matches_closed_form() {
        let bank = ModulationBank::with_builtins();
        for i in [0, 1, 100, 5000] {
            let expected = (2.0 * PI * (i as f64 / RATE) * 440.0 + 0.5).sin();
            assert_eq!(bank.eval(0, i, RATE, 440.0, 0.5).unwrap(), expected);
        }
    }

    #[test]
    fn test_amplitude_tiers() {
        let bank = ModulationBank::with_builtins();
        // Entries 6-10 are the half-amplitude copies of entries 1-5.
        for offset in 0..5 {
            for i in [3, 77, 991] {
                let full = bank.eval(1 + offset, i, RATE, 220.0, 0.1).unwrap();
                let half = bank.eval(6 + offset, i, RATE, 220.0, 0.1).unwrap();
                assert!((half - 0.5 * full).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_outputs_bounded() {
        let bank = ModulationBank::with_builtins();
        for index in 0..bank.len() {
            for i in 0..500 {
                let v = bank.eval(index, i, RATE, 440.0, 0.0).unwrap();
                assert!((-1.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_register_appends() {
        let mut bank = ModulationBank::with_builtins();
        let index = bank.register(|i, _, _, _| i as f64);
        assert_eq!(index, 11);
        assert_eq!(bank.eval(index, 7, RATE, 440.0, 0.0).unwrap(), 7.0);
        assert_eq!(bank.len(), 12);
    }

    #[test]
    fn test_out_of_range_index() {
        let bank = ModulationBank::with_builtins();
        assert!(matches!(
            bank.eval(11, 0, RATE, 440.0, 0.0),
            Err(Error::InvalidModulation(11))
        ));
    }
}
