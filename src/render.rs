//! Envelope shaping and PCM sample rendering.
//!
//! Drives a sound profile across a time range: a linear attack ramp followed
//! by a `base^dampen` decay curve, quantized to signed 16-bit samples.

use crate::modulation::ModulationBank;
use crate::profiles::SoundProfile;

/// Renders one tone to a PCM sample buffer.
///
/// A fresh waveform state is allocated for this call only, so concurrent
/// renders of the same profile never share scratch state.
///
/// The buffer length is always `ceil(sample_rate * duration)`; indices past
/// the written range stay zero. If `duration <= attack` the decay loop never
/// runs and the result is a fade-in-only buffer, which is valid.
///
/// # Arguments
///
/// * `profile` - The synthesis strategy to drive
/// * `bank` - Modulation functions available to the profile's waveform
/// * `frequency` - Tone frequency in Hz
/// * `duration` - Tone length in seconds
/// * `sample_rate` - Output sample rate in Hz
/// * `volume` - Peak amplitude, `0..=32768`
pub fn render(
    profile: &dyn SoundProfile,
    bank: &ModulationBank,
    frequency: f64,
    duration: f64,
    sample_rate: u32,
    volume: u16,
) -> Vec<i16> {
    let sample_rate = f64::from(sample_rate);
    let volume = f64::from(volume);

    let attack = profile.attack(sample_rate, frequency, volume);
    let dampen = profile.dampen(sample_rate, frequency, volume);
    let mut wave = profile.wave_state();

    let total_len = (sample_rate * duration).floor() as usize;
    let attack_len = ((sample_rate * attack).floor() as usize).min(total_len);
    let mut samples = vec![0i16; (sample_rate * duration).ceil() as usize];

    for (i, out) in samples.iter_mut().enumerate().take(attack_len) {
        let gain = volume * (i as f64 / (sample_rate * attack));
        *out = quantize(gain * wave.sample(i, sample_rate, frequency, bank));
    }
    for (i, out) in samples
        .iter_mut()
        .enumerate()
        .take(total_len)
        .skip(attack_len)
    {
        let base = 1.0 - (i as f64 - sample_rate * attack) / (sample_rate * (duration - attack));
        let gain = volume * base.powf(dampen);
        *out = quantize(gain * wave.sample(i, sample_rate, frequency, bank));
    }

    samples
}

/// Truncates an amplitude toward zero and wraps it into i16 range.
///
/// Overflow wraps two's-complement instead of saturating, reproducing the
/// reference quantizer bit-for-bit; at extreme volume and dampening this is
/// audible as wrap distortion.
fn quantize(value: f64) -> i16 {
    (value as i64) as i16
}
