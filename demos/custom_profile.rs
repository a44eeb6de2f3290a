//! Registers a custom profile and a custom modulation function, then writes
//! the resulting tone to bell_c5.wav.
//!
//! Run with: `cargo run --example custom_profile`

use anyhow::Result;
use tonegen::{ModulationBank, SoundProfile, Synth, WaveState};

/// A bell-like profile: fast attack, slow frequency-independent decay, and a
/// waveform built from the stock carrier plus a custom ring modulator.
struct Bell {
    ring_index: usize,
}

struct BellWave {
    ring_index: usize,
}

impl SoundProfile for Bell {
    fn name(&self) -> &str {
        "bell"
    }

    fn attack(&self, _sample_rate: f64, _frequency: f64, _volume: f64) -> f64 {
        0.005
    }

    fn dampen(&self, _sample_rate: f64, _frequency: f64, _volume: f64) -> f64 {
        3.0
    }

    fn wave_state(&self) -> Box<dyn WaveState> {
        Box::new(BellWave {
            ring_index: self.ring_index,
        })
    }
}

impl WaveState for BellWave {
    fn sample(&mut self, i: usize, sample_rate: f64, frequency: f64, bank: &ModulationBank) -> f64 {
        let carrier = bank.eval(0, i, sample_rate, frequency, 0.0).unwrap_or(0.0);
        let ring = bank
            .eval(self.ring_index, i, sample_rate, frequency, 0.0)
            .unwrap_or(0.0);
        0.7 * carrier + 0.3 * carrier * ring
    }
}

fn main() -> Result<()> {
    let mut synth = Synth::new();

    // An inharmonic partial at 2.76x the fundamental, typical of struck metal.
    let ring_index = synth.register_modulation(|i, sample_rate, frequency, x| {
        (2.76 * std::f64::consts::TAU * (i as f64 / sample_rate) * frequency + x).sin()
    });
    synth.register_profile(Box::new(Bell { ring_index }))?;

    let wav = synth.generate("bell", "C", 5, 2.0)?;
    std::fs::write("bell_c5.wav", &wav)?;
    println!("wrote bell_c5.wav ({} bytes)", wav.len());
    println!(
        "profiles: {}",
        synth.profiles().collect::<Vec<_>>().join(", ")
    );

    Ok(())
}
