//! Offline pad renderer
//!
//! Each note is a slightly detuned triangle oscillator through a one-pole low-pass
//! and a linear attack/hold/release envelope. The mix is scaled so its peak equals
//! the configured volume, then written as mono 32-bit float WAV.

use std::f64::consts::PI;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use super::types::PlaybackData;
use crate::error::HypersynError;

/// Naive triangle in `-1.0..=1.0` for a phase in `0.0..1.0`.
fn triangle(phase: f64) -> f64 {
    4.0 * (phase - 0.5).abs() - 1.0
}

/// Linear fade in over `attack`, fade out over the last `release` seconds of `duration`.
fn envelope(t: f64, duration: f64, attack: f64, release: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    let attack = attack.clamp(0.0, duration);
    let release = release.clamp(0.0, duration - attack);
    let release_start = duration - release;
    if t < 0.0 || t >= duration {
        0.0
    } else if t < attack {
        t / attack
    } else if t >= release_start && release > 0.0 {
        (duration - t) / release
    } else {
        1.0
    }
}

/// Render a playback plan to mono samples, using the options the plan was made with.
pub fn render_samples(data: &PlaybackData) -> Result<Vec<f32>, HypersynError> {
    let options = &data.options;
    options.validate()?;
    let sample_rate = f64::from(options.sample_rate);
    let total = (data.total_duration * sample_rate).ceil() as usize;
    let mut mix = vec![0.0f64; total];
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let alpha = 1.0 - (-2.0 * PI * options.cutoff / sample_rate).exp();

    for chord in &data.chords {
        let start = (chord.start_time * sample_rate).round() as usize;
        let length = (chord.duration * sample_rate).round() as usize;

        for &frequency in &chord.frequencies {
            let detune = if options.detune_cents > 0.0 {
                rng.gen_range(-options.detune_cents..options.detune_cents)
            } else {
                0.0
            };
            let step = frequency * 2f64.powf(detune / 1200.0) / sample_rate;
            let mut phase = 0.0;
            let mut filtered = 0.0;

            for n in 0..length {
                let Some(slot) = mix.get_mut(start + n) else {
                    break;
                };
                filtered += alpha * (triangle(phase) - filtered);
                let t = n as f64 / sample_rate;
                *slot += filtered * envelope(t, chord.duration, options.attack, options.release);
                phase = (phase + step).fract();
            }
        }
    }

    let peak = mix.iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
    let gain = if peak > 0.0 { options.volume / peak } else { 0.0 };
    Ok(mix.into_iter().map(|s| (s * gain) as f32).collect())
}

/// Write mono samples to a 32-bit float WAV file.
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), HypersynError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Render a playback plan straight to a WAV file.
pub fn render_to_wav(data: &PlaybackData, path: &Path) -> Result<(), HypersynError> {
    let samples = render_samples(data)?;
    write_wav(path, &samples, data.options.sample_rate)?;
    info!(
        "Rendered {} chords ({:.1}s) to {}",
        data.chords.len(),
        data.total_duration,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_shape() {
        assert_eq!(triangle(0.0), 1.0);
        assert_eq!(triangle(0.5), -1.0);
        assert_eq!(triangle(0.25), 0.0);
    }

    #[test]
    fn test_envelope_segments() {
        assert_eq!(envelope(0.0, 2.5, 1.0, 1.2), 0.0);
        assert_eq!(envelope(0.5, 2.5, 1.0, 1.2), 0.5);
        assert_eq!(envelope(1.2, 2.5, 1.0, 1.2), 1.0);
        assert!((envelope(1.9, 2.5, 1.0, 1.2) - 0.5).abs() < 1e-9);
        assert_eq!(envelope(2.5, 2.5, 1.0, 1.2), 0.0);
    }

    #[test]
    fn test_envelope_clamps_long_attack() {
        // Attack longer than the chord: ramps the whole way, no release
        assert_eq!(envelope(1.0, 2.0, 4.0, 1.0), 0.5);
    }
}
