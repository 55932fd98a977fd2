//! Playback data type definitions
//!
//! This module defines the types used to plan and render chord pads.

use serde::{Deserialize, Serialize};

use crate::error::HypersynError;
use crate::voicing::Voicing;

/// Longest chord a render accepts, in seconds.
pub const MAX_CHORD_DURATION: f64 = 600.0;

/// Highest render sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Pad sound and timing settings
///
/// # Fields
/// - `chord_duration`: seconds each chord sounds
/// - `attack`: seconds to fade in from silence to `volume`
/// - `release`: seconds to fade out at the end of each chord
/// - `volume`: peak level, `0.0..=1.0`
/// - `cutoff`: low-pass cutoff in Hz
/// - `detune_cents`: each oscillator is detuned by a random amount in `±detune_cents`
/// - `sample_rate`: render sample rate in Hz
/// - `seed`: seed for the detune generator, so renders are reproducible
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlaybackOptions {
    pub chord_duration: f64,
    pub attack: f64,
    pub release: f64,
    pub volume: f64,
    pub cutoff: f64,
    pub detune_cents: f64,
    pub sample_rate: u32,
    pub seed: u64,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        PlaybackOptions {
            chord_duration: 2.5,
            attack: 1.0,
            release: 1.2,
            volume: 0.8,
            cutoff: 220.0,
            detune_cents: 5.0,
            sample_rate: 44_100,
            seed: 42,
        }
    }
}

impl PlaybackOptions {
    /// Check that every setting is finite and in range.
    ///
    /// Times, cutoff and detune must be non-negative; the chord duration and sample
    /// rate must be positive and no larger than [`MAX_CHORD_DURATION`] and
    /// [`MAX_SAMPLE_RATE`]; volume must lie in `0.0..=1.0`.
    ///
    /// # Example
    /// ```
    /// use hypersyn::playback::PlaybackOptions;
    ///
    /// assert!(PlaybackOptions::default().validate().is_ok());
    ///
    /// let options = PlaybackOptions { detune_cents: f64::INFINITY, ..PlaybackOptions::default() };
    /// assert!(options.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), HypersynError> {
        if !(self.chord_duration.is_finite()
            && self.chord_duration > 0.0
            && self.chord_duration <= MAX_CHORD_DURATION)
        {
            return Err(HypersynError::Playback(format!(
                "chord-duration must be between 0 and {} seconds, got {}",
                MAX_CHORD_DURATION, self.chord_duration
            )));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(HypersynError::Playback(format!(
                "volume must be between 0 and 1, got {}",
                self.volume
            )));
        }
        for (key, value) in [
            ("attack", self.attack),
            ("release", self.release),
            ("cutoff", self.cutoff),
            ("detune-cents", self.detune_cents),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(HypersynError::Playback(format!(
                    "{} must be a finite non-negative number, got {}",
                    key, value
                )));
            }
        }
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(HypersynError::Playback(format!(
                "sample-rate must be between 1 and {}, got {}",
                MAX_SAMPLE_RATE, self.sample_rate
            )));
        }
        Ok(())
    }
}

/// One chord of a progression, sounded as a block.
///
/// # Fields
/// - `chord_name`: the chord as typed
/// - `midi_notes`: voiced notes with the root in the C3 octave; notes outside MIDI range are dropped
/// - `frequencies`: equal-tempered frequency of each MIDI note (A4 = 440 Hz)
/// - `start_time`: seconds from the start of the progression
/// - `duration`: seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackChord {
    pub chord_name: String,
    pub midi_notes: Vec<u8>,
    pub frequencies: Vec<f64>,
    pub start_time: f64,
    pub duration: f64,
}

/// Playback plan for a whole progression
///
/// # Fields
/// - `voicing`: voicing applied to every chord
/// - `total_duration`: seconds until the last chord ends
/// - `chords`: one entry per parsed chord, in input order
/// - `options`: the pad settings the plan was made with
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackData {
    pub voicing: Voicing,
    pub total_duration: f64,
    pub chords: Vec<PlaybackChord>,
    pub options: PlaybackOptions,
}

impl PlaybackData {
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}
