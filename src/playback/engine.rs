//! Playback planning engine
//!
//! Turns a chord progression into timed blocks of MIDI notes and frequencies.
//! Every chord is played for the same duration, back to back.

use tracing::debug;

use super::types::{PlaybackChord, PlaybackData, PlaybackOptions};
use crate::parser::{parse_progression, ParsedChord};
use crate::voicing::{apply_voicing, Voicing};

/// MIDI note of A4.
const A4_MIDI: i32 = 69;
const A4_FREQUENCY: f64 = 440.0;

/// Equal-tempered frequency of a MIDI note.
///
/// # Examples
/// ```
/// use hypersyn::playback::midi_to_frequency;
///
/// assert_eq!(midi_to_frequency(69), 440.0);
/// assert_eq!(midi_to_frequency(57), 220.0);
/// ```
pub fn midi_to_frequency(midi: i32) -> f64 {
    A4_FREQUENCY * 2f64.powf(f64::from(midi - A4_MIDI) / 12.0)
}

/// Plan one chord starting at `start_time`.
///
/// `chord` should carry its table intervals; `voicing` is applied here, the way the
/// chord would sound when picked on its own.
pub fn plan_single_chord(
    chord: &ParsedChord,
    voicing: Voicing,
    start_time: f64,
    options: &PlaybackOptions,
) -> PlaybackChord {
    let root = chord.root.playback_root();
    let midi_notes: Vec<u8> = apply_voicing(&chord.intervals, voicing)
        .into_iter()
        .filter_map(|interval| {
            let note = root
                .checked_add(interval)
                .and_then(|midi| u8::try_from(midi).ok())
                .filter(|m| *m <= 127);
            if note.is_none() {
                debug!(
                    "Dropping out-of-range interval {} in {}",
                    interval, chord.chord_name
                );
            }
            note
        })
        .collect();

    if midi_notes.is_empty() {
        debug!("No playable notes for chord {}", chord.chord_name);
    }

    let frequencies = midi_notes
        .iter()
        .map(|&m| midi_to_frequency(i32::from(m)))
        .collect();

    PlaybackChord {
        chord_name: chord.chord_name.clone(),
        midi_notes,
        frequencies,
        start_time,
        duration: options.chord_duration,
    }
}

/// Generate a playback plan for a chord progression
///
/// Tokens that don't parse are skipped, as in [`crate::convert_chords`]. An input with
/// no valid chords yields an empty plan.
///
/// # Example
/// ```
/// use hypersyn::playback::{generate_playback_data, PlaybackOptions};
/// use hypersyn::Voicing;
///
/// let data = generate_playback_data("Am F", Voicing::Closed, &PlaybackOptions::default());
///
/// assert_eq!(data.chords.len(), 2);
/// assert_eq!(data.chords[0].midi_notes, vec![57, 60, 64]); // A3 C4 E4
/// assert_eq!(data.chords[1].start_time, 2.5);
/// assert_eq!(data.total_duration, 5.0);
/// ```
pub fn generate_playback_data(
    input: &str,
    voicing: Voicing,
    options: &PlaybackOptions,
) -> PlaybackData {
    let chords: Vec<PlaybackChord> = parse_progression(input)
        .iter()
        .enumerate()
        .map(|(i, chord)| {
            let start_time = i as f64 * options.chord_duration;
            plan_single_chord(chord, voicing, start_time, options)
        })
        .collect();

    let total_duration = chords.len() as f64 * options.chord_duration;

    PlaybackData {
        voicing,
        total_duration,
        chords,
        options: *options,
    }
}
