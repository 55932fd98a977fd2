//! # Playback Module
//!
//! Plan and render chord progressions as sustained synthesizer pads.
//!
//! ## Purpose
//! This module converts parsed chords into playback data that can be used for:
//! 1. **Audio playback** - MIDI notes, frequencies and timing for a synthesizer
//! 2. **Offline previews** - a rendered WAV file of the progression
//!
//! ## Sub-modules
//! - `types` - PlaybackData, PlaybackChord, PlaybackOptions type definitions
//! - `engine` - Progression planning (voicing, MIDI notes, timing)
//! - `render` - Triangle pad renderer and WAV writer
//!
//! ## Entry Points
//! - [`generate_playback_data()`] - Plan a whole progression
//! - [`plan_single_chord()`] - Plan one chord, e.g. when a chord card is clicked
//! - [`render_to_wav()`] - Render a plan to disk
//!
//! ## Example
//! ```rust
//! use hypersyn::playback::{generate_playback_data, PlaybackOptions};
//! use hypersyn::Voicing;
//!
//! let data = generate_playback_data("C G", Voicing::Closed, &PlaybackOptions::default());
//!
//! assert_eq!(data.chords.len(), 2);
//! assert_eq!(data.chords[0].midi_notes, vec![48, 52, 55]); // C3 E3 G3
//! ```
//!
//! ## Pitch
//!
//! Pads sound an octave below the display octave: the root of every chord is
//! placed in the C3 octave (C3 = 48) and voiced intervals are added to it, so a
//! drop voicing can go below C3 and an open or spread voicing above C4.
//!
//! ## Timing
//!
//! Chords are back to back with a fixed duration (2.5 s by default). Each note
//! fades in over the attack and out over the release within its chord.

mod engine;
mod render;
mod types;


pub use engine::{generate_playback_data, midi_to_frequency, plan_single_chord};
pub use render::{render_samples, render_to_wav, write_wav};
pub use types::{
    PlaybackChord, PlaybackData, PlaybackOptions, MAX_CHORD_DURATION, MAX_SAMPLE_RATE,
};
