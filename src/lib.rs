pub mod api;
pub mod chords;
pub mod config;
pub mod display;
pub mod error;
pub mod grouping;
pub mod keyboard;
pub mod notes;
pub mod parser;
pub mod playback;
pub mod storage;
pub mod voicing;

pub use api::{convert_chords, convert_chords_with_id, ConversionResult};
pub use chords::{chord_intervals, ChordQuality, CHORD_QUALITIES};
pub use error::*;
pub use grouping::{group_by_shape, ChordGroup};
pub use notes::NoteName;
pub use parser::{parse_chord_name, parse_progression, semitone_to_hex, tokenize, ParsedChord};
pub use voicing::{apply_voicing, is_dominant, valid_voicings, Voicing, VoicingOption};

/// Convert a progression and render it as a text report.
/// This is the main entry point for command-line style use.
pub fn describe(input: &str, voicing: Voicing) -> String {
    display::format_report(&convert_chords(input, voicing), display::ReportOptions::default())
}
