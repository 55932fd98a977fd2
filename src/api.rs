//! # Public API
//!
//! Batch entry point used by the CLI and the browser bindings.
//!
//! ## Pipeline
//! 1. Tokenize input on whitespace and commas
//! 2. Parse each token, dropping the ones that fail
//! 3. Apply the voicing to every chord
//! 4. Group chords by voiced interval shape
//!
//! ## Typical Usage
//!
//! ```rust
//! use hypersyn::{convert_chords, Voicing};
//!
//! let result = convert_chords("Cmaj7 Dm7 G7 Fmaj7", Voicing::Closed);
//!
//! assert_eq!(result.input_chord_names, vec!["Cmaj7", "Dm7", "G7", "Fmaj7"]);
//! assert_eq!(result.unique_groups.len(), 3);
//! assert_eq!(result.unique_groups[0].chords, vec!["Cmaj7", "Fmaj7"]);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::grouping::{group_by_shape, ChordGroup};
use crate::parser::{parse_chord_name, tokenize, ParsedChord};
use crate::voicing::Voicing;

/// Result of converting a chord progression.
///
/// # Fields
/// - `input_chord_names`: names of the chords that parsed, in input order
/// - `unique_groups`: chords grouped by voiced interval shape
/// - `voicing`: the voicing that was applied
/// - `chords`: every parsed chord with the voicing applied
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub input_chord_names: Vec<String>,
    pub unique_groups: Vec<ChordGroup>,
    pub voicing: Voicing,
    pub chords: Vec<ParsedChord>,
}

impl ConversionResult {
    /// True when no token in the input parsed as a chord.
    pub fn is_empty(&self) -> bool {
        self.input_chord_names.is_empty()
    }

    /// Two-digit group number (`"00"`, `"01"`, ...) for a chord name, if it is in a group.
    pub fn group_number(&self, chord_name: &str) -> Option<String> {
        self.unique_groups
            .iter()
            .find(|group| group.chords.iter().any(|name| name == chord_name))
            .map(|group| format!("{:02}", group.index))
    }
}

/// Parse, voice and group a chord progression.
///
/// Never fails: when no token parses, `input_chord_names` and `unique_groups` are empty.
pub fn convert_chords(input: &str, voicing: Voicing) -> ConversionResult {
    let chords: Vec<ParsedChord> = tokenize(input)
        .into_iter()
        .filter_map(|token| {
            let parsed = parse_chord_name(token);
            if parsed.is_none() {
                debug!("Skipping unparseable token '{}'", token);
            }
            parsed
        })
        .map(|chord| chord.voiced(voicing))
        .collect();

    let unique_groups = group_by_shape(&chords);

    ConversionResult {
        input_chord_names: chords.iter().map(|c| c.chord_name.clone()).collect(),
        unique_groups,
        voicing,
        chords,
    }
}

/// Same as [`convert_chords`] with a voicing identifier; unknown identifiers mean closed voicing.
pub fn convert_chords_with_id(input: &str, voicing_id: &str) -> ConversionResult {
    convert_chords(input, Voicing::from_id(voicing_id))
}
