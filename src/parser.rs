//! Chord name parsing
//!
//! Splits a chord name such as `Bbm7` into a root spelling and a quality symbol and
//! looks both up in the static tables.
//!
//! Parsing is forgiving at the batch level: a token that cannot be
//! parsed yields `None` and the caller drops it, so one typo does not reject a whole
//! progression.

use serde::Serialize;
use tracing::debug;

use crate::chords::ChordQuality;
use crate::notes::NoteName;
use crate::voicing::{apply_voicing, Voicing};

/// Quality used when a chord name is a bare root (`"C"`).
pub const DEFAULT_QUALITY: &str = "maj";

/// Half-diminished symbol. `ø7` is a table key; any other `ø` is rewritten to [`HALF_DIMINISHED_ALIAS`].
pub const HALF_DIMINISHED: &str = "ø";
pub const HALF_DIMINISHED_ALIAS: &str = "m7b5";

/// A chord name resolved against the note and chord tables.
///
/// # Fields
/// - `chord_name`: the token as typed
/// - `root`: root spelling
/// - `quality`: chord table key the token resolved to
/// - `intervals`: semitones from the root; raw table offsets, or voiced offsets after [`ParsedChord::voiced`]
/// - `interval_hex`: `intervals` reduced modulo 12 as 2-digit hex
/// - `root_baked`: `intervals` shifted by the root and reduced modulo 12 as 2-digit hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedChord {
    pub chord_name: String,
    pub root: NoteName,
    #[serde(rename = "type")]
    pub quality: &'static str,
    #[serde(rename = "intervalOnly")]
    pub intervals: Vec<i32>,
    #[serde(rename = "intervalOnlyHex")]
    pub interval_hex: Vec<String>,
    pub root_baked: Vec<String>,
}

impl ParsedChord {
    fn new(chord_name: &str, root: NoteName, quality: &'static str, intervals: Vec<i32>) -> Self {
        let interval_hex = intervals.iter().map(|&i| semitone_to_hex(i)).collect();
        let root_baked = intervals
            .iter()
            .map(|&i| semitone_to_hex(i.rem_euclid(12) + root.semitone()))
            .collect();
        ParsedChord {
            chord_name: chord_name.to_string(),
            root,
            quality,
            intervals,
            interval_hex,
            root_baked,
        }
    }

    /// A new chord with `voicing` applied and both hex displays recomputed.
    pub fn voiced(&self, voicing: Voicing) -> ParsedChord {
        let intervals = apply_voicing(&self.intervals, voicing);
        ParsedChord::new(&self.chord_name, self.root, self.quality, intervals)
    }

    /// Absolute MIDI notes with the root in the C4 octave.
    pub fn midi_notes(&self) -> Vec<i32> {
        let root = self.root.midi_root();
        self.intervals.iter().map(|&i| root.saturating_add(i)).collect()
    }
}

/// Convert a semitone to a 2-digit uppercase hex string after reducing it into one octave.
///
/// Negative input is normalized, so `-1` is `"0B"`.
///
/// # Examples
/// ```
/// use hypersyn::semitone_to_hex;
///
/// assert_eq!(semitone_to_hex(0), "00");
/// assert_eq!(semitone_to_hex(11), "0B");
/// assert_eq!(semitone_to_hex(14), "02");
/// assert_eq!(semitone_to_hex(-1), "0B");
/// ```
pub fn semitone_to_hex(semitone: i32) -> String {
    format!("{:02X}", semitone.rem_euclid(12))
}

/// Split chord input on whitespace and commas, dropping empty tokens.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect()
}

/// Length in bytes of the `[A-G][b#]?` prefix, or `None` if the name doesn't start with one.
fn root_prefix_len(chord_name: &str) -> Option<usize> {
    let mut chars = chord_name.chars();
    match chars.next() {
        Some('A'..='G') => {}
        _ => return None,
    }
    match chars.next() {
        Some('b') | Some('#') => Some(2),
        _ => Some(1),
    }
}

/// Parse a chord name into its root, quality and intervals.
///
/// Returns `None` when the name has no `[A-G][b#]?` root prefix, when the prefix is
/// not one of the 17 spellings (`Cb`, `E#`, ...), or when the quality is unknown.
///
/// # Examples
/// ```
/// use hypersyn::parse_chord_name;
///
/// let chord = parse_chord_name("Cmaj7").unwrap();
/// assert_eq!(chord.root.spelling(), "C");
/// assert_eq!(chord.quality, "maj7");
/// assert_eq!(chord.intervals, vec![0, 4, 7, 11]);
/// assert_eq!(chord.root_baked, vec!["00", "04", "07", "0B"]);
///
/// assert!(parse_chord_name("Zz").is_none());
/// ```
pub fn parse_chord_name(chord_name: &str) -> Option<ParsedChord> {
    let root_len = root_prefix_len(chord_name)?;
    let (root_spelling, rest) = chord_name.split_at(root_len);

    let symbol = if rest.is_empty() {
        DEFAULT_QUALITY.to_string()
    } else if rest == "ø7" {
        rest.to_string()
    } else {
        rest.replacen(HALF_DIMINISHED, HALF_DIMINISHED_ALIAS, 1)
    };

    let Some(quality) = ChordQuality::lookup(&symbol) else {
        debug!("Unknown chord quality '{}' in '{}'", symbol, chord_name);
        return None;
    };
    let Some(root) = NoteName::from_spelling(root_spelling) else {
        debug!("Root '{}' in '{}' is not a recognized spelling", root_spelling, chord_name);
        return None;
    };

    Some(ParsedChord::new(
        chord_name,
        root,
        quality.symbol,
        quality.intervals.to_vec(),
    ))
}

/// Parse every token of `input`, silently dropping the ones that don't parse.
pub fn parse_progression(input: &str) -> Vec<ParsedChord> {
    tokenize(input)
        .into_iter()
        .filter_map(parse_chord_name)
        .collect()
}
