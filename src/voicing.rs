//! # Voicing Transformer
//!
//! Rearranges a chord's intervals across octaves. Every voicing works on the raw
//! semitone offsets (not hex), returns a new `Vec`, and may produce values below 0
//! or above 11. Only the hex display reduces them back into one octave.
//!
//! ## Voicings
//! | id | needs | result |
//! |---|---|---|
//! | `closed` | - | unchanged, original order |
//! | `open-triad` | 3 notes | `[low, high, middle + 12]` |
//! | `drop2` | 2+ notes | second-from-top down an octave |
//! | `drop3` | 3+ notes | third-from-top down an octave |
//! | `spread` | 2+ notes | every odd index up an octave |
//! | `octave` | 2+ notes | doubled root (and index 2) appended an octave up |
//! | `first-inversion` | 2+ notes | lowest note up an octave |
//! | `second-inversion` | 3+ notes | lowest two notes up an octave |
//! | `third-inversion` | 4+ notes | lowest three notes up an octave |
//! | `shell-dominant` | 4 and 10 present | root, 3rd, b7 only |
//! | `altered-dominant` | 4 and 10 present | shell plus b9, #9, #11, b13 |
//!
//! When a precondition is not met the sorted intervals are returned, except for the
//! two dominant voicings which return the input untouched.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::HypersynError;

/// Octave in semitones.
const OCTAVE: i32 = 12;

/// b9, #9, #11, b13
const ALTERED_EXTENSIONS: [i32; 4] = [1, 5, 6, 8];

/// Root, major 3rd, minor 7th
const SHELL_TONES: [i32; 3] = [0, 4, 10];

/// One of the eleven voicing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Voicing {
    #[default]
    Closed,
    OpenTriad,
    Drop2,
    Drop3,
    Spread,
    Octave,
    FirstInversion,
    SecondInversion,
    ThirdInversion,
    ShellDominant,
    AlteredDominant,
}

type Transform = fn(&[i32]) -> Vec<i32>;

/// Dispatch table, in display order.
static VOICINGS: [(Voicing, &str, &str, Transform); 11] = [
    (Voicing::Closed, "closed", "Closed Voicing", closed),
    (Voicing::OpenTriad, "open-triad", "Open Triad", open_triad),
    (Voicing::Drop2, "drop2", "Drop-2", drop2),
    (Voicing::Drop3, "drop3", "Drop-3", drop3),
    (Voicing::Spread, "spread", "Spread", spread),
    (Voicing::Octave, "octave", "Octave Doubling", octave),
    (Voicing::FirstInversion, "first-inversion", "First Inversion", first_inversion),
    (Voicing::SecondInversion, "second-inversion", "Second Inversion", second_inversion),
    (Voicing::ThirdInversion, "third-inversion", "Third Inversion", third_inversion),
    (Voicing::ShellDominant, "shell-dominant", "Shell Dominant", shell_dominant),
    (Voicing::AlteredDominant, "altered-dominant", "Altered Dominant", altered_dominant),
];

impl Voicing {
    pub const ALL: [Voicing; 11] = [
        Voicing::Closed,
        Voicing::OpenTriad,
        Voicing::Drop2,
        Voicing::Drop3,
        Voicing::Spread,
        Voicing::Octave,
        Voicing::FirstInversion,
        Voicing::SecondInversion,
        Voicing::ThirdInversion,
        Voicing::ShellDominant,
        Voicing::AlteredDominant,
    ];

    fn entry(self) -> &'static (Voicing, &'static str, &'static str, Transform) {
        // Table order matches declaration order
        &VOICINGS[self as usize]
    }

    /// Kebab-case identifier, e.g. `"drop2"` or `"first-inversion"`.
    pub fn id(self) -> &'static str {
        self.entry().1
    }

    /// Human-readable label for selectors.
    pub fn label(self) -> &'static str {
        self.entry().2
    }

    /// Lenient lookup used by interactive callers: unknown identifiers mean closed voicing.
    pub fn from_id(id: &str) -> Voicing {
        id.parse().unwrap_or_else(|_| {
            debug!("Unknown voicing '{}', falling back to closed", id);
            Voicing::Closed
        })
    }

    /// Whether this voicing's precondition holds for `intervals`.
    pub fn is_valid_for(self, intervals: &[i32]) -> bool {
        let n = intervals.len();
        match self {
            Voicing::Closed => true,
            Voicing::OpenTriad => n == 3,
            Voicing::Drop2
            | Voicing::Spread
            | Voicing::Octave
            | Voicing::FirstInversion => n >= 2,
            Voicing::Drop3 | Voicing::SecondInversion => n >= 3,
            Voicing::ThirdInversion => n >= 4,
            Voicing::ShellDominant | Voicing::AlteredDominant => is_dominant(intervals),
        }
    }
}

impl FromStr for Voicing {
    type Err = HypersynError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VOICINGS
            .iter()
            .find(|(_, id, _, _)| *id == s)
            .map(|(voicing, _, _, _)| *voicing)
            .ok_or_else(|| HypersynError::UnknownVoicing(s.to_string()))
    }
}

impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Voicing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// A selectable voicing for a chord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoicingOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Dominant in the interval sense: contains a major 3rd (4) and a minor 7th (10).
pub fn is_dominant(intervals: &[i32]) -> bool {
    intervals.contains(&4) && intervals.contains(&10)
}

/// Apply `voicing` to `intervals`, returning a new interval list.
///
/// # Examples
/// ```
/// use hypersyn::{apply_voicing, Voicing};
///
/// assert_eq!(apply_voicing(&[0, 4, 7], Voicing::OpenTriad), vec![0, 7, 16]);
/// assert_eq!(apply_voicing(&[0, 4, 7, 10], Voicing::ShellDominant), vec![0, 4, 10]);
/// assert_eq!(apply_voicing(&[0, 3, 7], Voicing::ShellDominant), vec![0, 3, 7]);
/// ```
pub fn apply_voicing(intervals: &[i32], voicing: Voicing) -> Vec<i32> {
    (voicing.entry().3)(intervals)
}

/// The voicings whose preconditions `intervals` satisfies, in display order.
///
/// Closed voicing is always offered, so the result is never empty.
pub fn valid_voicings(intervals: &[i32]) -> Vec<VoicingOption> {
    Voicing::ALL
        .iter()
        .filter(|v| v.is_valid_for(intervals))
        .map(|v| VoicingOption {
            value: v.id(),
            label: v.label(),
        })
        .collect()
}

fn sorted(intervals: &[i32]) -> Vec<i32> {
    let mut notes = intervals.to_vec();
    notes.sort_unstable();
    notes
}

fn closed(intervals: &[i32]) -> Vec<i32> {
    intervals.to_vec()
}

fn open_triad(intervals: &[i32]) -> Vec<i32> {
    let notes = sorted(intervals);
    if notes.len() != 3 {
        return notes;
    }
    let mut open = vec![notes[0], notes[2], notes[1].saturating_add(OCTAVE)];
    open.sort_unstable();
    open
}

/// Lower the note `from_top` positions below the highest by an octave.
fn drop_from_top(intervals: &[i32], from_top: usize) -> Vec<i32> {
    let mut notes = sorted(intervals);
    if notes.len() < from_top {
        return notes;
    }
    let idx = notes.len() - from_top;
    notes[idx] = notes[idx].saturating_sub(OCTAVE);
    notes.sort_unstable();
    notes
}

fn drop2(intervals: &[i32]) -> Vec<i32> {
    drop_from_top(intervals, 2)
}

fn drop3(intervals: &[i32]) -> Vec<i32> {
    drop_from_top(intervals, 3)
}

fn spread(intervals: &[i32]) -> Vec<i32> {
    sorted(intervals)
        .into_iter()
        .enumerate()
        .map(|(i, note)| if i % 2 == 1 { note.saturating_add(OCTAVE) } else { note })
        .collect()
}

fn octave(intervals: &[i32]) -> Vec<i32> {
    let mut notes = sorted(intervals);
    if notes.len() < 2 {
        return notes;
    }
    let original_len = notes.len();
    notes.push(notes[0].saturating_add(OCTAVE));
    if original_len >= 3 {
        notes.push(notes[2].saturating_add(OCTAVE));
    }
    notes
}

/// Move the lowest `count` notes up an octave.
fn invert(intervals: &[i32], count: usize) -> Vec<i32> {
    let notes = sorted(intervals);
    if notes.len() <= count {
        return notes;
    }
    let (lowest, rest) = notes.split_at(count);
    let mut inverted: Vec<i32> = rest
        .iter()
        .copied()
        .chain(lowest.iter().map(|note| note.saturating_add(OCTAVE)))
        .collect();
    inverted.sort_unstable();
    inverted
}

fn first_inversion(intervals: &[i32]) -> Vec<i32> {
    invert(intervals, 1)
}

fn second_inversion(intervals: &[i32]) -> Vec<i32> {
    invert(intervals, 2)
}

fn third_inversion(intervals: &[i32]) -> Vec<i32> {
    invert(intervals, 3)
}

fn shell_tones(intervals: &[i32]) -> Vec<i32> {
    sorted(intervals)
        .into_iter()
        .filter(|note| SHELL_TONES.contains(note))
        .collect()
}

fn shell_dominant(intervals: &[i32]) -> Vec<i32> {
    if !is_dominant(intervals) {
        return intervals.to_vec();
    }
    shell_tones(intervals)
}

fn altered_dominant(intervals: &[i32]) -> Vec<i32> {
    if !is_dominant(intervals) {
        return intervals.to_vec();
    }
    let mut altered = shell_tones(intervals);
    altered.extend_from_slice(&ALTERED_EXTENSIONS);
    altered.sort_unstable();
    altered
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIAD: [i32; 3] = [0, 4, 7];
    const DOM7: [i32; 4] = [0, 4, 7, 10];

    #[test]
    fn test_table_order_matches_enum() {
        for (i, voicing) in Voicing::ALL.iter().enumerate() {
            assert_eq!(VOICINGS[i].0, *voicing);
        }
    }

    #[test]
    fn test_closed_is_identity() {
        let unsorted = [7, 0, 4];
        assert_eq!(apply_voicing(&unsorted, Voicing::Closed), vec![7, 0, 4]);
        let twice = apply_voicing(&apply_voicing(&DOM7, Voicing::Closed), Voicing::Closed);
        assert_eq!(twice, DOM7.to_vec());
    }

    #[test]
    fn test_open_triad() {
        assert_eq!(apply_voicing(&TRIAD, Voicing::OpenTriad), vec![0, 7, 16]);
        // Not a triad: sorted copy
        assert_eq!(apply_voicing(&[10, 0, 4, 7], Voicing::OpenTriad), vec![0, 4, 7, 10]);
    }

    #[test]
    fn test_drop2() {
        assert_eq!(apply_voicing(&DOM7, Voicing::Drop2), vec![-5, 0, 4, 10]);
        assert_eq!(apply_voicing(&TRIAD, Voicing::Drop2), vec![-8, 0, 7]);
        assert_eq!(apply_voicing(&[0], Voicing::Drop2), vec![0]);
    }

    #[test]
    fn test_drop3() {
        assert_eq!(apply_voicing(&DOM7, Voicing::Drop3), vec![-8, 0, 7, 10]);
        assert_eq!(apply_voicing(&[0, 7], Voicing::Drop3), vec![0, 7]);
    }

    #[test]
    fn test_spread() {
        assert_eq!(apply_voicing(&DOM7, Voicing::Spread), vec![0, 16, 7, 22]);
        assert_eq!(apply_voicing(&[0], Voicing::Spread), vec![0]);
    }

    #[test]
    fn test_octave() {
        assert_eq!(apply_voicing(&TRIAD, Voicing::Octave), vec![0, 4, 7, 12, 19]);
        assert_eq!(apply_voicing(&[0, 7], Voicing::Octave), vec![0, 7, 12]);
        assert_eq!(apply_voicing(&[0], Voicing::Octave), vec![0]);
    }

    #[test]
    fn test_inversions() {
        assert_eq!(apply_voicing(&TRIAD, Voicing::FirstInversion), vec![4, 7, 12]);
        assert_eq!(apply_voicing(&TRIAD, Voicing::SecondInversion), vec![7, 12, 16]);
        assert_eq!(apply_voicing(&DOM7, Voicing::ThirdInversion), vec![10, 12, 16, 19]);
        // Too few notes: sorted copy
        assert_eq!(apply_voicing(&TRIAD, Voicing::ThirdInversion), vec![0, 4, 7]);
        assert_eq!(apply_voicing(&[0], Voicing::FirstInversion), vec![0]);
    }

    #[test]
    fn test_shell_dominant() {
        assert_eq!(apply_voicing(&DOM7, Voicing::ShellDominant), vec![0, 4, 10]);
        assert_eq!(apply_voicing(&[0, 3, 7], Voicing::ShellDominant), vec![0, 3, 7]);
        // 13th chord keeps only the shell
        assert_eq!(
            apply_voicing(&[0, 4, 7, 10, 14, 21], Voicing::ShellDominant),
            vec![0, 4, 10]
        );
    }

    #[test]
    fn test_altered_dominant() {
        assert_eq!(
            apply_voicing(&DOM7, Voicing::AlteredDominant),
            vec![0, 1, 4, 5, 6, 8, 10]
        );
        assert_eq!(apply_voicing(&[0, 4, 7, 11], Voicing::AlteredDominant), vec![0, 4, 7, 11]);
    }

    #[test]
    fn test_dominant_detection_ignores_name() {
        // 7#5 and 9b5 are dominant by interval
        assert!(is_dominant(&[0, 4, 8, 10]));
        assert!(is_dominant(&[0, 4, 6, 10, 14]));
        assert!(!is_dominant(&[0, 3, 7, 10]));
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Voicing::from_id("drop2"), Voicing::Drop2);
        assert_eq!(Voicing::from_id("third-inversion"), Voicing::ThirdInversion);
        assert_eq!(Voicing::from_id("nonsense"), Voicing::Closed);
        assert!("nonsense".parse::<Voicing>().is_err());
    }

    #[test]
    fn test_ids_round_trip() {
        for voicing in Voicing::ALL {
            assert_eq!(voicing.id().parse::<Voicing>().unwrap(), voicing);
        }
    }

    #[test]
    fn test_valid_voicings_for_triad() {
        let values: Vec<_> = valid_voicings(&TRIAD).into_iter().map(|o| o.value).collect();
        assert_eq!(
            values,
            vec![
                "closed",
                "open-triad",
                "drop2",
                "drop3",
                "spread",
                "octave",
                "first-inversion",
                "second-inversion"
            ]
        );
    }

    #[test]
    fn test_valid_voicings_for_dominant_seventh() {
        let values: Vec<_> = valid_voicings(&DOM7).into_iter().map(|o| o.value).collect();
        assert!(!values.contains(&"open-triad"));
        assert!(values.contains(&"third-inversion"));
        assert!(values.contains(&"shell-dominant"));
        assert!(values.contains(&"altered-dominant"));
    }

    #[test]
    fn test_extreme_intervals_saturate() {
        for voicing in Voicing::ALL {
            let high = apply_voicing(&[0, i32::MAX], voicing);
            assert!(!high.is_empty(), "{}", voicing);
            let low = apply_voicing(&[i32::MIN, 0], voicing);
            assert!(!low.is_empty(), "{}", voicing);
        }
        assert_eq!(apply_voicing(&[0, i32::MAX], Voicing::Spread), vec![0, i32::MAX]);
        assert_eq!(apply_voicing(&[i32::MIN, 0], Voicing::Drop2), vec![i32::MIN, 0]);
        assert_eq!(apply_voicing(&[i32::MAX, 0], Voicing::FirstInversion), vec![12, i32::MAX]);
        assert_eq!(
            apply_voicing(&[0, 4, i32::MAX], Voicing::Octave),
            vec![0, 4, i32::MAX, 12, i32::MAX]
        );
    }

    #[test]
    fn test_valid_voicings_for_empty() {
        let options = valid_voicings(&[]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "closed");
        assert_eq!(options[0].label, "Closed Voicing");
    }
}
