//! Grouping chords by interval shape
//!
//! Two chords belong to the same group when their interval sequences are identical,
//! element by element and in order. The root is ignored, so `C` and `F` share a
//! group while `C` and `Cm` do not.

use serde::Serialize;
use std::collections::HashMap;

use crate::parser::ParsedChord;

/// Separator used in the printable interval signature (`"0-4-7"`).
pub const SIGNATURE_SEPARATOR: &str = "-";

/// Chords that share one interval shape.
///
/// # Fields
/// - `index`: position of the group in first-seen order
/// - `signature`: the shared intervals joined with `-`
/// - `chords`: member chord names in input order
/// - `interval`: hex display of the shared intervals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordGroup {
    pub index: usize,
    pub signature: String,
    pub chords: Vec<String>,
    pub interval: Vec<String>,
}

/// Printable, order-sensitive key for an interval sequence.
pub fn interval_signature(intervals: &[i32]) -> String {
    intervals
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(SIGNATURE_SEPARATOR)
}

/// Group chords by identical interval sequence, keeping first-seen order.
pub fn group_by_shape(chords: &[ParsedChord]) -> Vec<ChordGroup> {
    let mut groups: Vec<ChordGroup> = Vec::new();
    let mut by_shape: HashMap<&[i32], usize> = HashMap::new();

    for chord in chords {
        let slot = *by_shape.entry(chord.intervals.as_slice()).or_insert_with(|| {
            groups.push(ChordGroup {
                index: groups.len(),
                signature: interval_signature(&chord.intervals),
                chords: Vec::new(),
                interval: chord.interval_hex.clone(),
            });
            groups.len() - 1
        });
        groups[slot].chords.push(chord.chord_name.clone());
    }

    groups
}
