//! Two-octave keyboard view of a voiced chord.
//!
//! Each row shows 13 keys (C to C) starting at MIDI 60 and 72. A key is lit when
//! `midi_root + interval` lands on it; notes voiced outside both rows are not shown.

use serde::Serialize;

use crate::parser::ParsedChord;

/// Key labels for one row, C to C.
pub const KEY_NAMES: [&str; 13] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B", "C",
];

/// First MIDI note of each row.
pub const ROW_STARTS: [i32; 2] = [60, 72];

/// One keyboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardRow {
    pub start_midi: i32,
    pub active: [bool; 13],
}

/// Keyboard view of a set of MIDI notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardView {
    pub rows: Vec<KeyboardRow>,
}

impl KeyboardView {
    pub fn from_midi_notes(notes: &[i32]) -> Self {
        let rows = ROW_STARTS
            .iter()
            .map(|&start| {
                let mut active = [false; 13];
                for (i, key) in active.iter_mut().enumerate() {
                    *key = notes.contains(&(start + i as i32));
                }
                KeyboardRow {
                    start_midi: start,
                    active,
                }
            })
            .collect();
        KeyboardView { rows }
    }

    /// View of a (possibly voiced) chord with its root in the C4 octave.
    pub fn for_chord(chord: &ParsedChord) -> Self {
        Self::from_midi_notes(&chord.midi_notes())
    }

    /// MIDI notes that are lit, in row order. The shared C between rows can appear twice.
    pub fn active_notes(&self) -> Vec<i32> {
        self.rows
            .iter()
            .flat_map(|row| {
                row.active
                    .iter()
                    .enumerate()
                    .filter(|(_, lit)| **lit)
                    .map(move |(i, _)| row.start_midi + i as i32)
            })
            .collect()
    }

    /// Text rendering: a label line, then one marker line per row (`*` lit, `.` unlit).
    pub fn render(&self) -> String {
        let mut out = String::new();
        let labels: Vec<String> = KEY_NAMES.iter().map(|name| format!("{:<3}", name)).collect();
        out.push_str(labels.concat().trim_end());
        out.push('\n');
        for row in &self.rows {
            let marks: Vec<String> = row
                .active
                .iter()
                .map(|&lit| format!("{:<3}", if lit { "*" } else { "." }))
                .collect();
            out.push_str(marks.concat().trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_chord_name;
    use crate::voicing::Voicing;

    #[test]
    fn test_c_major_lights_first_row() {
        let view = KeyboardView::for_chord(&parse_chord_name("C").unwrap());
        assert_eq!(view.active_notes(), vec![60, 64, 67]);
        assert!(view.rows[1].active.iter().all(|lit| !lit));
    }

    #[test]
    fn test_shared_c_lit_in_both_rows() {
        let view = KeyboardView::from_midi_notes(&[72]);
        assert!(view.rows[0].active[12]);
        assert!(view.rows[1].active[0]);
        assert_eq!(view.active_notes(), vec![72, 72]);
    }

    #[test]
    fn test_voiced_chord_spans_rows() {
        let chord = parse_chord_name("C").unwrap().voiced(Voicing::OpenTriad);
        let view = KeyboardView::for_chord(&chord);
        // 60, 67, 76
        assert_eq!(view.active_notes(), vec![60, 67, 76]);
    }

    #[test]
    fn test_out_of_range_notes_hidden() {
        let view = KeyboardView::from_midi_notes(&[40, 100]);
        assert!(view.active_notes().is_empty());
    }

    #[test]
    fn test_render() {
        let view = KeyboardView::from_midi_notes(&[60, 64, 67]);
        let text = view.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("C  C# D"));
        assert_eq!(lines[1], "*  .  .  .  *  .  .  *  .  .  .  .  .");
    }
}
