//! Note name spellings and their semitone offsets from C.

use serde::{Serialize, Serializer};
use std::fmt;

/// One of the 17 recognized root spellings.
///
/// Enharmonic spellings (`C#`/`Db`, ...) are distinct names with the same semitone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    CSharp,
    DFlat,
    D,
    DSharp,
    EFlat,
    E,
    F,
    FSharp,
    GFlat,
    G,
    GSharp,
    AFlat,
    A,
    ASharp,
    BFlat,
    B,
}

impl NoteName {
    /// Every spelling, in ascending semitone order.
    pub const ALL: [NoteName; 17] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::DFlat,
        NoteName::D,
        NoteName::DSharp,
        NoteName::EFlat,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::GFlat,
        NoteName::G,
        NoteName::GSharp,
        NoteName::AFlat,
        NoteName::A,
        NoteName::ASharp,
        NoteName::BFlat,
        NoteName::B,
    ];

    /// Exact, case-sensitive lookup. `"c"` or `"Cb"` are not spellings.
    pub fn from_spelling(spelling: &str) -> Option<NoteName> {
        match spelling {
            "C" => Some(NoteName::C),
            "C#" => Some(NoteName::CSharp),
            "Db" => Some(NoteName::DFlat),
            "D" => Some(NoteName::D),
            "D#" => Some(NoteName::DSharp),
            "Eb" => Some(NoteName::EFlat),
            "E" => Some(NoteName::E),
            "F" => Some(NoteName::F),
            "F#" => Some(NoteName::FSharp),
            "Gb" => Some(NoteName::GFlat),
            "G" => Some(NoteName::G),
            "G#" => Some(NoteName::GSharp),
            "Ab" => Some(NoteName::AFlat),
            "A" => Some(NoteName::A),
            "A#" => Some(NoteName::ASharp),
            "Bb" => Some(NoteName::BFlat),
            "B" => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn spelling(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::DFlat => "Db",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::EFlat => "Eb",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::GFlat => "Gb",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::AFlat => "Ab",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::BFlat => "Bb",
            NoteName::B => "B",
        }
    }

    /// Semitone offset from C, always in `0..=11`.
    pub fn semitone(self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::CSharp | NoteName::DFlat => 1,
            NoteName::D => 2,
            NoteName::DSharp | NoteName::EFlat => 3,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::FSharp | NoteName::GFlat => 6,
            NoteName::G => 7,
            NoteName::GSharp | NoteName::AFlat => 8,
            NoteName::A => 9,
            NoteName::ASharp | NoteName::BFlat => 10,
            NoteName::B => 11,
        }
    }

    /// MIDI note of the root in the C4 octave (C4 = 60). Used for display and keyboard views.
    pub fn midi_root(self) -> i32 {
        60 + self.semitone()
    }

    /// MIDI note of the root in the C3 octave (C3 = 48). Pads are voiced an octave down.
    pub fn playback_root(self) -> i32 {
        48 + self.semitone()
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

impl Serialize for NoteName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.spelling())
    }
}
