//! Chord quality table
//!
//! Maps a quality symbol (the part of a chord name after the root) to its semitone
//! offsets from the root. Extended and altered chords keep their compound
//! intervals (9th = 14, 11th = 17, 13th = 21) so playback voices them above the octave.

/// A chord quality and its intervals from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordQuality {
    pub symbol: &'static str,
    pub intervals: &'static [i32],
}

const fn quality(symbol: &'static str, intervals: &'static [i32]) -> ChordQuality {
    ChordQuality { symbol, intervals }
}

/// Every recognized quality. The first interval of each entry is the root (0).
pub static CHORD_QUALITIES: &[ChordQuality] = &[
    quality("maj", &[0, 4, 7]),
    quality("min", &[0, 3, 7]),
    quality("m", &[0, 3, 7]),
    quality("dim", &[0, 3, 6]),
    quality("aug", &[0, 4, 8]),
    quality("+", &[0, 4, 8]),
    quality("7", &[0, 4, 7, 10]),
    quality("m7", &[0, 3, 7, 10]),
    quality("min7", &[0, 3, 7, 10]),
    quality("maj7", &[0, 4, 7, 11]),
    quality("M7", &[0, 4, 7, 11]),
    quality("sus2", &[0, 2, 7]),
    quality("sus4", &[0, 5, 7]),
    quality("6", &[0, 4, 7, 9]),
    quality("m6", &[0, 3, 7, 9]),
    quality("9", &[0, 4, 7, 10, 14]),
    quality("m9", &[0, 3, 7, 10, 14]),
    quality("maj9", &[0, 4, 7, 11, 14]),
    quality("11", &[0, 4, 7, 10, 14, 17]),
    quality("13", &[0, 4, 7, 10, 14, 21]),
    quality("add9", &[0, 4, 7, 14]),
    quality("add11", &[0, 4, 7, 10, 14]),
    quality("add13", &[0, 4, 7, 10, 14, 21]),
    quality("sus", &[0, 5, 7]),
    quality("5", &[0, 7]),
    quality("madd9", &[0, 3, 7, 14]),
    quality("maj6", &[0, 4, 7, 9]),
    quality("min9", &[0, 3, 7, 10, 14]),
    quality("min11", &[0, 3, 7, 10, 14, 17]),
    quality("min13", &[0, 3, 7, 10, 14, 21]),
    // 1, 3, 5, b7, b9, #9, #11, b13
    quality("7alt", &[0, 4, 7, 10, 13, 15, 18, 20]),
    quality("ø7", &[0, 3, 6, 10]),
    quality("m7b5", &[0, 3, 6, 10]),
    quality("dim7", &[0, 3, 6, 9]),
    quality("maj7#5", &[0, 4, 8, 11]),
    quality("mMaj7", &[0, 3, 7, 11]),
    quality("add2", &[0, 2, 4, 7]),
    quality("add4", &[0, 4, 5, 7]),
    quality("add6", &[0, 4, 7, 9]),
    quality("7b9", &[0, 4, 7, 10, 13]),
    quality("7#9", &[0, 4, 7, 10, 15]),
    quality("7b5", &[0, 4, 6, 10]),
    quality("7#5", &[0, 4, 8, 10]),
    quality("9b5", &[0, 4, 6, 10, 14]),
    quality("9#5", &[0, 4, 8, 10, 14]),
    quality("13b9", &[0, 4, 7, 10, 13, 21]),
    quality("13#9", &[0, 4, 7, 10, 15, 21]),
];

impl ChordQuality {
    /// Exact lookup by symbol.
    pub fn lookup(symbol: &str) -> Option<&'static ChordQuality> {
        CHORD_QUALITIES.iter().find(|q| q.symbol == symbol)
    }
}

/// Intervals for a quality symbol, or `None` if the symbol is not in the table.
pub fn chord_intervals(symbol: &str) -> Option<&'static [i32]> {
    ChordQuality::lookup(symbol).map(|q| q.intervals)
}
