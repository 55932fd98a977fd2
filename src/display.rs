//! Plain-text report of a conversion, one block per chord followed by the group summary.
//!
//! ```text
//! Cmaj7 (maj7) [00]
//!   Root-baked:    00 04 07 0B
//!   Interval-only: 00 04 07 0B
//! ```

use crate::api::ConversionResult;
use crate::keyboard::KeyboardView;

pub const NO_VALID_CHORDS: &str = "No valid chords found.";

/// Options for [`format_report`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Draw a keyboard under each chord.
    pub keyboard: bool,
}

/// Render a conversion result as text.
pub fn format_report(result: &ConversionResult, options: ReportOptions) -> String {
    let mut out = String::new();

    if result.is_empty() {
        out.push_str(NO_VALID_CHORDS);
        out.push('\n');
        return out;
    }

    out.push_str(&format!("{}\n", result.input_chord_names.join(" ")));
    out.push_str(&format!("Voicing: {}\n\n", result.voicing.label()));

    for chord in &result.chords {
        let number = result
            .group_number(&chord.chord_name)
            .unwrap_or_else(|| "--".to_string());
        out.push_str(&format!("{} ({}) [{}]\n", chord.chord_name, chord.quality, number));
        out.push_str(&format!("  Root-baked:    {}\n", chord.root_baked.join(" ")));
        out.push_str(&format!("  Interval-only: {}\n", chord.interval_hex.join(" ")));
        if options.keyboard {
            for line in KeyboardView::for_chord(chord).render().lines() {
                out.push_str(&format!("    {}\n", line));
            }
        }
        out.push('\n');
    }

    out.push_str(&format!("Unique chord types: {}\n", result.unique_groups.len()));
    for group in &result.unique_groups {
        out.push_str(&format!(
            "  {:02}: {}  ({})\n",
            group.index,
            group.interval.join(" "),
            group.chords.join(", ")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::convert_chords;
    use crate::voicing::Voicing;

    #[test]
    fn test_report_lists_chords_and_groups() {
        let result = convert_chords("Cmaj7 Fmaj7 G7", Voicing::Closed);
        let text = format_report(&result, ReportOptions::default());
        assert!(text.starts_with("Cmaj7 Fmaj7 G7\n"));
        assert!(text.contains("Cmaj7 (maj7) [00]\n  Root-baked:    00 04 07 0B\n"));
        assert!(text.contains("Fmaj7 (maj7) [00]\n  Root-baked:    05 09 00 04\n"));
        assert!(text.contains("G7 (7) [01]"));
        assert!(text.contains("Unique chord types: 2"));
        assert!(text.contains("  00: 00 04 07 0B  (Cmaj7, Fmaj7)"));
    }

    #[test]
    fn test_report_for_no_chords() {
        let result = convert_chords("nope", Voicing::Closed);
        assert_eq!(format_report(&result, ReportOptions::default()), "No valid chords found.\n");
    }

    #[test]
    fn test_report_layout() {
        let result = convert_chords("C", Voicing::Closed);
        assert_eq!(
            format_report(&result, ReportOptions::default()),
            "C\nVoicing: Closed Voicing\n\n\
             C (maj) [00]\n  Root-baked:    00 04 07\n  Interval-only: 00 04 07\n\n\
             Unique chord types: 1\n  00: 00 04 07  (C)\n"
        );
    }

    #[test]
    fn test_report_with_keyboard() {
        let result = convert_chords("C", Voicing::Closed);
        let text = format_report(&result, ReportOptions { keyboard: true });
        assert!(text.contains("    *  .  .  .  *  .  .  *"));
    }
}
