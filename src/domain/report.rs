// ============================================================
// Layer 3 — Analysis Report
// ============================================================
// The output of one analysis run. Pure data plus its fixed
// text rendering:
//
//   Total word count: 5
//   Total paragraph count (non-empty): 1
//   Sentence count: 2
//   Character count (with spaces): 26
//   Character count (without spaces): 22
//   Estimated reading times based on WPM range [200 - 280] progressing in steps of 10:
//     @ 200 WPM: 2s
//     ...
//
//   [Compute time: 0.1 ms]
//
// Durations arrive already formatted from the analysis layer,
// so this type never does arithmetic.

use serde::Serialize;
use std::fmt;

use crate::domain::speed::{SpeedRange, SPEED_STEP};

/// Estimated reading time at one speed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingEstimate {
    /// Words per minute
    pub wpm: u32,

    /// total words / wpm
    pub minutes: f64,

    /// e.g. "1h 30m 0s"
    pub duration: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub word_count:           usize,
    pub paragraph_count:      usize,
    pub sentence_count:       usize,
    pub chars_with_spaces:    usize,
    pub chars_without_spaces: usize,
    pub speeds:               SpeedRange,
    pub estimates:            Vec<ReadingEstimate>,
    /// Wall-clock time of the analysis, already formatted
    pub compute_time:         String,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total word count: {}", self.word_count)?;
        writeln!(f, "Total paragraph count (non-empty): {}", self.paragraph_count)?;
        writeln!(f, "Sentence count: {}", self.sentence_count)?;
        writeln!(f, "Character count (with spaces): {}", self.chars_with_spaces)?;
        writeln!(f, "Character count (without spaces): {}", self.chars_without_spaces)?;
        writeln!(
            f,
            "Estimated reading times based on WPM range [{} - {}] progressing in steps of {}:",
            self.speeds.min_wpm(),
            self.speeds.max_wpm(),
            SPEED_STEP,
        )?;
        for estimate in &self.estimates {
            writeln!(f, "  @ {} WPM: {}", estimate.wpm, estimate.duration)?;
        }
        write!(f, "\n[Compute time: {}]", self.compute_time)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisReport {
        AnalysisReport {
            word_count:           5,
            paragraph_count:      1,
            sentence_count:       2,
            chars_with_spaces:    26,
            chars_without_spaces: 22,
            speeds:               SpeedRange::new(200, 210).unwrap(),
            estimates: vec![
                ReadingEstimate { wpm: 200, minutes: 0.025, duration: "2s".into() },
                ReadingEstimate { wpm: 210, minutes: 5.0 / 210.0, duration: "1s".into() },
            ],
            compute_time: "0.1 ms".into(),
        }
    }

    #[test]
    fn test_renders_lines_in_fixed_order() {
        let text  = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Total word count: 5");
        assert_eq!(lines[1], "Total paragraph count (non-empty): 1");
        assert_eq!(lines[2], "Sentence count: 2");
        assert_eq!(lines[3], "Character count (with spaces): 26");
        assert_eq!(lines[4], "Character count (without spaces): 22");
        assert_eq!(
            lines[5],
            "Estimated reading times based on WPM range [200 - 210] progressing in steps of 10:"
        );
        assert_eq!(lines[6], "  @ 200 WPM: 2s");
        assert_eq!(lines[7], "  @ 210 WPM: 1s");
        // blank line before the compute-time footer
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "[Compute time: 0.1 ms]");
    }

    #[test]
    fn test_serialises_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["word_count"], 5);
        assert_eq!(json["speeds"]["min_wpm"], 200);
        assert_eq!(json["estimates"][1]["duration"], "1s");
    }
}
