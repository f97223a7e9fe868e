// ============================================================
// Layer 5 — Analyzer
// ============================================================
// Turns extracted text into an AnalysisReport:
//
//   Step 1: split into trimmed, non-empty paragraphs
//   Step 2: sum word and sentence counts over paragraphs
//   Step 3: count characters over the original text
//   Step 4: for each speed in the sweep, minutes = words / wpm
//   Step 5: format every estimate as "{h}h {m}m {s}s"
//   Step 6: time steps 1–5 and attach the formatted duration
//
// Any string is valid input; "" produces zero counts and "0s"
// estimates.

use std::time::Instant;

use crate::analysis::{
    counter::TextCounts,
    duration::{format_compute_time, format_duration},
};
use crate::domain::{
    report::{AnalysisReport, ReadingEstimate},
    speed::SpeedRange,
};

pub struct Analyzer {
    speeds: SpeedRange,
}

impl Analyzer {
    pub fn new(speeds: SpeedRange) -> Self {
        Self { speeds }
    }

    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let started = Instant::now();

        let counts = TextCounts::of(text);

        let estimates: Vec<ReadingEstimate> = self
            .speeds
            .speeds()
            .map(|wpm| {
                let minutes = counts.words as f64 / f64::from(wpm);
                ReadingEstimate { wpm, minutes, duration: format_duration(minutes) }
            })
            .collect();

        let elapsed = started.elapsed();
        tracing::debug!(
            words = counts.words,
            speeds = estimates.len(),
            "Analysis finished in {:?}",
            elapsed
        );

        AnalysisReport {
            word_count:           counts.words,
            paragraph_count:      counts.paragraphs,
            sentence_count:       counts.sentences,
            chars_with_spaces:    counts.chars_with_spaces,
            chars_without_spaces: counts.chars_without_spaces,
            speeds:               self.speeds,
            estimates,
            compute_time:         format_compute_time(elapsed),
        }
    }
}

/// Analyze `text` across `speeds`
pub fn analyze(text: &str, speeds: SpeedRange) -> AnalysisReport {
    Analyzer::new(speeds).analyze(text)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_gives_zeroes_and_zero_durations() {
        let report = analyze("", SpeedRange::new(200, 280).unwrap());

        assert_eq!(report.word_count, 0);
        assert_eq!(report.paragraph_count, 0);
        assert_eq!(report.sentence_count, 0);
        assert_eq!(report.chars_with_spaces, 0);
        assert_eq!(report.chars_without_spaces, 0);
        assert_eq!(report.estimates.len(), 9);
        assert!(report.estimates.iter().all(|e| e.duration == "0s"));
    }

    #[test]
    fn test_sweep_line_counts() {
        let full = analyze("word", SpeedRange::new(200, 280).unwrap());
        let wpms: Vec<u32> = full.estimates.iter().map(|e| e.wpm).collect();
        assert_eq!(wpms, vec![200, 210, 220, 230, 240, 250, 260, 270, 280]);

        let short = analyze("word", SpeedRange::new(200, 205).unwrap());
        assert_eq!(short.estimates.len(), 1);
        assert_eq!(short.estimates[0].wpm, 200);
    }

    #[test]
    fn test_estimates_divide_words_by_speed() {
        // 300 words at 200 WPM → 1.5 minutes
        let text   = vec!["word"; 300].join(" ");
        let report = analyze(&text, SpeedRange::new(200, 200).unwrap());

        assert_eq!(report.estimates[0].minutes, 1.5);
        assert_eq!(report.estimates[0].duration, "1m 30s");
    }

    #[test]
    fn test_report_text_for_reference_sentence() {
        let report = analyze("Hello world. How are you?", SpeedRange::new(200, 280).unwrap());
        let text   = report.to_string();

        assert!(text.starts_with("Total word count: 5\n"));
        assert!(text.contains("Sentence count: 2\n"));
        assert!(text.contains("Character count (with spaces): 25\n"));
        assert!(text.contains("Character count (without spaces): 21\n"));
        // 5 words / 200 WPM = 1.5 s → rounds to even → 2s
        assert!(text.contains("  @ 200 WPM: 2s\n"));
        assert!(text.contains("\n\n[Compute time: "));
        assert_eq!(text.lines().filter(|l| l.starts_with("  @ ")).count(), 9);
    }
}
