// ============================================================
// Layer 5 — Text Counters
// ============================================================
// Paragraphs: lines (split on '\n') that are non-empty after
//             trimming.
// Words:      whitespace-separated tokens.
// Sentences:  segments between runs of '.', '!' or '?' that are
//             non-empty after trimming.
// Characters: counted over the untouched text, as Unicode
//             scalar values, with and without ASCII spaces.
//
// Example:
//   "Hello world. How are you?"
//     → words 5, sentences 2, paragraphs 1, chars 26 / 22

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Trimmed, non-empty lines of `text`
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END_RE
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

pub fn count_characters(text: &str, with_spaces: bool) -> usize {
    if with_spaces {
        text.chars().count()
    } else {
        text.chars().filter(|&c| c != ' ').count()
    }
}

/// All scalar statistics of one text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCounts {
    pub words:                usize,
    pub paragraphs:           usize,
    pub sentences:            usize,
    pub chars_with_spaces:    usize,
    pub chars_without_spaces: usize,
}

impl TextCounts {
    pub fn of(text: &str) -> Self {
        let paragraphs = paragraphs(text);

        Self {
            words:                paragraphs.iter().map(|p| count_words(p)).sum(),
            paragraphs:           paragraphs.len(),
            sentences:            paragraphs.iter().map(|p| count_sentences(p)).sum(),
            chars_with_spaces:    count_characters(text, true),
            chars_without_spaces: count_characters(text, false),
        }
    }
}
