// ============================================================
// Layer 4 — Rich Text Format Extractor
// ============================================================
// RTF never hard-fails for a missing capability:
//
//   1. With the `rtf` feature, rtf_converter tokenizes the
//      document (paragraph breaks, \uN and \'hh escapes).
//   2. Without it, or when the input has no {\rtf header, a regex
//      stripper removes control words and groups:
//        - `{\...}` groups and `\word123 ` control words go
//        - remaining `{` / `}` go
//        - runs of '\n' collapse to one
//
// Bytes that are not valid UTF-8 are dropped while decoding;
// RTF is 7-bit with escapes, so stray bytes carry no text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::data::read_bytes;
use crate::domain::{
    document::DocumentFormat,
    error::ExtractionFailure,
    traits::TextExtractor,
};

static CONTROL_GROUP_OR_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\\.*?\}|\\[A-Za-z]+\d* ?").unwrap());
static BRACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[{}]").unwrap());
static NEWLINE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

pub struct RtfExtractor;

impl TextExtractor for RtfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Rtf
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractionFailure> {
        let bytes = read_bytes(path)?;
        Ok(rtf_to_text(&decode_lossy(&bytes)))
    }
}

/// UTF-8 decode that silently drops invalid byte sequences
fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Convert RTF source to plain text, preferring the tokenizing
/// converter.
pub fn rtf_to_text(content: &str) -> String {
    #[cfg(feature = "rtf")]
    {
        match crate::data::rtf_converter::convert(content) {
            Some(text) => return text,
            None => tracing::warn!("No {{\\rtf header found; stripping control words instead"),
        }
    }

    #[cfg(not(feature = "rtf"))]
    tracing::debug!("RTF converter not compiled in; stripping control words");

    strip_control_words(content)
}

/// Regex fallback: remove control groups/words and braces,
/// collapse repeated newlines.
pub fn strip_control_words(content: &str) -> String {
    let text = CONTROL_GROUP_OR_WORD_RE.replace_all(content, "");
    let text = BRACE_RE.replace_all(&text, "");
    NEWLINE_RUN_RE.replace_all(&text, "\n").into_owned()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::counter::TextCounts;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SIMPLE_RTF: &str =
        "{\\rtf1\\ansi\\deff0 {\\fonttbl {\\f0 Times;}}\\f0\\fs24 Hello world.\\par\n\nSecond line.\\par\n}";

    #[test]
    fn test_stripper_removes_header_and_control_words() {
        assert_eq!(strip_control_words(SIMPLE_RTF), "Hello world.\nSecond line.\n");
    }

    #[test]
    fn test_stripper_leaves_plain_text_alone() {
        assert_eq!(strip_control_words("no markup here"), "no markup here");
    }

    #[test]
    fn test_stripper_collapses_blank_lines() {
        assert_eq!(strip_control_words("a\n\n\n\nb"), "a\nb");
    }

    #[test]
    fn test_decode_drops_invalid_bytes() {
        assert_eq!(decode_lossy(&[b'a', 0xFF, b'b', 0xC3]), "ab");
    }

    #[cfg(feature = "rtf")]
    #[test]
    fn test_paragraphs_survive_conversion() {
        let text = rtf_to_text(r"{\rtf1\ansi First one.\par Second one.\par Third.}");
        assert_eq!(text, "First one.\nSecond one.\nThird.");

        let counts = TextCounts::of(&text);
        assert_eq!(counts.paragraphs, 3);
        assert_eq!(counts.words, 6);
    }

    #[cfg(feature = "rtf")]
    #[test]
    fn test_unicode_escapes_do_not_merge_words() {
        let text = rtf_to_text(r"{\rtf1\ansi na\u239?ve text\par}");
        assert_eq!(text, "na\u{EF}ve text\n");
        assert_eq!(TextCounts::of(&text).words, 2);
    }

    #[test]
    fn test_text_without_header_uses_stripper() {
        assert_eq!(rtf_to_text("plain\n\nlines"), "plain\nlines");
    }

    #[test]
    fn test_extract_never_fails_on_readable_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SIMPLE_RTF.as_bytes()).unwrap();
        file.write_all(&[0xFF]).unwrap();

        let text = RtfExtractor.extract(file.path()).unwrap();
        assert!(text.contains("Hello world."));
    }
}
