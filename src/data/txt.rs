// ============================================================
// Layer 4 — Plain Text Extractor
// ============================================================
// Reads the raw bytes and decodes them as strict UTF-8.
// The content is returned untouched: no trimming, no line
// ending conversion. Invalid UTF-8 is a Decode failure.

use std::path::Path;

use crate::data::read_bytes;
use crate::domain::{
    document::DocumentFormat,
    error::ExtractionFailure,
    traits::TextExtractor,
};

pub struct TxtExtractor;

impl TextExtractor for TxtExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Txt
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractionFailure> {
        let bytes = read_bytes(path)?;
        Ok(String::from_utf8(bytes)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_returns_content_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  Line one\n\n\tLine two  ").unwrap();

        let text = TxtExtractor.extract(file.path()).unwrap();
        assert_eq!(text, "  Line one\n\n\tLine two  ");
    }

    #[test]
    fn test_invalid_utf8_is_decode_failure() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'o', b'k', 0xC3, 0x28]).unwrap();

        let err = TxtExtractor.extract(file.path()).unwrap_err();
        assert!(matches!(err, ExtractionFailure::Decode(_)));
    }
}
