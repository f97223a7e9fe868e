// ============================================================
// Layer 4 — Text Extraction
// ============================================================
// Everything between a path on disk and a plain-text String.
//
//   path
//     │
//     ▼
//   DocumentLoader   → detects the format from the extension
//     │
//     ├── txt  → TxtExtractor   (strict UTF-8 read)
//     ├── docx → DocxExtractor  (docx-rs)
//     ├── pdf  → PdfExtractor   (pdf-extract, per page)
//     ├── odt  → OdtExtractor   (zip + quick-xml over content.xml)
//     └── rtf  → RtfExtractor   (rtf_converter, regex fallback)
//     │
//     ▼
//   String (paragraphs joined by '\n')
//
// Each format backend sits behind a Cargo feature of the same
// name. With a feature disabled, the docx/pdf/odt extractors
// fail with MissingCapability; rtf falls back to its regex
// stripper instead.
//
// Reference: Rust Book §7 (Modules), §9 (Error Handling)

use std::{fs, path::Path};

use crate::domain::error::ExtractionFailure;

/// Extension → extractor dispatch
pub mod loader;

/// Plain UTF-8 text files
pub mod txt;

/// Word .docx via docx-rs
pub mod docx;

/// PDF via pdf-extract
pub mod pdf;

/// OpenDocument .odt via zip + quick-xml
pub mod odt;

/// Rich Text Format via the converter or regex stripping
pub mod rtf;

#[cfg(feature = "rtf")]
pub mod rtf_converter;

/// Read a whole file. The handle is closed before returning,
/// on success and on error alike.
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>, ExtractionFailure> {
    let bytes = fs::read(path).map_err(|e| ExtractionFailure::io(path, e))?;
    tracing::debug!("Read {} bytes from '{}'", bytes.len(), path.display());
    Ok(bytes)
}

/// Join paragraphs with '\n', dropping ones that are blank
/// after trimming.
pub(crate) fn join_non_blank<I, S>(paragraphs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paragraphs
        .into_iter()
        .filter(|p| !p.as_ref().trim().is_empty())
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_drops_blank_paragraphs_but_keeps_inner_spacing() {
        let joined = join_non_blank(vec!["  First ", "", "   ", "Second"]);
        assert_eq!(joined, "  First \nSecond");
    }

    #[test]
    fn test_read_missing_file_is_io_failure() {
        let err = read_bytes(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, ExtractionFailure::Io { .. }));
    }
}
