// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// TextExtractor   — one implementation per DocumentFormat
// DocumentSource  — classify a path and run the right extractor
//
// The application layer only sees DocumentSource, so tests can
// hand it an in-memory source instead of real files.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use crate::domain::{
    document::DocumentFormat,
    error::{ExtractError, ExtractionFailure},
};

// ─── TextExtractor ────────────────────────────────────────────────────────────
/// Reads one document format into plain text.
///
/// Implementations:
///   - TxtExtractor, DocxExtractor, PdfExtractor,
///     OdtExtractor, RtfExtractor (data layer)
pub trait TextExtractor {
    /// The format this extractor handles
    fn format(&self) -> DocumentFormat;

    /// Extract the plain text of the file at `path`.
    /// Paragraphs are separated by a single '\n'.
    fn extract(&self, path: &Path) -> Result<String, ExtractionFailure>;
}

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Anything that can turn a path into extracted text.
///
/// Implementations:
///   - DocumentLoader → extension dispatch over the extractors
pub trait DocumentSource {
    fn load(&self, path: &Path) -> Result<String, ExtractError>;
}
