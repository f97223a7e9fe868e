// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Classifies a path by extension and hands it to the matching
// TextExtractor. Implements the DocumentSource trait so the
// application layer never sees individual formats.
//
// Reference: Rust Book §6 (Enums), §17 (Trait Objects)

use std::path::Path;

use crate::data::{
    docx::DocxExtractor,
    odt::OdtExtractor,
    pdf::PdfExtractor,
    rtf::RtfExtractor,
    txt::TxtExtractor,
};
use crate::domain::{
    document::{Document, DocumentFormat},
    error::ExtractError,
    traits::{DocumentSource, TextExtractor},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// The extractor responsible for `format`
    pub fn extractor_for(format: DocumentFormat) -> &'static dyn TextExtractor {
        match format {
            DocumentFormat::Docx => &DocxExtractor,
            DocumentFormat::Pdf  => &PdfExtractor,
            DocumentFormat::Txt  => &TxtExtractor,
            DocumentFormat::Rtf  => &RtfExtractor,
            DocumentFormat::Odt  => &OdtExtractor,
        }
    }

    /// Whether the library backing `format` was compiled in.
    /// RTF is always available through its regex fallback.
    pub fn is_available(format: DocumentFormat) -> bool {
        match format {
            DocumentFormat::Docx => cfg!(feature = "docx"),
            DocumentFormat::Pdf  => cfg!(feature = "pdf"),
            DocumentFormat::Odt  => cfg!(feature = "odt"),
            DocumentFormat::Txt | DocumentFormat::Rtf => true,
        }
    }
}

impl DocumentSource for DocumentLoader {
    fn load(&self, path: &Path) -> Result<String, ExtractError> {
        let document = Document::detect(path).inspect_err(|e| {
            tracing::debug!("Rejected '{}': {}", path.display(), e);
        })?;

        tracing::debug!(
            extension = document.format.extension(),
            "Detected file extension for '{}'",
            path.display()
        );

        let extractor = Self::extractor_for(document.format);
        let text      = extractor.extract(&document.path)?;

        tracing::debug!(
            format = %extractor.format(),
            "Extracted {} chars from '{}'",
            text.chars().count(),
            path.display()
        );
        Ok(text)
    }
}
