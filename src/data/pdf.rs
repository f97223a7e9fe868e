// ============================================================
// Layer 4 — PDF Extractor
// ============================================================
// Text is pulled page by page with pdf-extract. Quality is
// best-effort: it depends on how the PDF encodes its fonts.
//
// Pages that produce no text (nothing but whitespace) are
// skipped; the rest are joined with '\n'.
//
// pdf-extract (and the font parsers below it) can panic on
// malformed glyph data, so the call runs inside catch_unwind
// and a panic becomes an ordinary Parse failure.

use std::path::Path;

use crate::domain::{
    document::DocumentFormat,
    error::ExtractionFailure,
    traits::TextExtractor,
};

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    #[cfg(feature = "pdf")]
    fn extract(&self, path: &Path) -> Result<String, ExtractionFailure> {
        let bytes = crate::data::read_bytes(path)?;
        let pages = pages_from_bytes(&bytes)?;
        tracing::debug!("PDF '{}' yielded {} pages", path.display(), pages.len());
        Ok(join_pages(pages))
    }

    #[cfg(not(feature = "pdf"))]
    fn extract(&self, _path: &Path) -> Result<String, ExtractionFailure> {
        Err(ExtractionFailure::MissingCapability {
            library: "pdf-extract",
            format:  DocumentFormat::Pdf,
            feature: "pdf",
        })
    }
}

#[cfg(feature = "pdf")]
fn pages_from_bytes(bytes: &[u8]) -> Result<Vec<String>, ExtractionFailure> {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem_by_pages(bytes))) {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractionFailure::parse(DocumentFormat::Pdf, e.to_string())),
        Err(_panic) => {
            tracing::warn!("pdf-extract panicked; the file likely contains malformed fonts");
            Err(ExtractionFailure::parse(
                DocumentFormat::Pdf,
                "extraction panicked, the file likely contains malformed fonts",
            ))
        }
    }
}

/// Keep pages that produced any text, one per line
pub fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
