// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A document is identified by its path. The only metadata we
// model is the format, detected from the file extension:
//
//   take the substring after the last '.', lower-case it,
//   and match one of: docx, pdf, txt, rtf, odt
//
// Anything else is rejected with UnsupportedFormat, carrying
// the extension that was found.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::Serialize;
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::domain::error::ExtractError;

/// The five manuscript formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Docx,
    Pdf,
    Txt,
    Rtf,
    Odt,
}

impl DocumentFormat {
    /// Every supported format, in file-picker order
    pub const ALL: [DocumentFormat; 5] = [
        DocumentFormat::Docx,
        DocumentFormat::Pdf,
        DocumentFormat::Txt,
        DocumentFormat::Rtf,
        DocumentFormat::Odt,
    ];

    /// The lower-cased text after the last '.' of the path.
    ///
    /// A path with no '.' at all yields the whole lower-cased
    /// path, which then fails classification.
    pub fn extension_of(path: &Path) -> String {
        let lowered = path.to_string_lossy().to_lowercase();
        match lowered.rsplit_once('.') {
            Some((_, ext)) => ext.to_string(),
            None           => lowered,
        }
    }

    /// Exact, case-insensitive match of an extension string
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "docx" => Some(DocumentFormat::Docx),
            "pdf"  => Some(DocumentFormat::Pdf),
            "txt"  => Some(DocumentFormat::Txt),
            "rtf"  => Some(DocumentFormat::Rtf),
            "odt"  => Some(DocumentFormat::Odt),
            _      => None,
        }
    }

    /// Classify a path, failing with UnsupportedFormat
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let ext = Self::extension_of(path);
        Self::from_extension(&ext).ok_or(ExtractError::UnsupportedFormat(ext))
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pdf  => "pdf",
            DocumentFormat::Txt  => "txt",
            DocumentFormat::Rtf  => "rtf",
            DocumentFormat::Odt  => "odt",
        }
    }

    /// Human-readable name, as shown in a file picker filter
    pub fn description(self) -> &'static str {
        match self {
            DocumentFormat::Docx => "Word Documents",
            DocumentFormat::Pdf  => "PDF Files",
            DocumentFormat::Txt  => "Text Files",
            DocumentFormat::Rtf  => "Rich Text Format",
            DocumentFormat::Odt  => "OpenDocument Text",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_uppercase())
    }
}

/// A manuscript on disk together with its detected format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path as supplied by the caller
    pub path: PathBuf,

    /// Format detected from the extension
    pub format: DocumentFormat,
}

impl Document {
    /// Detect the format of `path`.
    ///
    /// Example:
    ///   let doc = Document::detect("Draft.DOCX")?;   // format = Docx
    pub fn detect(path: impl Into<PathBuf>) -> Result<Self, ExtractError> {
        let path   = path.into();
        let format = DocumentFormat::from_path(&path)?;
        Ok(Self { path, format })
    }
}
