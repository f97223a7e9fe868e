// ============================================================
// Layer 3 — Extraction Errors
// ============================================================
// Two top-level kinds:
//   UnsupportedFormat — the extension is not one of the five
//   ExtractionFailure — the format is known but reading failed
//
// A UTF-8 decode error is one flavour of ExtractionFailure.
// Neither kind is retryable.

use std::{path::PathBuf, string::FromUtf8Error};
use thiserror::Error;

use crate::domain::document::DocumentFormat;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file extension: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Failure(#[from] ExtractionFailure),
}

#[derive(Debug, Error)]
pub enum ExtractionFailure {
    /// The optional library for this format was compiled out
    #[error("{library} library is required to read {format} files (enable the `{feature}` feature).")]
    MissingCapability {
        library: &'static str,
        format:  DocumentFormat,
        feature: &'static str,
    },

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{format} parse error: {message}")]
    Parse {
        format:  DocumentFormat,
        message: String,
    },

    #[error("file is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

impl ExtractionFailure {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractionFailure::Io { path: path.into(), source }
    }

    pub fn parse(format: DocumentFormat, message: impl Into<String>) -> Self {
        ExtractionFailure::Parse { format, message: message.into() }
    }
}

impl From<FromUtf8Error> for ExtractError {
    fn from(err: FromUtf8Error) -> Self {
        ExtractError::Failure(ExtractionFailure::Decode(err))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_capability_names_library() {
        let err = ExtractionFailure::MissingCapability {
            library: "docx-rs",
            format:  DocumentFormat::Docx,
            feature: "docx",
        };
        let msg = err.to_string();
        assert!(msg.contains("docx-rs"));
        assert!(msg.contains("DOCX"));
    }

    #[test]
    fn test_decode_error_is_an_extraction_failure() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ExtractError = bad.into();
        assert!(matches!(err, ExtractError::Failure(ExtractionFailure::Decode(_))));
        assert!(err.to_string().starts_with("file is not valid UTF-8"));
    }

    #[test]
    fn test_io_error_includes_path_and_cause() {
        let err = ExtractionFailure::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "cannot read 'missing.txt': no such file");
    }
}
