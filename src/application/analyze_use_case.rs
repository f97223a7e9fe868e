// ============================================================
// Layer 2 — Analyze Use Case
// ============================================================
// One request, all-or-nothing:
//
//   Step 1: extract text from the path      (Layer 4 - data)
//   Step 2: analyze it across the speeds    (Layer 5 - analysis)
//
// If step 1 fails the outcome is the error message behind the
// fixed "Error reading file: " marker; there is no partial
// report.

use serde_json::json;
use std::{fmt, path::Path};

use crate::analysis::analyze;
use crate::data::loader::DocumentLoader;
use crate::domain::{
    error::ExtractError,
    report::AnalysisReport,
    speed::SpeedRange,
    traits::DocumentSource,
};

/// Prefix shown in place of a report when extraction fails
pub const ERROR_MARKER: &str = "Error reading file: ";

/// The result of one request, ready for display
#[derive(Debug)]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    Failed(ExtractError),
}

impl AnalysisOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, AnalysisOutcome::Failed(_))
    }

    /// JSON form: the report itself, or `{"error": "..."}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            AnalysisOutcome::Report(report) => serde_json::to_string_pretty(report),
            AnalysisOutcome::Failed(_) => {
                serde_json::to_string_pretty(&json!({ "error": self.to_string() }))
            }
        }
    }
}

impl fmt::Display for AnalysisOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisOutcome::Report(report) => write!(f, "{report}"),
            AnalysisOutcome::Failed(err)    => write!(f, "{ERROR_MARKER}{err}"),
        }
    }
}

pub struct AnalyzeUseCase<S = DocumentLoader> {
    source: S,
    speeds: SpeedRange,
}

impl AnalyzeUseCase {
    /// Use case over the real file extractors
    pub fn new(speeds: SpeedRange) -> Self {
        Self::with_source(DocumentLoader::new(), speeds)
    }
}

impl<S: DocumentSource> AnalyzeUseCase<S> {
    pub fn with_source(source: S, speeds: SpeedRange) -> Self {
        Self { source, speeds }
    }

    /// Extract then analyze
    pub fn execute(&self, path: &Path) -> AnalysisOutcome {
        match self.source.load(path) {
            Ok(text) => AnalysisOutcome::Report(analyze(&text, self.speeds)),
            Err(err) => {
                tracing::warn!("Could not read '{}': {}", path.display(), err);
                AnalysisOutcome::Failed(err)
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ExtractionFailure;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory source: known paths return text, others fail
    struct FakeSource(HashMap<PathBuf, String>);

    impl DocumentSource for FakeSource {
        fn load(&self, path: &Path) -> Result<String, ExtractError> {
            self.0.get(path).cloned().ok_or_else(|| {
                ExtractionFailure::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "not in fake source"),
                )
                .into()
            })
        }
    }

    fn use_case() -> AnalyzeUseCase<FakeSource> {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("story.txt"), "Hello world. How are you?".to_string());
        AnalyzeUseCase::with_source(FakeSource(files), SpeedRange::default())
    }

    #[test]
    fn test_known_file_produces_report() {
        match use_case().execute(Path::new("story.txt")) {
            AnalysisOutcome::Report(report) => assert_eq!(report.word_count, 5),
            AnalysisOutcome::Failed(err) => panic!("unexpected failure: {err}"),
        }
    }

    #[test]
    fn test_failure_is_rendered_with_marker() {
        let outcome = use_case().execute(Path::new("missing.txt"));
        assert!(outcome.is_failure());
        assert_eq!(
            outcome.to_string(),
            "Error reading file: cannot read 'missing.txt': not in fake source"
        );
    }

    #[test]
    fn test_unsupported_extension_through_real_loader() {
        let outcome = AnalyzeUseCase::new(SpeedRange::default())
            .execute(Path::new("manuscript.docxx"));
        assert_eq!(outcome.to_string(), "Error reading file: Unsupported file extension: docxx");
    }

    #[test]
    fn test_failure_json_has_error_field() {
        let outcome = use_case().execute(Path::new("missing.txt"));
        let value: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
        assert!(value["error"].as_str().unwrap().starts_with(ERROR_MARKER));
    }

    #[test]
    fn test_report_json_round_trips_counts() {
        let outcome = use_case().execute(Path::new("story.txt"));
        let value: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
        assert_eq!(value["sentence_count"], 2);
        assert_eq!(value["estimates"].as_array().unwrap().len(), 9);
    }
}
