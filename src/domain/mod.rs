// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing what the analyzer
// works with:
//
//   document.rs — a path plus its detected DocumentFormat
//   error.rs    — extraction error kinds
//   speed.rs    — validated reading-speed sweep (WPM range)
//   report.rs   — the AnalysisReport and its text rendering
//   traits.rs   — TextExtractor / DocumentSource seams
//
// Rules for this layer:
//   - NO file I/O
//   - NO format-specific parsing crates
//   - NO printing
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// Supported formats and the Document type
pub mod document;

/// UnsupportedFormat / ExtractionFailure error kinds
pub mod error;

/// The AnalysisReport produced by the analyzer
pub mod report;

/// SpeedRange — the min..=max WPM sweep in steps of 10
pub mod speed;

/// Core abstractions implemented by the data layer
pub mod traits;
