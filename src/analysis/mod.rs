// ============================================================
// Layer 5 — Text Analysis
// ============================================================
// Pure, deterministic statistics over extracted text:
//
//   counter.rs  — paragraph / word / sentence / character counts
//   duration.rs — "1h 30m 0s" and "12.3 ms" formatting
//   analyzer.rs — runs the counts, the speed sweep and timing,
//                 producing an AnalysisReport
//
// Nothing here touches the filesystem and nothing here fails.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

pub mod analyzer;
pub mod counter;
pub mod duration;

pub use analyzer::analyze;
