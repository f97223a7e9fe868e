// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that belong to no single layer:
//
//   settings.rs — reading-speed defaults, loaded from an
//                 optional JSON file and merged with CLI flags
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Analyzer settings (default WPM range)
pub mod settings;
