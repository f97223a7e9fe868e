// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates extraction (Layer 4) and analysis (Layer 5)
// for one request.
//
// Rules for this layer:
//   - No parsing or counting here
//   - No printing here (that's Layer 1)
//   - Extraction errors stop here: they become an outcome
//     the CLI can display, never a propagated error
//
// Reference: Clean Architecture pattern

/// Path → report (or the "Error reading file" outcome)
pub mod analyze_use_case;
