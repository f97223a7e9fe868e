// ============================================================
// Layer 6 — Analyzer Settings
// ============================================================
// Default reading-speed range, optionally loaded from a JSON
// file and then overridden by command line flags:
//
//   { "min_wpm": 180, "max_wpm": 300 }
//
// Missing keys fall back to the defaults (200 / 280). The
// final pair is validated into a SpeedRange.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::domain::speed::{SpeedRange, DEFAULT_MAX_WPM, DEFAULT_MIN_WPM};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSettings {
    pub min_wpm: u32,
    pub max_wpm: u32,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self { min_wpm: DEFAULT_MIN_WPM, max_wpm: DEFAULT_MAX_WPM }
    }
}

impl AnalyzerSettings {
    /// Defaults, or the contents of `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Cannot read settings file '{}'", path.display()))?;
        let settings: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid settings JSON in '{}'", path.display()))?;

        tracing::debug!(
            "Loaded settings from '{}': {}..={} WPM",
            path.display(),
            settings.min_wpm,
            settings.max_wpm
        );
        Ok(settings)
    }

    /// Apply command line overrides on top of these settings
    pub fn with_overrides(mut self, min_wpm: Option<u32>, max_wpm: Option<u32>) -> Self {
        if let Some(min) = min_wpm {
            self.min_wpm = min;
        }
        if let Some(max) = max_wpm {
            self.max_wpm = max;
        }
        self
    }

    pub fn speed_range(&self) -> Result<SpeedRange> {
        SpeedRange::new(self.min_wpm, self.max_wpm).context("Invalid reading speed range")
    }
}
