// ============================================================
// Layer 3 — Reading Speed Range
// ============================================================
// The sweep of reading speeds (words per minute) the report
// estimates durations for.
//
// Preconditions enforced at construction:
//   - min_wpm >= 1
//   - max_wpm >= min_wpm
//
// The sweep starts at min_wpm and advances by 10 while the
// value stays <= max_wpm, so max_wpm itself is only visited
// when (max - min) is a multiple of 10.
//
// Example: 200..=205 → [200]
//          200..=280 → [200, 210, ..., 280]

use serde::Serialize;
use thiserror::Error;

/// Step between consecutive speeds in the sweep
pub const SPEED_STEP: u32 = 10;

pub const DEFAULT_MIN_WPM: u32 = 200;
pub const DEFAULT_MAX_WPM: u32 = 280;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpeedRangeError {
    #[error("minimum WPM must be at least 1")]
    ZeroMinimum,

    #[error("maximum WPM ({max}) must not be lower than minimum WPM ({min})")]
    Inverted { min: u32, max: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeedRange {
    min_wpm: u32,
    max_wpm: u32,
}

impl SpeedRange {
    pub fn new(min_wpm: u32, max_wpm: u32) -> Result<Self, SpeedRangeError> {
        if min_wpm == 0 {
            return Err(SpeedRangeError::ZeroMinimum);
        }
        if max_wpm < min_wpm {
            return Err(SpeedRangeError::Inverted { min: min_wpm, max: max_wpm });
        }
        Ok(Self { min_wpm, max_wpm })
    }

    pub fn min_wpm(&self) -> u32 {
        self.min_wpm
    }

    pub fn max_wpm(&self) -> u32 {
        self.max_wpm
    }

    /// Iterate min, min+10, ... while <= max
    pub fn speeds(&self) -> impl Iterator<Item = u32> {
        (self.min_wpm..=self.max_wpm).step_by(SPEED_STEP as usize)
    }
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self { min_wpm: DEFAULT_MIN_WPM, max_wpm: DEFAULT_MAX_WPM }
    }
}
