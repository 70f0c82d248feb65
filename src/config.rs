// Visualizer configuration
// Timing, array bounds, and the control surface's size/speed mappings

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Pause between the "all highlighted" flourish and the final sorted state
pub const COMPLETION_PAUSE_MS: u64 = 900;

/// Array length the control surface starts with
pub const INITIAL_ARRAY_LEN: usize = 87;

/// Inclusive bounds of generated array values
pub const MIN_VALUE: u32 = 10;
pub const MAX_VALUE: u32 = 209;

/// Errors from loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Value range is empty: min_value {min} exceeds max_value {max}")]
    EmptyValueRange { min: u32, max: u32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration for sorting sessions and replay pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Fixed pause after the trace is exhausted (ms)
    pub completion_pause_ms: u64,

    /// Largest array `sort` accepts
    /// Matches the largest size the size slider can produce
    pub max_array_len: usize,

    /// Smallest generated value
    pub min_value: u32,

    /// Largest generated value
    pub max_value: u32,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            completion_pause_ms: COMPLETION_PAUSE_MS,
            max_array_len: size_for_slider(100),
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
        }
    }
}

impl VisualizerConfig {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: VisualizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_value > self.max_value {
            return Err(ConfigError::EmptyValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    /// Generated value bounds, never empty
    /// Inverted bounds from a hand-built config are read low to high
    pub fn value_range(&self) -> RangeInclusive<u32> {
        let low = self.min_value.min(self.max_value);
        let high = self.min_value.max(self.max_value);
        low..=high
    }
}

/// Per-event delay for an array of `len` elements
/// Larger arrays replay faster; 24 elements and up replay without delay
pub fn speed_for_len(len: usize) -> u64 {
    let squared = (len as u64).saturating_mul(len as u64);
    570u64.saturating_sub(squared)
}

/// Array length for a size slider position in `[0, 100]`
pub fn size_for_slider(position: u32) -> usize {
    let position = position.min(100);
    ((position + 3) * 165 / 100) as usize
}
