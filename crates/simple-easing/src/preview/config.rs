use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::EasingError;

/// Allowed sample counts.
pub const SAMPLE_RANGE: RangeInclusive<u32> = 10..=1000;
/// Allowed lower display bound.
pub const Y_MIN_RANGE: RangeInclusive<f32> = -1.0..=0.0;
/// Allowed upper display bound.
pub const Y_MAX_RANGE: RangeInclusive<f32> = 1.0..=2.0;

/// Settings for the curve preview graph.
///
/// Loaded from JSON; every field is optional and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Draw the graph at all (default: true).
    pub enable_graph: bool,
    /// Number of segments in the plotted curve (default: 100).
    pub sample: u32,
    /// Value drawn at the bottom edge (default: -0.5).
    pub y_min: f32,
    /// Value drawn at the top edge (default: 1.5).
    pub y_max: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            enable_graph: true,
            sample: 100,
            y_min: -0.5,
            y_max: 1.5,
        }
    }
}

impl GraphConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EasingError> {
        let config: GraphConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!(
            "graph config: enabled={} sample={} y={}..{}",
            config.enable_graph,
            config.sample,
            config.y_min,
            config.y_max
        );
        Ok(config)
    }

    /// Check every field against its allowed range, reporting the first miss.
    pub fn validate(&self) -> Result<(), EasingError> {
        if !SAMPLE_RANGE.contains(&self.sample) {
            return Err(EasingError::SampleOutOfRange(self.sample));
        }
        if !Y_MIN_RANGE.contains(&self.y_min) {
            return Err(EasingError::YMinOutOfRange(self.y_min));
        }
        if !Y_MAX_RANGE.contains(&self.y_max) {
            return Err(EasingError::YMaxOutOfRange(self.y_max));
        }
        Ok(())
    }

    /// Copy with every field forced into its allowed range.
    pub fn clamped(&self) -> Self {
        let sample = self.sample.clamp(*SAMPLE_RANGE.start(), *SAMPLE_RANGE.end());
        if sample != self.sample {
            log::warn!("graph sample {} clamped to {}", self.sample, sample);
        }
        let y_min = clamp_f32(self.y_min, &Y_MIN_RANGE);
        if y_min != self.y_min {
            log::warn!("graph y_min {} clamped to {}", self.y_min, y_min);
        }
        let y_max = clamp_f32(self.y_max, &Y_MAX_RANGE);
        if y_max != self.y_max {
            log::warn!("graph y_max {} clamped to {}", self.y_max, y_max);
        }
        Self {
            enable_graph: self.enable_graph,
            sample,
            y_min,
            y_max,
        }
    }
}

// NaN lands on the lower bound.
fn clamp_f32(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}
