// error.rs
//
// Error type for name lookup and config loading.

use thiserror::Error;

/// Errors raised by name lookup and configuration parsing.
///
/// Curve evaluation itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum EasingError {
    #[error("unknown ease type: {0}")]
    UnknownEaseType(String),

    #[error("graph sample count {0} is outside 10..=1000")]
    SampleOutOfRange(u32),

    #[error("graph y_min {0} is outside -1..=0")]
    YMinOutOfRange(f32),

    #[error("graph y_max {0} is outside 1..=2")]
    YMaxOutOfRange(f32),

    #[error("movement duration {0} is outside 1..=10 seconds")]
    DurationOutOfRange(f32),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
