// driver.rs
//
// Looping movement driven by an easing curve.
//
// Usage:
//   let mut movement = EaseMovement::new(MovementConfig::from_json(json)?);
//   let pose = movement.tick(dt);  // Apply pose.position / pose.rotation to your transform

use std::ops::RangeInclusive;

use glam::{EulerRot, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::easing::{evaluate, EaseType};
use crate::error::EasingError;
use crate::interp::lerp_vec2;

/// Allowed loop durations in seconds.
pub const DURATION_RANGE: RangeInclusive<f32> = 1.0..=10.0;

/// What to move and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Easing curve.
    pub ease: EaseType,
    /// Seconds per loop (1..=10).
    pub duration: f32,
    pub start_position: Vec2,
    pub target_position: Vec2,
    /// Euler angles in degrees.
    pub start_rotation: Vec3,
    /// Euler angles in degrees.
    pub target_rotation: Vec3,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            ease: EaseType::Linear,
            duration: 1.0,
            start_position: Vec2::ZERO,
            target_position: Vec2::ZERO,
            start_rotation: Vec3::ZERO,
            target_rotation: Vec3::ZERO,
        }
    }
}

impl MovementConfig {
    /// Parse a config from a JSON string, rejecting out-of-range durations.
    pub fn from_json(json: &str) -> Result<Self, EasingError> {
        let config: MovementConfig = serde_json::from_str(json)?;
        if !DURATION_RANGE.contains(&config.duration) {
            return Err(EasingError::DurationOutOfRange(config.duration));
        }
        log::debug!("movement config: {} over {}s", config.ease, config.duration);
        Ok(config)
    }
}

/// Position and rotation for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub rotation: Quat,
}

/// Unity-style Euler degrees: Z, then X, then Y.
fn euler_degrees(angles: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        angles.y.to_radians(),
        angles.x.to_radians(),
        angles.z.to_radians(),
    )
}

/// Loops progress from 0 to 1 over `duration` and eases a pose along it.
#[derive(Debug, Clone)]
pub struct EaseMovement {
    config: MovementConfig,
    start_rotation: Quat,
    target_rotation: Quat,
    elapsed: f32,
}

impl EaseMovement {
    /// Duration outside 1..=10 seconds (or NaN) is clamped with a warning.
    pub fn new(mut config: MovementConfig) -> Self {
        if !DURATION_RANGE.contains(&config.duration) {
            let clamped = if config.duration.is_nan() {
                *DURATION_RANGE.start()
            } else {
                config.duration.clamp(*DURATION_RANGE.start(), *DURATION_RANGE.end())
            };
            log::warn!("movement duration {} clamped to {}", config.duration, clamped);
            config.duration = clamped;
        }
        let start_rotation = euler_degrees(config.start_rotation);
        let target_rotation = euler_degrees(config.target_rotation);
        Self {
            config,
            start_rotation,
            target_rotation,
            elapsed: 0.0,
        }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Change the curve without restarting the loop.
    pub fn set_ease(&mut self, ease: EaseType) {
        self.config.ease = ease;
    }

    /// Seconds into the current loop.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Raw progress through the current loop, before easing.
    pub fn progress(&self) -> f32 {
        self.elapsed / self.config.duration
    }

    /// Advance by `dt` seconds and return the eased pose.
    ///
    /// Wraps by subtracting one duration, so a single huge `dt` can leave
    /// progress above 1 for that frame; the pose then extrapolates.
    pub fn tick(&mut self, dt: f32) -> Pose {
        self.elapsed += dt;
        if self.elapsed >= self.config.duration {
            self.elapsed -= self.config.duration;
        }
        self.pose()
    }

    /// Pose at the current progress, without advancing.
    pub fn pose(&self) -> Pose {
        let e = evaluate(self.progress(), self.config.ease);
        Pose {
            position: lerp_vec2(self.config.start_position, self.config.target_position, e),
            rotation: self.start_rotation.lerp(self.target_rotation, e),
        }
    }

    /// Back to the start of the loop.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
