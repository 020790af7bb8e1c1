//! Named easing curves for animation.
//!
//! [`evaluate`] maps normalized progress through one of 41 [`EaseType`] curves.
//! It never clamps, so overshooting curves (Back, Elastic) and out-of-range
//! progress extrapolate.
//!
//! ```
//! use simple_easing::{evaluate, EaseType};
//!
//! assert_eq!(evaluate(0.5, EaseType::InQuad), 0.25);
//! assert_eq!(evaluate(0.5, EaseType::OutQuad), 0.75);
//! ```

pub mod driver;
pub mod easing;
pub mod error;
pub mod interp;
pub mod preview;

// Re-export key types at crate root for convenience
pub use easing::{evaluate, evaluate_ordinal, EaseType};
pub use error::EasingError;
pub use interp::{ease, ease_quat, ease_vec2, inverse_lerp, lerp, lerp_vec2, lerp_vec3};

// Editor/demo collaborators
pub use driver::{EaseMovement, MovementConfig, Pose};
pub use preview::{GraphConfig, GraphPlot, GraphRect};
