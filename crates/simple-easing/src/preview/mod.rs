//! Curve preview for editor tooling.
//!
//! Samples an [`EaseType`](crate::EaseType) across [0, 1] and lays the result
//! out as screen-space geometry, scaled by a [`GraphConfig`].

pub mod config;
pub mod graph;

pub use config::GraphConfig;
pub use graph::{graph_height, plot, sample_curve, GraphPlot, GraphRect, GuideLine, LineStyle};
