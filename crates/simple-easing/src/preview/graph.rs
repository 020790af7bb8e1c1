// preview/graph.rs
//
// Samples an easing curve into screen-space geometry for a preview widget.
// Produces plain data (rects, lines, a polyline); drawing is up to the host UI.

use glam::Vec2;

use super::config::GraphConfig;
use crate::easing::{evaluate, EaseType};
use crate::interp::{inverse_lerp, lerp};

/// Horizontal padding subtracted from the view width before sizing the graph.
const VIEW_PADDING: f32 = 40.0;
/// Spacing of the dashes on the midline.
const DOTTED_SPACING: f32 = 10.0;

/// Screen-space rectangle, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl GraphRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Top edge.
    pub fn y_min(&self) -> f32 {
        self.y
    }

    /// Bottom edge.
    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    /// Right edge.
    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }
}

/// Graph height for a view of the given width: 16:9 after padding.
pub fn graph_height(view_width: f32) -> f32 {
    (view_width - VIEW_PADDING) * 9.0 / 16.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    Solid,
    Dotted { spacing: f32 },
}

/// Horizontal reference line across the graph at a given curve value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    /// Curve value the line marks.
    pub value: f32,
    /// Screen y of the line.
    pub y: f32,
    pub style: LineStyle,
}

/// Everything needed to draw one curve preview.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPlot {
    pub ease: EaseType,
    pub background: GraphRect,
    /// Lines at 0, 0.5 and 1.
    pub guides: Vec<GuideLine>,
    /// Curve polyline, `sample + 1` points from left to right.
    pub curve: Vec<Vec2>,
}

/// `(t, eased)` pairs for `t` swept evenly over [0, 1], endpoints included.
///
/// Yields `samples + 1` pairs; zero samples yields just `t = 0`.
pub fn sample_curve(ease: EaseType, samples: u32) -> impl Iterator<Item = (f32, f32)> {
    (0..=samples).map(move |i| {
        let t = if samples == 0 { 0.0 } else { i as f32 / samples as f32 };
        (t, evaluate(t, ease))
    })
}

/// Map a curve value to screen y. Values outside the display range pin to an edge.
fn value_to_y(rect: &GraphRect, config: &GraphConfig, value: f32) -> f32 {
    lerp(
        rect.y_max(),
        rect.y_min(),
        inverse_lerp(config.y_min, config.y_max, value),
    )
}

/// Lay out a preview of `ease` inside `rect`.
///
/// Returns `None` when there is no config or the graph is disabled. Fields
/// outside their allowed ranges are clamped before plotting.
pub fn plot(config: Option<&GraphConfig>, rect: GraphRect, ease: EaseType) -> Option<GraphPlot> {
    let Some(config) = config else {
        log::error!("easing preview: config is missing, cannot plot {}", ease);
        return None;
    };
    if !config.enable_graph {
        return None;
    }
    let config = &config.clamped();

    let guides = vec![
        GuideLine {
            value: 0.0,
            y: value_to_y(&rect, config, 0.0),
            style: LineStyle::Solid,
        },
        GuideLine {
            value: 0.5,
            y: value_to_y(&rect, config, 0.5),
            style: LineStyle::Dotted { spacing: DOTTED_SPACING },
        },
        GuideLine {
            value: 1.0,
            y: value_to_y(&rect, config, 1.0),
            style: LineStyle::Solid,
        },
    ];

    let curve = sample_curve(ease, config.sample)
        .map(|(t, v)| {
            let x = lerp(rect.x, rect.x_max(), t);
            Vec2::new(x, value_to_y(&rect, config, v))
        })
        .collect();

    Some(GraphPlot {
        ease,
        background: rect,
        guides,
        curve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> GraphRect {
        // 0..200 wide, 0..100 tall.
        GraphRect::new(0.0, 0.0, 200.0, 100.0)
    }

    #[test]
    fn height_is_sixteen_by_nine_after_padding() {
        assert_eq!(graph_height(360.0), 180.0);
        assert_eq!(graph_height(40.0), 0.0);
    }

    #[test]
    fn sample_curve_covers_both_ends() {
        let samples: Vec<_> = sample_curve(EaseType::InQuad, 4).collect();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], (0.0, 0.0));
        assert_eq!(samples[2], (0.5, 0.25));
        assert_eq!(samples[4], (1.0, 1.0));
    }

    #[test]
    fn sample_curve_zero_count() {
        let samples: Vec<_> = sample_curve(EaseType::Linear, 0).collect();
        assert_eq!(samples, vec![(0.0, 0.0)]);
    }

    #[test]
    fn missing_config_declines() {
        assert!(plot(None, rect(), EaseType::OutBounce).is_none());
    }

    #[test]
    fn disabled_graph_declines() {
        let config = GraphConfig {
            enable_graph: false,
            ..GraphConfig::default()
        };
        assert!(plot(Some(&config), rect(), EaseType::Linear).is_none());
    }

    #[test]
    fn guides_sit_at_scaled_heights() {
        let config = GraphConfig::default(); // -0.5..1.5 over 100px
        let graph = plot(Some(&config), rect(), EaseType::Linear).unwrap();
        assert_eq!(graph.guides.len(), 3);
        assert!((graph.guides[0].y - 75.0).abs() < 1e-3);
        assert!((graph.guides[1].y - 50.0).abs() < 1e-3);
        assert!((graph.guides[2].y - 25.0).abs() < 1e-3);
        assert_eq!(graph.guides[1].style, LineStyle::Dotted { spacing: 10.0 });
        assert_eq!(graph.guides[0].style, LineStyle::Solid);
    }

    #[test]
    fn curve_spans_rect_width() {
        let config = GraphConfig {
            sample: 20,
            ..GraphConfig::default()
        };
        let graph = plot(Some(&config), rect(), EaseType::InOutCubic).unwrap();
        assert_eq!(graph.curve.len(), 21);
        assert_eq!(graph.curve[0].x, 0.0);
        assert!((graph.curve[20].x - 200.0).abs() < 1e-3);
        // Starts on the 0 guide, ends on the 1 guide.
        assert!((graph.curve[0].y - 75.0).abs() < 1e-3);
        assert!((graph.curve[20].y - 25.0).abs() < 1e-3);
    }

    #[test]
    fn sample_count_is_clamped_before_plotting() {
        let few = GraphConfig {
            sample: 3,
            ..GraphConfig::default()
        };
        let graph = plot(Some(&few), rect(), EaseType::InSine).unwrap();
        assert_eq!(graph.curve.len(), 11);

        let many = GraphConfig {
            sample: 5000,
            ..GraphConfig::default()
        };
        let graph = plot(Some(&many), rect(), EaseType::InSine).unwrap();
        assert_eq!(graph.curve.len(), 1001);
        assert!((graph.curve[1000].x - 200.0).abs() < 1e-3);
    }

    #[test]
    fn display_range_is_clamped_before_plotting() {
        let config = GraphConfig {
            y_min: -4.0,
            y_max: 9.0,
            ..GraphConfig::default()
        };
        // Clamped to -1..2: value 0 sits a third of the way up from the bottom.
        let graph = plot(Some(&config), rect(), EaseType::Linear).unwrap();
        assert!((graph.guides[0].y - 200.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn values_beyond_display_range_pin_to_edges() {
        let config = GraphConfig {
            sample: 10,
            y_min: 0.0,
            y_max: 1.0,
            ..GraphConfig::default()
        };
        let graph = plot(Some(&config), rect(), EaseType::OutBack).unwrap();
        // OutBack passes 1.0, so some samples sit on the top edge.
        assert!(graph.curve.iter().any(|p| p.y == 0.0));
        assert!(graph.curve.iter().all(|p| (0.0..=100.0).contains(&p.y)));
    }
}
