//! Shape generation for the circle, spokes and scrolling graphs
//!
//! All positions are relative to the circle center in screen space (y down).

use glam::DVec2;
use std::f64::consts::TAU;

use crate::polar_to_screen;
use crate::sim::{AngleController, SPECIAL_ANGLES};

/// Parameter step between graph samples (radians)
pub const GRAPH_STEP: f64 = 0.05;
/// Spokes reach slightly past the circle
pub const SPOKE_OVERSHOOT: f64 = 1.1;
/// Cap on samples per graph
pub const MAX_GRAPH_SAMPLES: usize = 10_000;

/// Horizontal pixels per radian on the graphs
///
/// One full turn spans 2.5 radii.
pub fn pixels_per_radian(radius: f64) -> f64 {
    radius * 2.5 / TAU
}

/// Where the rotating point sits on the circle
pub fn circle_point(radius: f64, angle: f64) -> DVec2 {
    polar_to_screen(radius, angle)
}

/// Line segments from the center through each special angle
pub fn spokes(radius: f64) -> Vec<(DVec2, DVec2)> {
    SPECIAL_ANGLES
        .iter()
        .map(|&theta| (DVec2::ZERO, polar_to_screen(radius, theta) * SPOKE_OVERSHOOT))
        .collect()
}

/// Sample parameters starting at `angle` covering `extent` pixels plus a margin
///
/// A degenerate scale (zero radius from a collapsed canvas) yields no samples.
fn graph_params(angle: f64, scale: f64, extent: f64) -> impl Iterator<Item = f64> {
    let limit = extent / scale + 1.0;
    let count = if scale > 0.0 && limit.is_finite() && angle.is_finite() {
        ((limit / GRAPH_STEP).ceil().max(0.0) as usize).min(MAX_GRAPH_SAMPLES)
    } else {
        0
    };
    (0..count).map(move |i| angle + i as f64 * GRAPH_STEP)
}

/// Sine graph scrolling to the right from the circle center
///
/// The graph always starts at the current angle, so it slides as the point
/// rotates.
pub fn sine_graph(angle: f64, radius: f64, scale: f64, width: f64) -> Vec<DVec2> {
    graph_params(angle, scale, width)
        .map(|t| DVec2::new((t - angle) * scale, radius * (-t).sin()))
        .collect()
}

/// Cosine graph scrolling downward from the circle center
pub fn cosine_graph(angle: f64, radius: f64, scale: f64, height: f64) -> Vec<DVec2> {
    graph_params(angle, scale, height)
        .map(|t| DVec2::new(radius * t.cos(), (t - angle) * scale))
        .collect()
}

/// Everything drawn around the circle for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub radius: f64,
    pub point: DVec2,
    pub locked: bool,
    pub spokes: Vec<(DVec2, DVec2)>,
    pub sine: Vec<DVec2>,
    pub cosine: Vec<DVec2>,
}

/// Which optional layers to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layers {
    pub sine: bool,
    pub cosine: bool,
    pub spokes: bool,
}

impl Default for Layers {
    fn default() -> Self {
        Self {
            sine: true,
            cosine: true,
            spokes: true,
        }
    }
}

impl Scene {
    /// Build the frame geometry for a circle of `radius` in a viewport of `viewport` pixels
    pub fn build(
        controller: &AngleController,
        radius: f64,
        viewport: DVec2,
        layers: Layers,
    ) -> Self {
        let angle = controller.current_angle();
        let scale = pixels_per_radian(radius);

        Self {
            radius,
            point: circle_point(radius, angle),
            locked: controller.is_locked(),
            spokes: if layers.spokes { spokes(radius) } else { Vec::new() },
            sine: if layers.sine {
                sine_graph(angle, radius, scale, viewport.x)
            } else {
                Vec::new()
            },
            cosine: if layers.cosine {
                cosine_graph(angle, radius, scale, viewport.y)
            } else {
                Vec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TickInput;
    use std::f64::consts::PI;

    #[test]
    fn test_pixels_per_radian() {
        assert!((pixels_per_radian(TAU) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_spokes_overshoot() {
        let spokes = spokes(100.0);
        assert_eq!(spokes.len(), SPECIAL_ANGLES.len());
        for (from, to) in &spokes {
            assert_eq!(*from, DVec2::ZERO);
            assert!((to.length() - 110.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_graphs_start_at_point() {
        let radius = 100.0;
        let angle = PI / 3.0;
        let scale = pixels_per_radian(radius);
        let point = circle_point(radius, angle);

        let sine = sine_graph(angle, radius, scale, 800.0);
        assert_eq!(sine[0].x, 0.0);
        assert!((sine[0].y - point.y).abs() < 1e-9);
        assert!(sine.windows(2).all(|w| w[1].x > w[0].x));
        assert!(sine.last().is_some_and(|p| p.x >= 800.0 - GRAPH_STEP * scale));

        let cosine = cosine_graph(angle, radius, scale, 600.0);
        assert_eq!(cosine[0].y, 0.0);
        assert!((cosine[0].x - point.x).abs() < 1e-9);
    }

    #[test]
    fn test_zero_radius_has_no_graphs() {
        let controller = AngleController::default();
        let scene = Scene::build(&controller, 0.0, DVec2::new(0.0, 600.0), Layers::default());
        assert!(scene.sine.is_empty());
        assert!(scene.cosine.is_empty());
        assert_eq!(scene.point, DVec2::ZERO);

        assert!(sine_graph(0.0, 100.0, f64::NAN, 800.0).is_empty());
        assert!(cosine_graph(0.0, 100.0, -1.0, 600.0).is_empty());
        assert_eq!(sine_graph(0.0, 1e-300, 1e-300, 800.0).len(), MAX_GRAPH_SAMPLES);
    }

    #[test]
    fn test_scene_layers() {
        let mut controller = AngleController::default();
        controller.step(TickInput::right());
        let layers = Layers {
            sine: false,
            ..Default::default()
        };
        let scene = Scene::build(&controller, 100.0, DVec2::new(800.0, 600.0), layers);
        assert!(!scene.locked);
        assert!(scene.sine.is_empty());
        assert!(!scene.cosine.is_empty());
        assert_eq!(scene.spokes.len(), 17);
    }
}
