//! Unit Circle - An interactive unit circle with snapping rotation
//!
//! Core modules:
//! - `sim`: Deterministic rotation state machine (free rotation, snap, lock)
//! - `trig`: Exact symbolic sine/cosine values for special angles
//! - `ui`: Per-frame readout consumed by the renderer
//! - `renderer`: Geometry for the circle, spokes and scrolling graphs
//! - `platform`: Keyboard/pointer input folding
//! - `settings`: Tunable speeds and display toggles

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod trig;
pub mod ui;

pub use error::{SettingsError, StateError};
pub use settings::Settings;
pub use sim::{AngleController, RotationState, TickInput, Tuning};
pub use trig::{TrigValue, exact_value};
pub use ui::Readout;

use glam::DVec2;
use std::f64::consts::TAU;

/// Simulation configuration constants
pub mod consts {
    use std::f64::consts::PI;

    /// Angle added or removed per tick while a direction is held (radians)
    pub const ROTATE_SPEED: f64 = 0.05;
    /// Fraction of the remaining distance covered per idle tick while snapping
    pub const SNAP_SPEED: f64 = 0.2;
    /// Upper bound on the rotate speed (a quarter turn per tick)
    pub const MAX_ROTATE_SPEED: f64 = PI / 2.0;

    /// Below this distance the snap interpolation lands exactly on the target
    pub const SNAP_EPSILON: f64 = 0.0001;
    /// Below this distance a resting point counts as locked
    pub const LOCK_EPSILON: f64 = 0.001;

    /// Full turns allowed before the angle is re-centered
    pub const WRAP_TURNS: f64 = 100.0;
    /// Re-centering threshold and step (100 full turns)
    pub const WRAP_LIMIT: f64 = 2.0 * PI * WRAP_TURNS;

    /// Display de-jitter grid (15 degrees)
    pub const DISPLAY_STEP: f64 = PI / 12.0;
    /// Display values closer than this to the grid are pulled onto it
    pub const DISPLAY_EPSILON: f64 = 0.001;

    /// Tolerance used when matching sin/cos against exact values
    pub const TRIG_EPSILON: f64 = 0.01;
}

/// Normalize an angle to [0, 2π)
///
/// Uses the truncating remainder and then shifts negatives up by one turn, so
/// the result for a tiny negative input may round to exactly 2π.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut normalized = angle % TAU;
    if normalized < 0.0 {
        normalized += TAU;
    }
    normalized
}

/// Convert polar (r, theta) to screen space (y axis pointing down)
#[inline]
pub fn polar_to_screen(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * (-theta).sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(0.5) - 0.5).abs() < 1e-12);
        assert!((normalize_angle(-0.5) - (TAU - 0.5)).abs() < 1e-12);
        assert!((normalize_angle(3.0 * TAU + 1.0) - 1.0).abs() < 1e-9);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(-TAU), 0.0);
    }

    #[test]
    fn test_polar_to_screen_flips_y() {
        let p = polar_to_screen(10.0, PI / 2.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 10.0).abs() < 1e-9);
    }
}
