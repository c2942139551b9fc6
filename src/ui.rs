//! Readout panel contents
//!
//! Everything the info panel shows for one frame, derived from the controller.

use crate::sim::AngleController;
use crate::trig::{TrigValue, exact_pair};

/// Snapshot of the angle readout for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    /// Display angle in radians, [0, 2π)
    pub angle: f64,
    /// Display angle rounded to whole degrees
    pub degrees: i32,
    pub locked: bool,
    pub sin: TrigValue,
    pub cos: TrigValue,
}

impl Readout {
    pub fn from_controller(controller: &AngleController) -> Self {
        let angle = controller.display_angle();
        let (sin, cos) = exact_pair(angle);
        Self {
            angle,
            degrees: angle.to_degrees().round() as i32,
            locked: controller.is_locked(),
            sin,
            cos,
        }
    }

    /// Heading line, e.g. `θ = 45°`
    pub fn angle_label(&self) -> String {
        format!("θ = {}°", self.degrees)
    }

    /// Badge shown next to the heading while locked
    pub fn lock_label(&self) -> Option<&'static str> {
        self.locked.then_some("LOCKED")
    }

    pub fn sin_label(&self) -> String {
        format!("sinθ = {}", self.sin)
    }

    pub fn cos_label(&self) -> String {
        format!("cosθ = {}", self.cos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{RotationState, TickInput, Tuning};
    use std::f64::consts::PI;

    #[test]
    fn test_readout_at_rest() {
        let readout = Readout::from_controller(&AngleController::default());
        assert_eq!(readout.angle_label(), "θ = 0°");
        assert_eq!(readout.lock_label(), Some("LOCKED"));
        assert_eq!(readout.sin_label(), "sinθ = 0");
        assert_eq!(readout.cos_label(), "cosθ = 1");
    }

    #[test]
    fn test_readout_locked_at_negative_quarter() {
        let state = RotationState::at(-PI / 4.0).unwrap();
        let controller = AngleController::with_state(state, Tuning::default());
        let readout = Readout::from_controller(&controller);
        assert_eq!(readout.degrees, 315);
        assert_eq!(readout.sin.to_string(), "-√2/2");
        assert_eq!(readout.cos.to_string(), "√2/2");
    }

    #[test]
    fn test_readout_while_moving() {
        let mut controller = AngleController::default();
        for _ in 0..4 {
            controller.step(TickInput::right());
        }
        let readout = Readout::from_controller(&controller);
        assert!(!readout.locked);
        assert_eq!(readout.lock_label(), None);
        assert_eq!(readout.degrees, 11);
        // sin(0.2) = 0.1987
        assert_eq!(readout.sin.to_string(), "0.20");
    }
}
