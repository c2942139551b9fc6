//! Angle controller: rotation state plus the tuning that drives it

use super::state::RotationState;
use super::tick::{TickInput, Tuning, tick};

/// Owns the rotation state machine for one unit circle
#[derive(Debug, Clone, Default)]
pub struct AngleController {
    state: RotationState,
    tuning: Tuning,
}

impl AngleController {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: RotationState::new(),
            tuning,
        }
    }

    /// Resume from an existing state (used by tests and demos)
    pub fn with_state(state: RotationState, tuning: Tuning) -> Self {
        Self { state, tuning }
    }

    /// Advance by exactly one tick
    pub fn step(&mut self, input: TickInput) {
        tick(&mut self.state, &input, &self.tuning);
    }

    pub fn current_angle(&self) -> f64 {
        self.state.current_angle()
    }

    pub fn target_angle(&self) -> f64 {
        self.state.target_angle()
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    pub fn is_moving(&self) -> bool {
        self.state.is_moving()
    }

    pub fn display_angle(&self) -> f64 {
        self.state.display_angle()
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Swap in new speeds without disturbing the current motion
    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.tuning = tuning;
    }

    /// Back to rest at angle 0
    pub fn reset(&mut self) {
        self.state = RotationState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_controller_hold_release_lock() {
        let mut controller = AngleController::default();
        assert!(controller.is_locked());

        // 0.05 * 21 = 1.05, nearest special angle is π/3
        for _ in 0..21 {
            controller.step(TickInput::right());
        }
        assert!(controller.is_moving());
        assert!(!controller.is_locked());

        for _ in 0..100 {
            controller.step(TickInput::idle());
        }
        assert!(controller.is_locked());
        assert_eq!(controller.current_angle(), controller.target_angle());
        assert!((controller.display_angle() - PI / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_controller_custom_tuning() {
        let mut controller = AngleController::new(Tuning::new(0.1, 0.5).unwrap());
        controller.step(TickInput::left());
        assert!((controller.current_angle() + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_controller_only_takes_convergent_tuning() {
        assert!(Tuning::new(0.05, 2.5).is_err());

        let mut controller = AngleController::new(Tuning::new(0.05, 1.0).unwrap());
        for _ in 0..5 {
            controller.step(TickInput::right());
        }
        for _ in 0..200 {
            controller.step(TickInput::idle());
        }
        assert!(controller.is_locked());
        assert_eq!(controller.current_angle(), 0.0);
    }

    #[test]
    fn test_controller_reset() {
        let mut controller = AngleController::default();
        controller.step(TickInput::right());
        controller.reset();
        assert_eq!(controller.state(), &RotationState::new());
    }
}
