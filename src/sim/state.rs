//! Rotation state for the unit circle
//!
//! Owned by the controller and mutated once per tick. Rendering code only
//! reads it through the accessors below.

use crate::consts::*;
use crate::error::StateError;
use crate::normalize_angle;

/// Display grid steps in one full turn
const STEPS_PER_TURN: f64 = 24.0;

/// Current angle, snap target and whether input is driving the angle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    /// Current angle in radians (unbounded, re-centered every 100 turns)
    pub(crate) angle: f64,
    /// Most recent snap destination (meaningful while not moving)
    pub(crate) target_angle: f64,
    /// True while direct input changed the angle this tick
    pub(crate) is_moving: bool,
}

impl RotationState {
    /// Fresh state at rest on angle 0
    pub fn new() -> Self {
        Self::default()
    }

    /// State resting at `angle`, already locked
    pub fn at(angle: f64) -> Result<Self, StateError> {
        if !angle.is_finite() {
            return Err(StateError::NonFinite(angle));
        }
        Ok(Self {
            angle,
            target_angle: angle,
            is_moving: false,
        })
    }

    /// State that has just been released at `angle` while snapping toward `target`
    pub fn snapping(angle: f64, target: f64) -> Result<Self, StateError> {
        for value in [angle, target] {
            if !value.is_finite() {
                return Err(StateError::NonFinite(value));
            }
        }
        Ok(Self {
            angle,
            target_angle: target,
            is_moving: false,
        })
    }

    pub fn current_angle(&self) -> f64 {
        self.angle
    }

    pub fn target_angle(&self) -> f64 {
        self.target_angle
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// Resting on the snap target (derived, never stored)
    pub fn is_locked(&self) -> bool {
        !self.is_moving && (self.angle - self.target_angle).abs() < LOCK_EPSILON
    }

    /// Angle to show in the readout, in [0, 2π)
    ///
    /// Uses the target once locked, otherwise the live angle. Values within
    /// [`DISPLAY_EPSILON`] of a multiple of π/12 are pulled onto it. A pull
    /// onto 2π folds back to 0.
    pub fn display_angle(&self) -> f64 {
        let raw = if self.is_locked() {
            self.target_angle
        } else {
            self.angle
        };

        let display = normalize_angle(raw);
        let steps = (display / DISPLAY_STEP).round();
        if (display - steps * DISPLAY_STEP).abs() >= DISPLAY_EPSILON {
            return display;
        }
        if steps >= STEPS_PER_TURN {
            0.0
        } else {
            steps * DISPLAY_STEP
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_new_state_is_locked_at_zero() {
        let state = RotationState::new();
        assert!(state.is_locked());
        assert_eq!(state.current_angle(), 0.0);
        assert_eq!(state.display_angle(), 0.0);
    }

    #[test]
    fn test_at_rejects_non_finite() {
        assert!(matches!(
            RotationState::at(f64::NAN),
            Err(StateError::NonFinite(_))
        ));
        assert_eq!(
            RotationState::at(f64::INFINITY),
            Err(StateError::NonFinite(f64::INFINITY))
        );
        assert!(RotationState::snapping(0.0, f64::NEG_INFINITY).is_err());
        assert!(RotationState::at(1.0).is_ok());
    }

    #[test]
    fn test_locked_requires_rest_and_proximity() {
        let state = RotationState::snapping(PI / 4.0 + 0.0005, PI / 4.0).unwrap();
        assert!(state.is_locked());

        let state = RotationState::snapping(PI / 4.0 + 0.01, PI / 4.0).unwrap();
        assert!(!state.is_locked());

        let mut state = RotationState::at(PI / 4.0).unwrap();
        state.is_moving = true;
        assert!(!state.is_locked());
    }

    #[test]
    fn test_display_angle_uses_target_when_locked() {
        let state = RotationState::snapping(TAU * 3.0 + PI / 3.0 + 0.0005, TAU * 3.0 + PI / 3.0)
            .unwrap();
        assert!((state.display_angle() - PI / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_display_angle_normalizes_negative() {
        let state = RotationState::at(-PI / 2.0).unwrap();
        assert!((state.display_angle() - 3.0 * PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_angle_dejitter() {
        let state = RotationState::snapping(PI / 12.0 + 0.0008, 0.0).unwrap();
        assert_eq!(state.display_angle(), DISPLAY_STEP);

        // Far from the grid: shown as-is
        let state = RotationState::snapping(0.2, 0.0).unwrap();
        assert!((state.display_angle() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_display_angle_folds_full_turn() {
        let state = RotationState::snapping(-0.0005, 1.0).unwrap();
        assert_eq!(state.display_angle(), 0.0);
    }
}
