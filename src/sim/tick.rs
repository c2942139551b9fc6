//! Fixed timestep rotation tick
//!
//! One call per rendered frame. Held input rotates the point freely; on
//! release the point eases toward the nearest special angle and locks there.

use super::special::closest_special_angle;
use super::state::RotationState;
use crate::consts::*;
use crate::error::SettingsError;

/// Direction requests sampled at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Decrease the angle
    pub left: bool,
    /// Increase the angle; wins over `left` when both are held
    pub right: bool,
}

impl TickInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn left() -> Self {
        Self {
            left: true,
            right: false,
        }
    }

    pub fn right() -> Self {
        Self {
            left: false,
            right: true,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.left && !self.right
    }
}

/// Speeds driving the tick
///
/// Only constructible through [`Tuning::new`], so every tuning in use keeps
/// the angle bounded and the snap convergent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Radians per tick while a direction is held
    rotate_speed: f64,
    /// Fraction of the remaining distance closed per idle tick
    snap_speed: f64,
}

impl Tuning {
    /// Validated speeds
    ///
    /// `rotate_speed` must lie in (0, MAX_ROTATE_SPEED]; re-centering removes
    /// one 100-turn step per tick and cannot keep up with anything faster.
    /// `snap_speed` must lie in (0, 1]; outside that the snap never converges.
    pub fn new(rotate_speed: f64, snap_speed: f64) -> Result<Self, SettingsError> {
        if !rotate_speed.is_finite()
            || rotate_speed <= 0.0
            || rotate_speed > MAX_ROTATE_SPEED
        {
            return Err(SettingsError::Invalid {
                field: "rotate_speed",
                value: rotate_speed,
            });
        }
        if !snap_speed.is_finite() || snap_speed <= 0.0 || snap_speed > 1.0 {
            return Err(SettingsError::Invalid {
                field: "snap_speed",
                value: snap_speed,
            });
        }
        Ok(Self {
            rotate_speed,
            snap_speed,
        })
    }

    pub fn rotate_speed(&self) -> f64 {
        self.rotate_speed
    }

    pub fn snap_speed(&self) -> f64 {
        self.snap_speed
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rotate_speed: ROTATE_SPEED,
            snap_speed: SNAP_SPEED,
        }
    }
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Advance the rotation state by one tick
pub fn tick(state: &mut RotationState, input: &TickInput, tuning: &Tuning) {
    if input.right {
        state.angle += tuning.rotate_speed;
        state.is_moving = true;
    } else if input.left {
        state.angle -= tuning.rotate_speed;
        state.is_moving = true;
    } else {
        // Input just ceased: pick the snap target once per release
        if state.is_moving {
            state.target_angle = closest_special_angle(state.angle);
            state.is_moving = false;
        }

        if (state.angle - state.target_angle).abs() > SNAP_EPSILON {
            state.angle = lerp(state.angle, state.target_angle, tuning.snap_speed);
        } else if state.angle != state.target_angle {
            state.angle = state.target_angle;
            log::info!("Locked at {:.4} rad", state.target_angle);
        }
    }

    // Keep the angle bounded; shifting by whole turns preserves direction
    if state.is_moving {
        if state.angle > WRAP_LIMIT {
            state.angle -= WRAP_LIMIT;
            log::debug!("Re-centered angle to {:.4}", state.angle);
        } else if state.angle < -WRAP_LIMIT {
            state.angle += WRAP_LIMIT;
            log::debug!("Re-centered angle to {:.4}", state.angle);
        }
    }
}
