//! Deterministic rotation module
//!
//! The whole angle state machine lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Input sampled once at the start of each tick
//! - No rendering or platform dependencies

pub mod controller;
pub mod special;
pub mod state;
pub mod tick;

pub use controller::AngleController;
pub use special::{SPECIAL_ANGLES, closest_special_angle, nearest_special};
pub use state::RotationState;
pub use tick::{TickInput, Tuning, tick};
