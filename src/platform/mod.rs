//! Platform abstraction layer
//!
//! Turns browser/native input state into simulation input.

pub mod input;

pub use input::{ControlButtons, HitBox, InputSnapshot};
