//! Rendering geometry
//!
//! The renderer only reads controller state; it never mutates it.

pub mod palette;
pub mod shapes;

pub use shapes::{Layers, Scene};
