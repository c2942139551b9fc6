//! Colors for the circle and readout, as CSS color strings

pub const BACKGROUND: &str = "rgb(10, 10, 30)";
pub const AXES: &str = "rgb(60, 60, 90)";
pub const CIRCLE: &str = "rgb(0, 255, 255)";
pub const SPOKE: &str = "rgba(255, 255, 255, 0.31)";
pub const RADIUS: &str = "rgb(255, 255, 0)";
pub const POINT_FREE: &str = "rgb(255, 50, 50)";
pub const POINT_LOCKED: &str = "rgb(255, 255, 0)";
pub const LOCK_RING: &str = "rgba(255, 255, 0, 0.4)";
pub const SINE: &str = "rgb(0, 255, 0)";
pub const SINE_GUIDE: &str = "rgba(0, 255, 0, 0.6)";
pub const COSINE: &str = "rgb(255, 0, 255)";
pub const COSINE_GUIDE: &str = "rgba(255, 0, 255, 0.6)";
pub const LOCK_BADGE: &str = "rgb(255, 200, 0)";
pub const TEXT: &str = "rgb(255, 255, 255)";

/// Button fill, brighter while held
pub fn button_fill(active: bool) -> &'static str {
    if active {
        "rgba(255, 255, 255, 0.59)"
    } else {
        "rgba(255, 255, 255, 0.2)"
    }
}
