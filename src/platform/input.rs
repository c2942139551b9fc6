//! Keyboard and pointer input folded into a tick input
//!
//! Arrow keys and on-screen buttons are OR-ed per direction. Sampling happens
//! once per frame; nothing is queued between frames.

use glam::DVec2;

use crate::sim::TickInput;

/// Axis-aligned button rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HitBox {
    pub origin: DVec2,
    pub size: DVec2,
}

impl HitBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(w, h),
        }
    }

    /// Strict containment: a pointer on the edge does not count
    pub fn contains(&self, point: DVec2) -> bool {
        let max = self.origin + self.size;
        point.x > self.origin.x && point.x < max.x && point.y > self.origin.y && point.y < max.y
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size * 0.5
    }
}

/// The two rotate buttons
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlButtons {
    pub left: HitBox,
    pub right: HitBox,
}

/// Raw input state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub left_key: bool,
    pub right_key: bool,
    /// Pointer position while a button/touch is held
    pub pointer: Option<DVec2>,
}

impl InputSnapshot {
    pub fn left_active(&self, buttons: &ControlButtons) -> bool {
        self.left_key || self.pointer.is_some_and(|p| buttons.left.contains(p))
    }

    pub fn right_active(&self, buttons: &ControlButtons) -> bool {
        self.right_key || self.pointer.is_some_and(|p| buttons.right.contains(p))
    }

    pub fn to_tick_input(&self, buttons: &ControlButtons) -> TickInput {
        TickInput {
            left: self.left_active(buttons),
            right: self.right_active(buttons),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buttons() -> ControlButtons {
        ControlButtons {
            left: HitBox::new(20.0, 500.0, 80.0, 80.0),
            right: HitBox::new(700.0, 500.0, 80.0, 80.0),
        }
    }

    #[test]
    fn test_hitbox_edges_excluded() {
        let hit = HitBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(hit.contains(DVec2::new(5.0, 5.0)));
        assert!(!hit.contains(DVec2::new(0.0, 5.0)));
        assert!(!hit.contains(DVec2::new(10.0, 5.0)));
        assert!(!hit.contains(DVec2::new(5.0, 10.0)));
        assert_eq!(hit.center(), DVec2::new(5.0, 5.0));
    }

    #[test]
    fn test_keys_only() {
        let snapshot = InputSnapshot {
            left_key: true,
            ..Default::default()
        };
        assert_eq!(snapshot.to_tick_input(&buttons()), TickInput::left());
    }

    #[test]
    fn test_pointer_on_button() {
        let snapshot = InputSnapshot {
            pointer: Some(DVec2::new(740.0, 540.0)),
            ..Default::default()
        };
        assert_eq!(snapshot.to_tick_input(&buttons()), TickInput::right());
    }

    #[test]
    fn test_pointer_off_buttons_is_idle() {
        let snapshot = InputSnapshot {
            pointer: Some(DVec2::new(400.0, 300.0)),
            ..Default::default()
        };
        assert!(snapshot.to_tick_input(&buttons()).is_idle());
    }

    #[test]
    fn test_key_and_button_combine() {
        let snapshot = InputSnapshot {
            left_key: true,
            right_key: false,
            pointer: Some(DVec2::new(740.0, 540.0)),
        };
        let input = snapshot.to_tick_input(&buttons());
        assert!(input.left && input.right);
    }
}
