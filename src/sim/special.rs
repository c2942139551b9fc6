//! Special angles and turn-aware snapping
//!
//! The rotating point snaps to multiples of π/6 and π/4. The list spans one
//! full turn and includes both 0 and 2π, so a point just below a full turn
//! still finds a neighbour on its own side.

use std::f64::consts::{PI, TAU};

use crate::normalize_angle;

/// The 17 canonical snap angles, in ascending order
pub const SPECIAL_ANGLES: [f64; 17] = [
    0.0,
    PI / 6.0,
    PI / 4.0,
    PI / 3.0,
    PI / 2.0,
    2.0 * PI / 3.0,
    3.0 * PI / 4.0,
    5.0 * PI / 6.0,
    PI,
    7.0 * PI / 6.0,
    5.0 * PI / 4.0,
    4.0 * PI / 3.0,
    3.0 * PI / 2.0,
    5.0 * PI / 3.0,
    7.0 * PI / 4.0,
    11.0 * PI / 6.0,
    TAU,
];

/// Circular distance between two angles already in [0, 2π]
#[inline]
fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(TAU - d)
}

/// Find the special angle nearest to a normalized angle
///
/// Ties keep the earlier entry in [`SPECIAL_ANGLES`].
pub fn nearest_special(normalized: f64) -> f64 {
    let mut closest_dist = f64::INFINITY;
    let mut best = 0.0;

    for &sa in &SPECIAL_ANGLES {
        let dist = circular_distance(normalized, sa);
        if dist < closest_dist {
            closest_dist = dist;
            best = sa;
        }
    }

    best
}

/// Find the absolute snap target nearest to `current`
///
/// The result lies within half a turn of `current` and is congruent (mod 2π)
/// to one of the special angles. It is never pulled back into [0, 2π), so a
/// point that has wound several turns snaps locally instead of spinning back.
pub fn closest_special_angle(current: f64) -> f64 {
    if !current.is_finite() {
        log::warn!("Non-finite angle {} passed to snap, clamping to 0", current);
        return 0.0;
    }

    let best = nearest_special(normalize_angle(current));

    let base = (current / TAU).floor() * TAU + best;
    let above = base + TAU;
    let below = base - TAU;

    let d_base = (current - base).abs();
    let d_above = (current - above).abs();
    let d_below = (current - below).abs();

    let target = if d_base <= d_above && d_base <= d_below {
        base
    } else if d_above <= d_base && d_above <= d_below {
        above
    } else {
        below
    };

    log::debug!("Snap target for {:.4}: {:.4}", current, target);
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
    }

    #[test]
    fn test_special_angles_ordered() {
        assert_eq!(SPECIAL_ANGLES.len(), 17);
        assert!(SPECIAL_ANGLES.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(SPECIAL_ANGLES[0], 0.0);
        assert_eq!(SPECIAL_ANGLES[16], TAU);
    }

    #[test]
    fn test_snap_near_quarter_pi() {
        assert_close(closest_special_angle(0.80), PI / 4.0);
    }

    #[test]
    fn test_snap_keeps_turn_count() {
        assert_close(closest_special_angle(TAU * 3.0 + 0.05), TAU * 3.0);
    }

    #[test]
    fn test_snap_just_below_full_turn_goes_forward() {
        // 2π - 0.05 is nearest to 2π, not back to 0
        assert_close(closest_special_angle(TAU - 0.05), TAU);
        assert_close(closest_special_angle(TAU * 2.0 - 0.05), TAU * 2.0);
    }

    #[test]
    fn test_snap_negative_angles() {
        assert_close(closest_special_angle(-0.05), 0.0);
        assert_close(closest_special_angle(-PI / 2.0 - 0.03), -PI / 2.0);
        assert_close(closest_special_angle(-TAU * 2.0 + 0.52), -TAU * 2.0 + PI / 6.0);
    }

    #[test]
    fn test_nearest_special_tie_prefers_earlier() {
        assert_close(nearest_special(0.6), PI / 6.0);
        assert_close(nearest_special(0.7), PI / 4.0);
        // 0 and 2π are the same direction; 0 comes first
        assert_eq!(nearest_special(TAU - 1e-12), 0.0);
    }

    #[test]
    fn test_non_finite_clamps_to_zero() {
        assert_eq!(closest_special_angle(f64::NAN), 0.0);
        assert_eq!(closest_special_angle(f64::INFINITY), 0.0);
        assert_eq!(closest_special_angle(f64::NEG_INFINITY), 0.0);
    }
}
