//! Exact sine/cosine values for the readout
//!
//! Values close to 0, ±1/2, ±√2/2, ±√3/2 or ±1 are shown symbolically;
//! anything else is shown with two decimals.

use std::fmt;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::consts::TRIG_EPSILON;

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// A displayable trig value: either a bare value or a fraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrigValue {
    pub numerator: String,
    /// Empty unless `is_fraction`
    pub denominator: String,
    pub is_fraction: bool,
}

impl TrigValue {
    pub fn bare(value: impl Into<String>) -> Self {
        Self {
            numerator: value.into(),
            denominator: String::new(),
            is_fraction: false,
        }
    }

    pub fn fraction(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
            is_fraction: true,
        }
    }
}

impl fmt::Display for TrigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fraction {
            write!(f, "{}/{}", self.numerator, self.denominator)
        } else {
            write!(f, "{}", self.numerator)
        }
    }
}

/// Exact value table, checked in order (first match wins)
const EXACT_TABLE: [(f64, &str, &str); 9] = [
    (0.0, "0", ""),
    (0.5, "1", "2"),
    (-0.5, "-1", "2"),
    (1.0, "1", ""),
    (-1.0, "-1", ""),
    (FRAC_1_SQRT_2, "√2", "2"),
    (-FRAC_1_SQRT_2, "-√2", "2"),
    (HALF_SQRT_3, "√3", "2"),
    (-HALF_SQRT_3, "-√3", "2"),
];

/// Exact value of sin(angle) or cos(angle) when it is a known special value
pub fn exact_value(angle: f64, want_sine: bool) -> TrigValue {
    let value = if want_sine { angle.sin() } else { angle.cos() };

    for (exact, numerator, denominator) in EXACT_TABLE {
        if (value - exact).abs() < TRIG_EPSILON {
            return if denominator.is_empty() {
                TrigValue::bare(numerator)
            } else {
                TrigValue::fraction(numerator, denominator)
            };
        }
    }

    TrigValue::bare(format!("{:.2}", value))
}

/// Both values for one angle: (sin, cos)
pub fn exact_pair(angle: f64) -> (TrigValue, TrigValue) {
    (exact_value(angle, true), exact_value(angle, false))
}
