//! Easing curves.

use serde::{Deserialize, Serialize};

/// Overshoot used by [`Easing::BackOut`].
const BACK_OVERSHOOT: f32 = 1.70158;

/// Maps normalized progress `t` in [0, 1] to an eased fraction.
///
/// All curves satisfy `apply(0) == 0` and `apply(1) == 1`. In config files
/// curves are named `linear`, `power1.out`, `power3.out` and `back.out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed.
    #[serde(rename = "linear")]
    Linear,
    /// Quadratic ease-out (`power1.out`).
    #[default]
    #[serde(rename = "power1.out")]
    Power1Out,
    /// Quartic ease-out (`power3.out`).
    #[serde(rename = "power3.out")]
    Power3Out,
    /// Ease-out that overshoots the target before settling (`back.out`).
    #[serde(rename = "back.out")]
    BackOut,
}

impl Easing {
    /// Apply the curve to `t` (clamped to [0, 1]).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - (1.0 - t).powi(2),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::BackOut => {
                let c1 = BACK_OVERSHOOT;
                let c3 = c1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + c1 * u.powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::Power1Out,
        Easing::Power3Out,
        Easing::BackOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_out_curves_lead_linear() {
        assert!(Easing::Power1Out.apply(0.5) > 0.5);
        assert!(Easing::Power3Out.apply(0.5) > Easing::Power1Out.apply(0.5));
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut.apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }
}
