use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized transition progress.
///
/// Every curve maps `0.0 → 0.0` and `1.0 → 1.0`. `Spring` swings outside
/// `[0, 1]` in between; the others stay inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseOutBounce,
    Spring,
}

impl Curve {
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => t * (2.0 - t),
            Curve::EaseInOut => {
                if t <= 0.5 {
                    2.0 * t * t
                } else {
                    -2.0 * t * t + 4.0 * t - 1.0
                }
            }
            Curve::EaseOutBounce => bounce_out(t),
            Curve::Spring => (1.0 - t) * (6.0 * PI * t).sin() + t,
        }
    }
}

/// Three decaying bounces settling on `1.0`.
fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984_375
    }
}
