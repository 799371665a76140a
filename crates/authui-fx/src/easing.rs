#![forbid(unsafe_code)]

//! Easing curves for entrance effects.

/// Progress curve applied to normalized animation time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation: `t` (no easing).
    #[default]
    Linear,
    /// Slow start, accelerating: `t³`
    EaseIn,
    /// Slow end, decelerating: `1 - (1-t)³`
    EaseOut,
    /// Smooth S-curve: slow start and end.
    EaseInOut,
    /// Overshoot past the target, then settle back.
    /// **WARNING: output can go below 0 and above 1.**
    BackOut {
        /// How far past the target the curve swings. The entrance
        /// effect uses 1.7; 1.70158 is the classic ~10% overshoot.
        overshoot: f64,
    },
}

impl Easing {
    /// Apply the easing function to a progress value.
    ///
    /// `t` is clamped to 0.0-1.0 internally. Every curve maps 0 to 0
    /// and 1 to 1, but `BackOut` swings outside the unit range in
    /// between.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            // easeOutBack: 1 + c3*(t-1)^3 + c1*(t-1)^2
            Self::BackOut { overshoot } => {
                let c1 = *overshoot;
                let c3 = c1 + 1.0;
                let shifted = t - 1.0;
                1.0 + c3 * shifted * shifted * shifted + c1 * shifted * shifted
            }
        }
    }

    /// Check if this easing can produce values outside 0.0-1.0.
    #[must_use]
    pub fn can_overshoot(&self) -> bool {
        matches!(self, Self::BackOut { .. })
    }
}
