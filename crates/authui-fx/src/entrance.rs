#![forbid(unsafe_code)]

//! The per-character entrance timeline.
//!
//! A newly typed character drops in from below while fading and scaling
//! up, with a back-out overshoot so it settles with a small bounce. The
//! timeline is one-shot: it plays once, fires its completion callback
//! exactly once, and is never replayed for a settled character.
//!
//! The rendering layer owns the visual node; this type only produces
//! [`EntranceFrame`] poses for it. When the node is removed, call
//! [`Entrance::cancel`] - after that the completion callback is
//! guaranteed not to fire, so teardown can never race a late callback
//! into a defunct node.

use crate::easing::Easing;
use std::fmt;

/// Vertical offset, in pixels, a character starts below its resting
/// position.
pub const START_Y_OFFSET: f64 = 60.0;
/// Opacity a character starts at.
pub const START_OPACITY: f64 = 0.0;
/// Scale a character starts at.
pub const START_SCALE: f64 = 0.8;
/// Length of the entrance effect in seconds.
pub const DURATION_SECONDS: f64 = 0.4;
/// Back-out overshoot of the entrance curve.
pub const OVERSHOOT: f64 = 1.7;

/// One sampled pose of an entering character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    /// Offset below the resting position, in pixels.
    pub y: f64,
    /// Opacity from 0.0 to 1.0.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl EntranceFrame {
    /// The resting pose of a settled character.
    pub const IDENTITY: Self = Self {
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    /// Pose at an eased progress value. The overshoot swings `y` and
    /// `scale` past their targets; opacity is clamped to the unit range.
    fn at(eased: f64) -> Self {
        Self {
            y: START_Y_OFFSET * (1.0 - eased),
            opacity: (START_OPACITY + (1.0 - START_OPACITY) * eased).clamp(0.0, 1.0),
            scale: START_SCALE + (1.0 - START_SCALE) * eased,
        }
    }
}

/// A one-shot entrance effect for a single character node.
///
/// Created by [`Entrance::start`], advanced by the caller's clock,
/// canceled on node teardown.
pub struct Entrance {
    elapsed: f64,
    easing: Easing,
    on_complete: Option<Box<dyn FnOnce()>>,
    canceled: bool,
}

impl fmt::Debug for Entrance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entrance")
            .field("elapsed", &self.elapsed)
            .field("canceled", &self.canceled)
            .field("pending_callback", &self.on_complete.is_some())
            .finish()
    }
}

impl Entrance {
    /// Start the entrance effect for a character, or don't.
    ///
    /// Returns `None` when `is_new` is false: settled characters never
    /// animate, and the caller renders them at rest. `on_complete` runs
    /// at most once, from inside the [`Entrance::advance`] call that
    /// crosses the end of the timeline.
    #[must_use]
    pub fn start(is_new: bool, on_complete: impl FnOnce() + 'static) -> Option<Self> {
        if !is_new {
            return None;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(duration = DURATION_SECONDS, "entrance started");

        Some(Self {
            elapsed: 0.0,
            easing: Easing::BackOut {
                overshoot: OVERSHOOT,
            },
            on_complete: Some(Box::new(on_complete)),
            canceled: false,
        })
    }

    /// Advance the timeline by `delta_seconds` and sample the pose.
    ///
    /// The completion callback fires from the call that first reaches
    /// the end of the timeline. Advancing a finished or canceled effect
    /// is a no-op returning [`EntranceFrame::IDENTITY`].
    pub fn advance(&mut self, delta_seconds: f64) -> EntranceFrame {
        if self.canceled {
            return EntranceFrame::IDENTITY;
        }

        self.elapsed += delta_seconds.max(0.0);
        if self.elapsed >= DURATION_SECONDS
            && let Some(callback) = self.on_complete.take()
        {
            #[cfg(feature = "tracing")]
            tracing::debug!("entrance complete");
            callback();
        }
        self.frame()
    }

    /// Sample the current pose without advancing.
    #[must_use]
    pub fn frame(&self) -> EntranceFrame {
        if self.canceled || self.elapsed >= DURATION_SECONDS {
            return EntranceFrame::IDENTITY;
        }
        EntranceFrame::at(self.easing.apply(self.elapsed / DURATION_SECONDS))
    }

    /// Whether the timeline has played to the end or been canceled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.canceled || self.elapsed >= DURATION_SECONDS
    }

    /// Halt the effect immediately.
    ///
    /// The completion callback is dropped without running; no callback
    /// can fire after this returns. Call on node teardown.
    pub fn cancel(&mut self) {
        #[cfg(feature = "tracing")]
        if !self.canceled {
            tracing::debug!(elapsed = self.elapsed, "entrance canceled");
        }

        self.canceled = true;
        self.on_complete = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce()) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        (count, move || seen.set(seen.get() + 1))
    }

    #[test]
    fn settled_characters_do_not_start() {
        assert!(Entrance::start(false, || {}).is_none());
    }

    #[test]
    fn starts_at_the_entrance_pose() {
        let fx = Entrance::start(true, || {}).unwrap();
        let frame = fx.frame();
        assert!((frame.y - START_Y_OFFSET).abs() < 1e-9);
        assert!((frame.opacity - START_OPACITY).abs() < 1e-9);
        assert!((frame.scale - START_SCALE).abs() < 1e-9);
    }

    #[test]
    fn settles_at_identity() {
        let mut fx = Entrance::start(true, || {}).unwrap();
        let frame = fx.advance(DURATION_SECONDS);
        assert_eq!(frame, EntranceFrame::IDENTITY);
        assert!(fx.is_finished());
    }

    #[test]
    fn completion_fires_exactly_once() {
        let (count, on_complete) = counter();
        let mut fx = Entrance::start(true, on_complete).unwrap();
        fx.advance(0.1);
        assert_eq!(count.get(), 0);
        fx.advance(DURATION_SECONDS);
        assert_eq!(count.get(), 1);
        fx.advance(DURATION_SECONDS);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn cancel_suppresses_the_callback() {
        let (count, on_complete) = counter();
        let mut fx = Entrance::start(true, on_complete).unwrap();
        fx.advance(0.1);
        fx.cancel();
        fx.advance(DURATION_SECONDS);
        fx.advance(DURATION_SECONDS);
        assert_eq!(count.get(), 0);
        assert!(fx.is_finished());
        assert_eq!(fx.frame(), EntranceFrame::IDENTITY);
    }

    #[test]
    fn cancel_after_completion_is_harmless() {
        let (count, on_complete) = counter();
        let mut fx = Entrance::start(true, on_complete).unwrap();
        fx.advance(DURATION_SECONDS);
        fx.cancel();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn overshoot_swings_past_the_resting_pose() {
        let mut fx = Entrance::start(true, || {}).unwrap();
        let mut min_y = f64::MAX;
        let mut max_scale = f64::MIN;
        for _ in 0..40 {
            let frame = fx.advance(0.01);
            min_y = min_y.min(frame.y);
            max_scale = max_scale.max(frame.scale);
        }
        // The back-out curve carries y above its target (negative
        // offset) and scale past 1.0 before settling.
        assert!(min_y < 0.0, "min_y was {min_y}");
        assert!(max_scale > 1.0, "max_scale was {max_scale}");
    }

    #[test]
    fn opacity_stays_clamped_despite_the_overshoot() {
        let mut fx = Entrance::start(true, || {}).unwrap();
        for _ in 0..50 {
            let frame = fx.advance(0.01);
            assert!((0.0..=1.0).contains(&frame.opacity));
        }
    }

    #[test]
    fn negative_deltas_do_not_rewind() {
        let mut fx = Entrance::start(true, || {}).unwrap();
        fx.advance(0.2);
        let before = fx.frame();
        let after = fx.advance(-5.0);
        assert_eq!(before, after);
    }
}
