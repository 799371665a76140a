#![forbid(unsafe_code)]

//! One-shot entrance effects for newly typed characters.
//!
//! This crate is the animation side of `authui`:
//! - [`Easing`] - progress curves, including the back-out overshoot the
//!   entrance effect uses
//! - [`AnimationClock`] - frame-rate independent time source with a
//!   speed multiplier
//! - [`Entrance`] - the per-character entrance timeline: starts only for
//!   new characters, fires its completion callback exactly once, and is
//!   cancelable so a removed node can never receive a late callback
//!
//! # Example
//! ```
//! use authui_fx::{Entrance, EntranceFrame};
//!
//! // Settled characters do not animate.
//! assert!(Entrance::start(false, || {}).is_none());
//!
//! let mut fx = Entrance::start(true, || {}).expect("new characters animate");
//! let frame = fx.advance(0.1);
//! assert!(frame.opacity > 0.0 && frame.opacity < 1.0);
//!
//! fx.advance(1.0);
//! assert!(fx.is_finished());
//! assert_eq!(fx.frame(), EntranceFrame::IDENTITY);
//! ```

pub mod clock;
pub mod easing;
pub mod entrance;

pub use clock::AnimationClock;
pub use easing::Easing;
pub use entrance::{
    DURATION_SECONDS, Entrance, EntranceFrame, OVERSHOOT, START_OPACITY, START_SCALE,
    START_Y_OFFSET,
};
