#![forbid(unsafe_code)]

//! Text state and measurement for animated sign-in screens.
//!
//! This crate provides the text-side building blocks of `authui`:
//! - [`CharState`] - per-position render state of one on-screen character
//! - [`Reconciler`] - classifies which characters of an input field are
//!   new since the last render, so only those play an entrance effect
//! - [`display_states`] - placeholder and non-breaking-space handling
//!   for the rendered character row
//! - [`estimate_width`] / [`WidthCache`] - approximate text width from a
//!   static per-character table
//! - [`fit_font_size`] - shrink a greeting's font size until it fits the
//!   viewport
//!
//! # Example
//! ```
//! use authui_text::{Reconciler, estimate_width, fit_font_size};
//!
//! // A keystroke turns "sam" into "sama": exactly one character is new.
//! let mut reconciler = Reconciler::new();
//! let before = reconciler.reconcile("sam", "", &[]);
//! let after = reconciler.reconcile("sama", "sam", &before);
//! assert!(after[3].is_new);
//! assert!(!after[0].is_new);
//!
//! // Fit "Welcome, sama!" into a 200px viewport.
//! let size = fit_font_size("Welcome, sama", 200.0, 48.0, 16.0, estimate_width);
//! assert!(size >= 16.0 && size <= 48.0);
//! ```

pub mod char_state;
pub mod fit;
pub mod metrics;

pub use char_state::{CharState, PLACEHOLDER, Reconciler, display_states};
pub use fit::{VIEWPORT_MARGIN, fit_font_size, has_wrapped};
pub use metrics::{
    CacheStats, DEFAULT_CHAR_WIDTH, DEFAULT_WIDTH_CACHE_CAPACITY, WidthCache, estimate_width,
    relative_width,
};
