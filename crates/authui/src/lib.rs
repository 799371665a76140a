#![forbid(unsafe_code)]

//! Public facade for the authui building blocks.
//!
//! This crate re-exports the stable surface of the member crates and
//! offers a lightweight prelude. The pieces wire together around one
//! loop: a keystroke produces a new input value, the reconciler flags
//! which characters are new, and only those play an entrance effect.
//!
//! # Example
//! ```
//! use authui::prelude::*;
//!
//! let mut reconciler = Reconciler::new();
//! let mut states = reconciler.reconcile("sam", "", &[]);
//!
//! // The rendering layer starts an entrance per new character.
//! let mut effects: Vec<Entrance> = states
//!     .iter()
//!     .filter_map(|s| Entrance::start(s.is_new, || {}))
//!     .collect();
//! assert_eq!(effects.len(), 3);
//!
//! // A resize pass picks the font size for the greeting.
//! let size = fit_font_size("Welcome, sam", 400.0, 48.0, 16.0, estimate_width);
//! assert_eq!(size, 48.0);
//!
//! // A failed submit renders copy from the catalog.
//! let def = lookup_str("INVALID_PASSWORD");
//! assert_eq!(def.title, "Incorrect password");
//!
//! // Teardown cancels in-flight effects before nodes go away.
//! for fx in &mut effects {
//!     fx.cancel();
//! }
//! # states.clear();
//! ```

// --- Text re-exports -------------------------------------------------------

pub use authui_text::{
    CharState, PLACEHOLDER, Reconciler, WidthCache, display_states, estimate_width, fit_font_size,
    has_wrapped, relative_width,
};

// --- Effect re-exports -----------------------------------------------------

pub use authui_fx::{AnimationClock, Easing, Entrance, EntranceFrame};

// --- Catalog re-exports ----------------------------------------------------

pub use authui_catalog::{
    AuthAction, ErrorCode, ErrorDef, MessageVariant, MsgSegment, lookup, lookup_str, plain_text,
};

// --- Validation re-exports -------------------------------------------------

pub use authui_validate::{
    Email, Required, ValidationError, ValidationResult, Validator, is_valid_email, sanitize_input,
};

/// Common imports for building a sign-in screen.
pub mod prelude {
    pub use authui_catalog::{ErrorCode, MsgSegment, lookup, lookup_str};
    pub use authui_fx::{AnimationClock, Entrance, EntranceFrame};
    pub use authui_text::{
        CharState, Reconciler, display_states, estimate_width, fit_font_size,
    };
    pub use authui_validate::{Validator, is_valid_email, sanitize_input};
}
