#![forbid(unsafe_code)]

//! User-facing authentication error copy.
//!
//! A static catalog mapping auth error codes to a title and a set of
//! pre-written rich-text message variants. Messages are sequences of
//! typed [`MsgSegment`]s - plain or bold text, action links into the
//! login/signup flows, hyperlinks, literal email examples, and explicit
//! line breaks - so the rendering layer decides all presentation.
//!
//! The catalog itself does no I/O and no classification: callers map
//! their failure to an [`ErrorCode`] (unknown strings fall back to
//! [`ErrorCode::Default`]), pick a variant, and render its segments.
//!
//! # Example
//! ```
//! use authui_catalog::{ErrorCode, MsgSegment, lookup, lookup_str};
//!
//! let def = lookup(ErrorCode::InvalidPassword);
//! assert_eq!(def.title, "Incorrect password");
//!
//! // Unknown codes resolve to the fallback entry.
//! assert_eq!(lookup_str("SOMETHING_ELSE").title, lookup(ErrorCode::Default).title);
//!
//! // Deterministic variant pick from caller-supplied entropy.
//! let variant = def.variant(42);
//! assert!(!variant.is_empty());
//! ```

pub mod catalog;
pub mod segment;

pub use catalog::{ErrorCode, ErrorDef, MessageVariant, lookup, lookup_str};
pub use segment::{AuthAction, MsgSegment, plain_text};
