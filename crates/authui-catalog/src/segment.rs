#![forbid(unsafe_code)]

//! Typed message segments.
//!
//! Error copy is stored as data, not markup: a message variant is an
//! ordered slice of [`MsgSegment`]s and the rendering layer maps each
//! segment kind onto its own presentation (emphasis, link styling,
//! monospace email examples, hard breaks).

/// Destination of an in-app action link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AuthAction {
    /// Switch to the login form.
    Login,
    /// Switch to the signup form.
    Signup,
}

/// One atom of a rich-text error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum MsgSegment {
    /// Plain text, optionally emphasized.
    Text {
        /// The text content.
        content: &'static str,
        /// Render with strong emphasis.
        bold: bool,
    },
    /// A link that triggers an in-app auth flow switch.
    Action {
        /// The link text.
        content: &'static str,
        /// Which flow the link switches to.
        action: AuthAction,
    },
    /// An external hyperlink.
    Link {
        /// The link target.
        href: &'static str,
        /// The link text.
        label: &'static str,
    },
    /// A literal example email address.
    Email {
        /// The example address.
        content: &'static str,
    },
    /// An explicit hard line break.
    LineBreak,
}

impl MsgSegment {
    /// Plain, unemphasized text.
    #[must_use]
    pub const fn text(content: &'static str) -> Self {
        Self::Text {
            content,
            bold: false,
        }
    }

    /// Emphasized text.
    #[must_use]
    pub const fn bold(content: &'static str) -> Self {
        Self::Text {
            content,
            bold: true,
        }
    }

    /// An action link into the login or signup flow.
    #[must_use]
    pub const fn action(content: &'static str, action: AuthAction) -> Self {
        Self::Action { content, action }
    }

    /// An external hyperlink.
    #[must_use]
    pub const fn link(label: &'static str, href: &'static str) -> Self {
        Self::Link { href, label }
    }

    /// A literal example email address.
    #[must_use]
    pub const fn email(content: &'static str) -> Self {
        Self::Email { content }
    }

    /// The visible text of this segment, if any.
    #[must_use]
    pub fn content(&self) -> Option<&'static str> {
        match self {
            Self::Text { content, .. } | Self::Action { content, .. } | Self::Email { content } => {
                Some(content)
            }
            Self::Link { label, .. } => Some(label),
            Self::LineBreak => None,
        }
    }
}

/// Flatten a message variant to plain text, rendering line breaks as
/// newlines. For logging and plain-text fallbacks.
#[must_use]
pub fn plain_text(variant: &[MsgSegment]) -> String {
    let mut out = String::new();
    for segment in variant {
        match segment.content() {
            Some(content) => out.push_str(content),
            None => out.push('\n'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_round_trip() {
        assert_eq!(MsgSegment::text("hi"), MsgSegment::Text {
            content: "hi",
            bold: false
        });
        assert_eq!(MsgSegment::bold("hi"), MsgSegment::Text {
            content: "hi",
            bold: true
        });
        assert_eq!(
            MsgSegment::action("log in", AuthAction::Login),
            MsgSegment::Action {
                content: "log in",
                action: AuthAction::Login
            }
        );
        assert_eq!(MsgSegment::link("reset", "#"), MsgSegment::Link {
            href: "#",
            label: "reset"
        });
    }

    #[test]
    fn plain_text_joins_segments() {
        let variant = [
            MsgSegment::text("Try "),
            MsgSegment::email("you@example.com"),
            MsgSegment::LineBreak,
            MsgSegment::bold("instead"),
            MsgSegment::text("."),
        ];
        assert_eq!(plain_text(&variant), "Try you@example.com\ninstead.");
    }

    #[test]
    fn line_break_has_no_content() {
        assert_eq!(MsgSegment::LineBreak.content(), None);
        assert_eq!(MsgSegment::link("reset", "#").content(), Some("reset"));
    }
}
