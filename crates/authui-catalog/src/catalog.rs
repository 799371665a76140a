#![forbid(unsafe_code)]

//! The static error catalog.
//!
//! One entry per auth error code, each carrying a short title and a set
//! of message variants so repeated failures don't read like a broken
//! record. The table is const data; nothing here allocates or fails.

use crate::segment::{AuthAction, MsgSegment};

/// One pre-written rich-text message.
pub type MessageVariant = &'static [MsgSegment];

/// Canonical auth error codes.
///
/// Produced by form validation and request handling elsewhere; this
/// crate only maps them to copy. Unknown wire strings parse to
/// [`ErrorCode::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ErrorCode {
    /// Signup submitted without an email.
    EmptyEmailSignup,
    /// Signup email already has an account.
    EmailExists,
    /// Email failed the format pre-check.
    InvalidEmailFormat,
    /// Login submitted without an email.
    EmptyEmailLogin,
    /// Login email has no account.
    UnrecognizedEmail,
    /// Password did not match.
    InvalidPassword,
    /// Password field left empty.
    EmptyPassword,
    /// Request never left the device.
    ConnectionFailed,
    /// The backend answered with a failure.
    ServerError,
    /// The request timed out.
    Timeout,
    /// Fallback for everything else.
    Default,
}

impl ErrorCode {
    /// Every code, in catalog order.
    pub const ALL: &'static [ErrorCode] = &[
        Self::EmptyEmailSignup,
        Self::EmailExists,
        Self::InvalidEmailFormat,
        Self::EmptyEmailLogin,
        Self::UnrecognizedEmail,
        Self::InvalidPassword,
        Self::EmptyPassword,
        Self::ConnectionFailed,
        Self::ServerError,
        Self::Timeout,
        Self::Default,
    ];

    /// The wire spelling of this code.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyEmailSignup => "EMPTY_EMAIL_SIGNUP",
            Self::EmailExists => "EMAIL_EXISTS",
            Self::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            Self::EmptyEmailLogin => "EMPTY_EMAIL_LOGIN",
            Self::UnrecognizedEmail => "UNRECOGNIZED_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::EmptyPassword => "EMPTY_PASSWORD",
            Self::ConnectionFailed => "CONNECTION_FAILED",
            Self::ServerError => "SERVER_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::Default => "DEFAULT",
        }
    }

    /// Parse a wire string; anything unrecognized is the fallback code.
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code {
            "EMPTY_EMAIL_SIGNUP" => Self::EmptyEmailSignup,
            "EMAIL_EXISTS" => Self::EmailExists,
            "INVALID_EMAIL_FORMAT" => Self::InvalidEmailFormat,
            "EMPTY_EMAIL_LOGIN" => Self::EmptyEmailLogin,
            "UNRECOGNIZED_EMAIL" => Self::UnrecognizedEmail,
            "INVALID_PASSWORD" => Self::InvalidPassword,
            "EMPTY_PASSWORD" => Self::EmptyPassword,
            "CONNECTION_FAILED" => Self::ConnectionFailed,
            "SERVER_ERROR" => Self::ServerError,
            "TIMEOUT" => Self::Timeout,
            _ => Self::Default,
        }
    }
}

/// Title and message variants for one error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorDef {
    /// Short heading shown above the message.
    pub title: &'static str,
    /// Pre-written message variants; never empty.
    pub messages: &'static [MessageVariant],
}

impl ErrorDef {
    /// Pick a variant deterministically from caller-supplied entropy.
    ///
    /// The same seed always yields the same variant; callers wanting
    /// per-render variety pass fresh entropy in.
    #[must_use]
    pub fn variant(&self, seed: u64) -> MessageVariant {
        let hash = seed
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(0x2545_F491_4F6C_DD1D);
        self.messages[(hash >> 32) as usize % self.messages.len()]
    }
}

/// Look up the catalog entry for a code.
#[must_use]
pub fn lookup(code: ErrorCode) -> &'static ErrorDef {
    match code {
        ErrorCode::EmptyEmailSignup => &EMPTY_EMAIL_SIGNUP,
        ErrorCode::EmailExists => &EMAIL_EXISTS,
        ErrorCode::InvalidEmailFormat => &INVALID_EMAIL_FORMAT,
        ErrorCode::EmptyEmailLogin => &EMPTY_EMAIL_LOGIN,
        ErrorCode::UnrecognizedEmail => &UNRECOGNIZED_EMAIL,
        ErrorCode::InvalidPassword => &INVALID_PASSWORD,
        ErrorCode::EmptyPassword => &EMPTY_PASSWORD,
        ErrorCode::ConnectionFailed => &CONNECTION_FAILED,
        ErrorCode::ServerError => &SERVER_ERROR,
        ErrorCode::Timeout => &TIMEOUT,
        ErrorCode::Default => &DEFAULT,
    }
}

/// Look up by wire string, falling back to the [`ErrorCode::Default`]
/// entry for unrecognized codes.
#[must_use]
pub fn lookup_str(code: &str) -> &'static ErrorDef {
    lookup(ErrorCode::parse(code))
}

static EMPTY_EMAIL_SIGNUP: ErrorDef = ErrorDef {
    title: "Email required",
    messages: &[
        &[
            MsgSegment::text("We need your "),
            MsgSegment::bold("email"),
            MsgSegment::text(" to say hi!"),
        ],
        &[
            MsgSegment::text("We can't say hi without an "),
            MsgSegment::bold("email"),
            MsgSegment::text(". Mind dropping yours in?"),
        ],
        &[
            MsgSegment::text("We've got a welcome note ready! All we need is your "),
            MsgSegment::bold("email"),
            MsgSegment::text(" to send it flying!"),
        ],
        &[
            MsgSegment::text("We'll need your "),
            MsgSegment::bold("email"),
            MsgSegment::text(" to get things started. It won't be shared. Pinky promise!"),
        ],
    ],
};

static EMAIL_EXISTS: ErrorDef = ErrorDef {
    title: "Email already in use",
    messages: &[
        &[
            MsgSegment::text("Looks like you're already part of the crew. Try "),
            MsgSegment::action("logging in", AuthAction::Login),
            MsgSegment::text(" instead."),
        ],
        &[
            MsgSegment::text("Hey, we know this one! "),
            MsgSegment::action("Log in", AuthAction::Login),
            MsgSegment::text(" to pick up where you left off."),
        ],
        &[
            MsgSegment::text("This email is already registered. Maybe try "),
            MsgSegment::action("logging in", AuthAction::Login),
            MsgSegment::text(" instead?"),
        ],
    ],
};

static INVALID_EMAIL_FORMAT: ErrorDef = ErrorDef {
    title: "Invalid email address",
    messages: &[
        &[
            MsgSegment::text("Hmm... that doesn't look right. Try something like "),
            MsgSegment::email("you@example.com"),
            MsgSegment::text(" instead."),
        ],
        &[
            MsgSegment::text("We're looking for something like "),
            MsgSegment::email("name@domain.com"),
            MsgSegment::text(" — but cooler. You get the idea!"),
        ],
        &[
            MsgSegment::text("The gate is sealed by magic. "),
            MsgSegment::LineBreak,
            MsgSegment::text("Only a "),
            MsgSegment::bold("valid email"),
            MsgSegment::text(" can unlock it. Try a format such as: "),
            MsgSegment::email("open@sesame.com"),
            MsgSegment::text("."),
        ],
    ],
};

static EMPTY_EMAIL_LOGIN: ErrorDef = ErrorDef {
    title: "Email required",
    messages: &[
        &[
            MsgSegment::text("\"Your ID, please!\""),
            MsgSegment::LineBreak,
            MsgSegment::text("We need your "),
            MsgSegment::bold("email"),
            MsgSegment::text(" to verify you're on the guest list."),
        ],
        &[
            MsgSegment::text("You're almost there! Just drop your "),
            MsgSegment::bold("email"),
            MsgSegment::text(" to continue."),
        ],
        &[
            MsgSegment::text("We're reaching across dimensions — but we need your "),
            MsgSegment::bold("email"),
            MsgSegment::text(" to lock in!"),
        ],
    ],
};

static UNRECOGNIZED_EMAIL: ErrorDef = ErrorDef {
    title: "Unrecognized email",
    messages: &[
        &[
            MsgSegment::text("We couldn't find an account with that email. Check for typos, or "),
            MsgSegment::action("sign up", AuthAction::Signup),
            MsgSegment::text(" instead!"),
        ],
        &[
            MsgSegment::text("We searched the archives… but found no trace of that email."),
            MsgSegment::LineBreak,
            MsgSegment::text("Try another or "),
            MsgSegment::action("sign up", AuthAction::Signup),
            MsgSegment::text(" to begin your journey!"),
        ],
        &[
            MsgSegment::text("This email is not on the guest list. Check your spelling or "),
            MsgSegment::action("sign up", AuthAction::Signup),
            MsgSegment::text(" to join the party!"),
        ],
    ],
};

static INVALID_PASSWORD: ErrorDef = ErrorDef {
    title: "Incorrect password",
    messages: &[
        &[
            MsgSegment::text("You knocked, but the passphrase was off. Check your spelling or "),
            MsgSegment::link("reset your password", "#"),
            MsgSegment::text("."),
        ],
        &[
            MsgSegment::text("Give it another shot!"),
            MsgSegment::LineBreak,
            MsgSegment::text("Or try "),
            MsgSegment::link("resetting your password", "#"),
            MsgSegment::text("."),
        ],
        &[
            MsgSegment::text("Oops, wrong key to the kingdom! Try again or summon a "),
            MsgSegment::link("password reset", "#"),
            MsgSegment::text(" spell."),
        ],
        &[
            MsgSegment::text("That password didn't work. Check your caps lock or "),
            MsgSegment::link("try resetting it", "#"),
            MsgSegment::text("."),
        ],
        &[
            MsgSegment::text("Your credentials were rejected by the Council of Access. Please try again or "),
            MsgSegment::link("reset your password", "#"),
            MsgSegment::text("."),
        ],
    ],
};

static EMPTY_PASSWORD: ErrorDef = ErrorDef {
    title: "Password missing",
    messages: &[
        &[
            MsgSegment::text("To enter this club you need a secret handshake."),
            MsgSegment::LineBreak,
            MsgSegment::text("(spoiler: it's your "),
            MsgSegment::bold("password"),
            MsgSegment::text(")"),
        ],
        &[
            MsgSegment::text("Just one more step — pop in your "),
            MsgSegment::bold("password"),
            MsgSegment::text(" and you're in!"),
        ],
        &[
            MsgSegment::text("The ancient terminal glows faintly… awaiting a "),
            MsgSegment::bold("password"),
            MsgSegment::text("."),
        ],
        &[
            MsgSegment::text("Speak, friend, and enter..."),
            MsgSegment::LineBreak,
            MsgSegment::text("Or simply "),
            MsgSegment::bold("enter your password"),
            MsgSegment::text(" — that works too!"),
        ],
    ],
};

static CONNECTION_FAILED: ErrorDef = ErrorDef {
    title: "No internet",
    messages: &[
        &[
            MsgSegment::text("Looks like you're offline. "),
            MsgSegment::bold("Check your internet connection and try again."),
        ],
        &[
            MsgSegment::text("Houston, we have a problem! Your internet's gone AWOL. "),
            MsgSegment::bold("Check your signal"),
            MsgSegment::text(" and retry."),
        ],
        &[
            MsgSegment::text("You're waving, but no one's waving back. "),
            MsgSegment::bold("Are you still online?"),
        ],
        &[
            MsgSegment::text("Your connection has temporarily left the chat. "),
            MsgSegment::bold("Check your Wi-Fi"),
            MsgSegment::text(" and try again."),
        ],
    ],
};

static SERVER_ERROR: ErrorDef = ErrorDef {
    title: "Server error",
    messages: &[
        &[
            MsgSegment::text("Something broke on our side. We're working on it! "),
            MsgSegment::LineBreak,
            MsgSegment::bold("Please try again"),
            MsgSegment::text(" shortly."),
        ],
        &[
            MsgSegment::text("Oops! "),
            MsgSegment::text("Our servers tripped over a digital shoelace. "),
            MsgSegment::LineBreak,
            MsgSegment::bold("Please try again"),
            MsgSegment::text(" in a moment!"),
        ],
        &[
            MsgSegment::text("Something went poof."),
            MsgSegment::LineBreak,
            MsgSegment::text("We're un-poofing it. "),
            MsgSegment::LineBreak,
            MsgSegment::bold("Please try again"),
            MsgSegment::text(" in a moment!"),
        ],
    ],
};

static TIMEOUT: ErrorDef = ErrorDef {
    title: "Request timed out",
    messages: &[
        &[
            MsgSegment::text("The request took too long to respond. "),
            MsgSegment::bold("Try again"),
            MsgSegment::text(" — it usually works on the second go."),
        ],
        &[
            MsgSegment::text("This is taking longer than a dentist appointment."),
            MsgSegment::LineBreak,
            MsgSegment::text("Let's "),
            MsgSegment::bold("try that again!"),
        ],
        &[
            MsgSegment::text("This is moving slower than"),
            MsgSegment::LineBreak,
            MsgSegment::text("a sloth on vacation."),
            MsgSegment::LineBreak,
            MsgSegment::text("Please "),
            MsgSegment::bold("try again!"),
        ],
        &[
            MsgSegment::text("Things are taking longer than expected. Please "),
            MsgSegment::bold("try again"),
            MsgSegment::text("."),
        ],
    ],
};

static DEFAULT: ErrorDef = ErrorDef {
    title: "Unexpected error",
    messages: &[
        &[
            MsgSegment::text("Something unexpected happened. Please refresh the page or "),
            MsgSegment::bold("try again"),
            MsgSegment::text(" shortly."),
        ],
        &[
            MsgSegment::text("Minor glitch in the matrix. "),
            MsgSegment::LineBreak,
            MsgSegment::bold("Please try again."),
            MsgSegment::LineBreak,
            MsgSegment::text("(no pills required)"),
        ],
        &[
            MsgSegment::text("Reality blinked. We're stabilizing the simulation — "),
            MsgSegment::bold("try again"),
            MsgSegment::text(" in a sec."),
        ],
        &[
            MsgSegment::text("Reality momentarily unraveled. We're stitching it back together. Please "),
            MsgSegment::bold("try again"),
            MsgSegment::text("."),
        ],
    ],
};
