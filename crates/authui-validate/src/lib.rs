#![forbid(unsafe_code)]

//! Client-side validation for the sign-in/sign-up form.
//!
//! Validation here is a pre-check for immediate feedback, not a
//! gatekeeper: the backend re-validates everything. Accordingly the
//! email pattern is deliberately permissive and the whole surface is
//! total - nothing in this crate returns a `Result` or panics.
//!
//! - [`is_valid_email`] - the raw email-shape predicate
//! - [`Validator`] with [`Required`] and [`Email`] - field validators
//!   producing stable error codes for the message catalog
//! - [`sanitize_input`] - strips characters the animated name field
//!   cannot render
//!
//! # Example
//! ```
//! use authui_validate::{Email, Required, Validator, is_valid_email};
//!
//! assert!(is_valid_email("you@example.com"));
//! assert!(!is_valid_email("not-an-email"));
//!
//! // Empty passes Email (emptiness is Required's job).
//! assert!(Email::new().validate("").is_valid());
//! assert!(Required::new().validate("").is_invalid());
//! ```

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// Error code for required field validation.
pub const ERROR_CODE_REQUIRED: &str = "required";
/// Error code for email validation.
pub const ERROR_CODE_EMAIL: &str = "email";

// ---------------------------------------------------------------------------
// Email predicate
// ---------------------------------------------------------------------------

/// The email shape accepted by the form.
///
/// `local@domain.tld`: local part and domain are word characters with
/// optional single interior `.`/`-` separators, and the address ends in
/// one or more dot-segments of 2-3 word characters. Deliberately not
/// RFC 5322; it exists to catch obvious typos before a round-trip.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Za-z_]+([.-]?[0-9A-Za-z_]+)*@[0-9A-Za-z_]+([.-]?[0-9A-Za-z_]+)*(\.[0-9A-Za-z_]{2,3})+$")
        .expect("email pattern is valid")
});

/// Whether `email` looks like an email address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// ---------------------------------------------------------------------------
// Input filter
// ---------------------------------------------------------------------------

/// Whether the animated name field can render `ch`.
///
/// ASCII alphanumerics plus the symbols the display font has glyph
/// widths for.
#[must_use]
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '|' | '~'
                | '+'
                | '>'
                | '<'
                | '='
                | '^'
                | '$'
                | '.'
                | ','
                | ':'
                | '('
                | ')'
                | '/'
                | '?'
                | '!'
                | '['
                | ']'
                | '\''
                | '&'
                | '@'
                | '"'
                | '_'
                | '#'
                | '%'
                | '*'
                | ';'
                | '{'
                | '}'
                | ' '
        )
}

/// Drop every character the name field cannot render.
#[must_use]
pub fn sanitize_input(value: &str) -> String {
    value.chars().filter(|&ch| is_allowed_char(ch)).collect()
}

// ---------------------------------------------------------------------------
// Validation results
// ---------------------------------------------------------------------------

/// A validation error with a stable code and a default message.
///
/// The code is what callers map onto the error catalog; the message is
/// a plain-text fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code for programmatic handling.
    pub code: &'static str,
    /// Human-readable default message.
    pub message: &'static str,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub const fn new(code: &'static str, message: &'static str) -> Self {
        Self { code, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The result of a validation operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The value is valid.
    #[default]
    Valid,
    /// The value is invalid with an error.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Returns `true` if the result is `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` if the result is `Invalid`.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the error if the result is `Invalid`, otherwise `None`.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// A validator over form field text.
pub trait Validator {
    /// Validate the given value.
    fn validate(&self, value: &str) -> ValidationResult;
}

/// Rejects empty input. Whitespace-only counts as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Required {
    /// Create a new `Required` validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for Required {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_REQUIRED,
                "This field is required",
            ))
        } else {
            ValidationResult::Valid
        }
    }
}

/// Rejects input that does not look like an email address.
///
/// Empty input is valid here; compose with [`Required`] when the field
/// is mandatory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Email {
    /// Create a new `Email` validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for Email {
    fn validate(&self, value: &str) -> ValidationResult {
        let trimmed = value.trim();
        if trimmed.is_empty() || is_valid_email(trimmed) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_EMAIL,
                "Invalid email address",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("you@example.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("user-name@my-host.net"));
        assert!(is_valid_email("a_b@c_d.io"));
    }

    #[test]
    fn rejects_obvious_non_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("you@"));
        assert!(!is_valid_email("you@example"));
        assert!(!is_valid_email("you example@domain.com"));
    }

    #[test]
    fn rejects_single_letter_tld() {
        assert!(!is_valid_email("a@b.c"));
        assert!(is_valid_email("a@b.cd"));
        assert!(is_valid_email("a@b.com"));
    }

    #[test]
    fn rejects_tld_longer_than_three() {
        // The pattern caps dot-segments at three characters, so longer
        // TLDs only pass when they split into valid segments.
        assert!(!is_valid_email("you@example.info"));
    }

    #[test]
    fn rejects_doubled_separators() {
        assert!(!is_valid_email("you..there@example.com"));
        assert!(!is_valid_email("you@example..com"));
        assert!(!is_valid_email(".you@example.com"));
        assert!(!is_valid_email("you.@example.com"));
    }

    #[test]
    fn required_rejects_blank_input() {
        let required = Required::new();
        assert!(required.validate("").is_invalid());
        assert!(required.validate("   ").is_invalid());
        assert!(required.validate("x").is_valid());
        assert_eq!(
            required.validate("").error().map(|e| e.code),
            Some(ERROR_CODE_REQUIRED)
        );
    }

    #[test]
    fn email_validator_lets_required_own_emptiness() {
        let email = Email::new();
        assert!(email.validate("").is_valid());
        assert!(email.validate("you@example.com").is_valid());
        assert!(email.validate("nope").is_invalid());
        assert_eq!(
            email.validate("nope").error().map(|e| e.code),
            Some(ERROR_CODE_EMAIL)
        );
    }

    #[test]
    fn validation_error_displays_its_message() {
        let err = ValidationError::new(ERROR_CODE_EMAIL, "Invalid email address");
        assert_eq!(err.to_string(), "Invalid email address");
    }

    #[test]
    fn sanitize_keeps_typable_name_characters() {
        assert_eq!(sanitize_input("sam_42!"), "sam_42!");
        assert_eq!(sanitize_input("a b"), "a b");
    }

    #[test]
    fn sanitize_drops_unrenderable_characters() {
        assert_eq!(sanitize_input("sam\u{0007}"), "sam");
        assert_eq!(sanitize_input("naïve"), "nave");
        assert_eq!(sanitize_input("back\\slash"), "backslash");
        assert_eq!(sanitize_input("🦀"), "");
    }

    proptest! {
        #[test]
        fn sanitized_output_is_always_allowed(input in "\\PC{0,32}") {
            prop_assert!(sanitize_input(&input).chars().all(is_allowed_char));
        }

        #[test]
        fn sanitize_is_idempotent(input in "\\PC{0,32}") {
            let once = sanitize_input(&input);
            prop_assert_eq!(sanitize_input(&once), once);
        }

        #[test]
        fn valid_addresses_keep_their_shape(
            local in "[a-z0-9]{1,8}",
            host in "[a-z0-9]{1,8}",
            tld in "[a-z]{2,3}",
        ) {
            let addr = format!("{}@{}.{}", local, host, tld);
            prop_assert!(is_valid_email(&addr));
        }
    }
}
