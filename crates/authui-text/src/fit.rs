#![forbid(unsafe_code)]

//! Fit a greeting's font size to the viewport.
//!
//! The sign-in screen renders "Welcome, <name>!" at a large display size
//! and shrinks it when a long name would overflow. Because
//! [`crate::estimate_width`] scales linearly with font size, the fitting
//! size is solved with one linear interpolation instead of an iterative
//! search.
//!
//! # Example
//! ```
//! use authui_text::{estimate_width, fit_font_size};
//!
//! // Short name on a wide viewport: keep the default size.
//! assert_eq!(fit_font_size("Welcome, sam", 800.0, 48.0, 16.0, estimate_width), 48.0);
//!
//! // Degenerate mount state: no text, no viewport yet.
//! assert_eq!(fit_font_size("", 0.0, 48.0, 16.0, estimate_width), 48.0);
//! ```

/// Fraction of the viewport reserved as margin on each measurement.
pub const VIEWPORT_MARGIN: f32 = 0.1;

/// Trailing punctuation the greeting always renders after the name.
const RESERVED_PUNCTUATION: char = '!';

/// Largest font size, no smaller than `min_size`, at which `text` fits
/// the margin-adjusted viewport.
///
/// `estimate` is the width estimator, `(text, font_size, base_size) ->
/// width`; pass [`crate::estimate_width`] or a closure over a
/// [`crate::WidthCache`]. The reserved `'!'` is appended before
/// measuring. With empty `text` and a zero `viewport_width` (the state
/// before first layout) the default size comes back unchanged.
#[must_use]
pub fn fit_font_size(
    text: &str,
    viewport_width: f32,
    default_size: f32,
    min_size: f32,
    mut estimate: impl FnMut(&str, f32, f32) -> f32,
) -> f32 {
    if text.is_empty() && viewport_width == 0.0 {
        return default_size;
    }

    let measured = format!("{text}{RESERVED_PUNCTUATION}");
    let available = viewport_width - viewport_width * VIEWPORT_MARGIN;
    let width_at_default = estimate(&measured, default_size, default_size);

    if width_at_default <= available {
        return default_size;
    }

    // Width is linear in font size, so the exact fitting size is one
    // proportion away.
    let ideal = default_size * available / width_at_default;
    ideal.max(min_size)
}

/// Whether two measured lines of one logical greeting sit on different
/// baselines, i.e. the text wrapped.
///
/// Takes the top coordinates of the two fragments' bounding boxes, if
/// they were measurable. Missing measurements read as "not wrapped".
#[must_use]
pub fn has_wrapped(first_top: Option<f32>, second_top: Option<f32>) -> bool {
    match (first_top, second_top) {
        (Some(a), Some(b)) => (a - b).abs() > 1.0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::estimate_width;

    #[test]
    fn degenerate_mount_state_keeps_default() {
        assert_eq!(fit_font_size("", 0.0, 16.0, 8.0, estimate_width), 16.0);
    }

    #[test]
    fn zero_viewport_with_text_clamps_to_minimum() {
        let size = fit_font_size("hello", 0.0, 16.0, 8.0, estimate_width);
        assert_eq!(size, 8.0);
    }

    #[test]
    fn short_text_keeps_default_size() {
        let size = fit_font_size("hi", 500.0, 16.0, 8.0, estimate_width);
        assert_eq!(size, 16.0);
    }

    #[test]
    fn long_text_shrinks_below_default() {
        let name = "a very long display name that cannot fit";
        let size = fit_font_size(name, 20.0, 48.0, 8.0, estimate_width);
        assert!(size < 48.0);
        assert!(size >= 8.0);
    }

    #[test]
    fn shrunk_text_fits_the_available_width() {
        let name = "a fairly long display name";
        let viewport = 10.0;
        let size = fit_font_size(name, viewport, 48.0, 1.0, estimate_width);
        assert!(size < 48.0);
        let width = estimate_width(&format!("{name}!"), size, 48.0);
        assert!(width <= viewport * (1.0 - VIEWPORT_MARGIN) + 1e-3);
    }

    #[test]
    fn never_returns_below_minimum() {
        let size = fit_font_size("extremely long name here", 1.0, 48.0, 12.0, estimate_width);
        assert_eq!(size, 12.0);
    }

    #[test]
    fn reserved_punctuation_counts_toward_the_fit() {
        // Calibrated so the text fits the available width exactly until
        // the trailing '!' is appended.
        let viewport = 16.2;
        let available = viewport * (1.0 - VIEWPORT_MARGIN);
        let text = "aaaaaaaaaaaaaaaaaaaaaaaa";
        let bare = estimate_width(text, 16.0, 16.0);
        assert!(bare <= available);
        let with_mark = estimate_width(&format!("{text}!"), 16.0, 16.0);
        assert!(with_mark > available);
        let size = fit_font_size(text, viewport, 16.0, 8.0, estimate_width);
        assert!(size < 16.0);
    }

    #[test]
    fn wrap_detection_compares_baselines() {
        assert!(!has_wrapped(Some(10.0), Some(10.5)));
        assert!(has_wrapped(Some(10.0), Some(42.0)));
    }

    #[test]
    fn missing_measurements_read_as_not_wrapped() {
        assert!(!has_wrapped(None, Some(10.0)));
        assert!(!has_wrapped(Some(10.0), None));
        assert!(!has_wrapped(None, None));
    }
}
