#![forbid(unsafe_code)]

//! Approximate text width estimation.
//!
//! The greeting layout needs text widths before anything is drawn, so
//! widths come from a static per-character table of relative widths
//! (fractions of the font size, measured once against the display font)
//! rather than from real font metrics. Estimation is linear in the font
//! size, which is what lets [`crate::fit_font_size`] solve for a fitting
//! size in one step instead of searching.
//!
//! Estimation is a hot path during resize, so [`WidthCache`] memoizes
//! results behind an LRU with hashed keys.
//!
//! # Example
//! ```
//! use authui_text::{WidthCache, estimate_width};
//!
//! let raw = estimate_width("Welcome", 16.0, 16.0);
//! assert!(raw > 0.0);
//!
//! // Twice the font size, twice the width.
//! let scaled = estimate_width("Welcome", 32.0, 16.0);
//! assert!((scaled - raw * 2.0).abs() < 1e-4);
//!
//! let mut cache = WidthCache::new(256);
//! assert_eq!(cache.estimate("Welcome", 16.0, 16.0), raw);
//! assert_eq!(cache.stats().misses, 1);
//! cache.estimate("Welcome", 16.0, 16.0);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use unicode_segmentation::UnicodeSegmentation;

/// Relative width assumed for characters missing from the table.
pub const DEFAULT_CHAR_WIDTH: f32 = 0.9;

/// Default capacity of [`WidthCache`].
pub const DEFAULT_WIDTH_CACHE_CAPACITY: usize = 1024;

/// Relative width of one grapheme cluster, as a fraction of the font
/// size.
///
/// Values were eyeballed against the proportional display font the
/// sign-in screen uses. Multi-codepoint clusters fall back to
/// [`DEFAULT_CHAR_WIDTH`].
#[must_use]
pub fn relative_width(grapheme: &str) -> f32 {
    let mut chars = grapheme.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return DEFAULT_CHAR_WIDTH;
    };

    match ch {
        'i' | 'j' | 'l' | '!' | '\'' | '|' | '.' | ',' | ':' | ';' => 0.35,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '{' | '}' | '/' => 0.5,
        ' ' => 0.5,
        'm' | 'w' => 0.95,
        'M' | 'W' => 1.05,
        '@' | '%' => 1.0,
        '_' | '~' | '+' | '<' | '>' | '=' | '^' | '$' | '#' | '&' | '?' | '*' => 0.75,
        'a'..='z' => 0.6,
        'A'..='Z' => 0.75,
        '0'..='9' => 0.62,
        '"' => 0.45,
        _ => DEFAULT_CHAR_WIDTH,
    }
}

/// Estimate the rendered width of `text` at `font_size`.
///
/// Table widths are relative to `base_font_size`; the result scales
/// linearly with `font_size / base_font_size`. Pure, O(text length).
/// A non-positive `base_font_size` estimates to zero.
#[must_use]
pub fn estimate_width(text: &str, font_size: f32, base_font_size: f32) -> f32 {
    if base_font_size <= 0.0 {
        return 0.0;
    }
    let scale = font_size / base_font_size;
    text.graphemes(true)
        .map(|g| relative_width(g) * scale)
        .sum()
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate from 0.0 to 1.0.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache over [`estimate_width`] results.
///
/// The resize loop estimates the same greeting at the same couple of
/// font sizes over and over; this keeps those estimates O(1). Keys are
/// a 64-bit FxHash over `(text, font_size bits, base bits)` rather than
/// the full string, trading a ~1-in-2^64 collision for not storing
/// greeting text in the cache.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, f32>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    /// Create a cache holding up to `capacity` estimates.
    ///
    /// A zero capacity is bumped to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity must be > 0");
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    fn key(text: &str, font_size: f32, base_font_size: f32) -> u64 {
        let mut hasher = FxHasher::default();
        text.hash(&mut hasher);
        font_size.to_bits().hash(&mut hasher);
        base_font_size.to_bits().hash(&mut hasher);
        hasher.finish()
    }

    /// Cached [`estimate_width`].
    pub fn estimate(&mut self, text: &str, font_size: f32, base_font_size: f32) -> f32 {
        let key = Self::key(text, font_size, base_font_size);
        if let Some(&width) = self.cache.get(&key) {
            self.hits += 1;
            return width;
        }
        self.misses += 1;
        let width = estimate_width(text, font_size, base_font_size);
        tracing::trace!(len = text.len(), font_size, width, "width cache miss");
        self.cache.put(key, width);
        width
    }

    /// Current cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    /// Drop all entries and reset statistics.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH_CACHE_CAPACITY)
    }
}
