#![forbid(unsafe_code)]

//! Per-character render state for an animated text field.
//!
//! A keyed rendering layer draws the typed value one character at a time
//! so that newly typed characters can play an entrance effect. The
//! [`Reconciler`] compares the current value against the previous one and
//! produces a [`CharState`] per character, flagging exactly the characters
//! the latest edit introduced.
//!
//! Characters are grapheme clusters, not code points, so an emoji or a
//! combining sequence animates as one visual character.
//!
//! # Example
//! ```
//! use authui_text::Reconciler;
//!
//! let mut r = Reconciler::new();
//! let states = r.reconcile("hi", "", &[]);
//! assert_eq!(states.len(), 2);
//! assert!(states.iter().all(|s| s.is_new));
//!
//! // Deleting never animates.
//! let states = r.reconcile("h", "hi", &states);
//! assert!(states.iter().all(|s| !s.is_new));
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Placeholder shown while the field is empty.
pub const PLACEHOLDER: &str = "_____";

/// Render state of one on-screen character of an input string.
///
/// The `id` is an identity token for the character's screen position. A
/// keyed renderer reuses the visual node when the id is stable across
/// updates and recreates it (replaying the entrance effect) when the id
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharState {
    /// The grapheme cluster displayed at this position.
    pub grapheme: String,
    /// Whether the latest edit introduced this character.
    pub is_new: bool,
    /// Identity token for node reuse across updates.
    pub id: String,
}

impl CharState {
    /// A settled character with the position-stable id.
    fn stable(grapheme: &str, index: usize) -> Self {
        Self {
            grapheme: grapheme.to_owned(),
            is_new: false,
            id: format!("char-{index}"),
        }
    }

    /// A brand-new character. The token makes the id unique per update so
    /// the renderer cannot mistake it for an old node at the same index.
    fn fresh(grapheme: &str, index: usize, token: u64) -> Self {
        Self {
            grapheme: grapheme.to_owned(),
            is_new: true,
            id: format!("char-{index}-{token}"),
        }
    }

    /// Carry a prior state's identity to a new position, settling it.
    fn carried(grapheme: &str, prior: &CharState) -> Self {
        Self {
            grapheme: grapheme.to_owned(),
            is_new: false,
            id: prior.id.clone(),
        }
    }
}

/// Computes [`CharState`] transitions between two successive values of an
/// input string.
///
/// The reconciler owns a monotonic token counter used to mint ids for
/// characters that must read as brand-new. Given the counter state the
/// function is pure and deterministic; call it once per text-change
/// event, previous output in hand.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    next_token: u64,
}

impl Reconciler {
    /// Create a reconciler with its token counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn token(&mut self) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        token
    }

    /// Diff `new_text` against `old_text` and produce the next state row.
    ///
    /// The output always has one entry per grapheme of `new_text`.
    /// `prior` is the previous output; a `prior` shorter than expected is
    /// never an error, missing entries are synthesized as settled state.
    ///
    /// Policy, in order:
    /// - empty `old_text`: everything is new
    /// - longer `new_text`: exactly the inserted run is new, survivors
    ///   after the insertion keep their identity
    /// - shorter `new_text`: nothing is new (deletion never animates)
    /// - equal length: everything from the first differing character to
    ///   the end is new. Deliberately coarse: the trailing run replays
    ///   its entrance even where characters happen to match.
    pub fn reconcile(&mut self, new_text: &str, old_text: &str, prior: &[CharState]) -> Vec<CharState> {
        let new: Vec<&str> = new_text.graphemes(true).collect();

        if old_text.is_empty() {
            return new
                .iter()
                .enumerate()
                .map(|(i, g)| CharState {
                    grapheme: (*g).to_owned(),
                    is_new: true,
                    id: format!("char-{i}"),
                })
                .collect();
        }

        let old: Vec<&str> = old_text.graphemes(true).collect();
        let overlap = old.len().min(new.len());
        let divergence = (0..overlap)
            .find(|&i| old[i] != new[i])
            .unwrap_or(overlap);

        tracing::trace!(
            old_len = old.len(),
            new_len = new.len(),
            divergence,
            "reconcile"
        );

        if new.len() > old.len() {
            let added = new.len() - old.len();
            new.iter()
                .enumerate()
                .map(|(i, g)| {
                    if i < divergence {
                        match prior.get(i) {
                            Some(p) => CharState::carried(g, p),
                            None => CharState::stable(g, i),
                        }
                    } else if i < divergence + added {
                        CharState::fresh(g, i, self.token())
                    } else {
                        // Survivor shifted forward by the insertion.
                        let old_index = i - added;
                        match prior.get(old_index) {
                            Some(p) => CharState::carried(g, p),
                            None => CharState::stable(g, i),
                        }
                    }
                })
                .collect()
        } else if new.len() < old.len() {
            // Deletions never animate; no identity is preserved across
            // the gap.
            new.iter()
                .enumerate()
                .map(|(i, g)| {
                    if i < divergence {
                        match prior.get(i) {
                            Some(p) => CharState::carried(g, p),
                            None => CharState::stable(g, i),
                        }
                    } else {
                        CharState::stable(g, i)
                    }
                })
                .collect()
        } else {
            new.iter()
                .enumerate()
                .map(|(i, g)| {
                    if i < divergence {
                        CharState::stable(g, i)
                    } else {
                        CharState::fresh(g, i, self.token())
                    }
                })
                .collect()
        }
    }
}

/// Map reconciled states to what the renderer actually draws.
///
/// An empty field shows the [`PLACEHOLDER`] underscores (never animated);
/// otherwise spaces become U+00A0 so the renderer cannot collapse them.
#[must_use]
pub fn display_states(text: &str, states: &[CharState]) -> Vec<CharState> {
    if text.is_empty() {
        return PLACEHOLDER
            .graphemes(true)
            .enumerate()
            .map(|(i, g)| CharState {
                grapheme: g.to_owned(),
                is_new: false,
                id: format!("placeholder-{i}"),
            })
            .collect();
    }

    states
        .iter()
        .map(|state| {
            if state.grapheme == " " {
                CharState {
                    grapheme: "\u{00A0}".to_owned(),
                    ..state.clone()
                }
            } else {
                state.clone()
            }
        })
        .collect()
}
