#![forbid(unsafe_code)]

//! End-to-end exercise of the sign-in screen building blocks: typing
//! into the name field, laying out the greeting, and rendering error
//! copy after a failed submit.

use authui::prelude::*;
use authui::{WidthCache, has_wrapped};
use std::cell::Cell;
use std::rc::Rc;

/// Simulates the rendering layer's per-keystroke work: reconcile, swap
/// in display states, start entrances for the new characters.
struct NameField {
    reconciler: Reconciler,
    value: String,
    states: Vec<CharState>,
    effects: Vec<Entrance>,
    completed: Rc<Cell<usize>>,
}

impl NameField {
    fn new() -> Self {
        Self {
            reconciler: Reconciler::new(),
            value: String::new(),
            states: Vec::new(),
            effects: Vec::new(),
            completed: Rc::new(Cell::new(0)),
        }
    }

    fn type_value(&mut self, next: &str) {
        let next = sanitize_input(next);
        let states = self.reconciler.reconcile(&next, &self.value, &self.states);
        for state in &states {
            let completed = Rc::clone(&self.completed);
            if let Some(fx) = Entrance::start(state.is_new, move || {
                completed.set(completed.get() + 1);
            }) {
                self.effects.push(fx);
            }
        }
        self.states = states;
        self.value = next;
    }

    fn tick(&mut self, delta: f64) {
        for fx in &mut self.effects {
            fx.advance(delta);
        }
        self.effects.retain(|fx| !fx.is_finished());
    }

    fn unmount(&mut self) {
        for fx in &mut self.effects {
            fx.cancel();
        }
        self.effects.clear();
    }
}

#[test]
fn typing_animates_only_new_characters() {
    let mut field = NameField::new();

    field.type_value("s");
    field.type_value("sa");
    field.type_value("sam");
    assert_eq!(field.effects.len(), 3);

    // Deleting starts nothing.
    field.type_value("sa");
    assert_eq!(field.effects.len(), 3);

    field.tick(1.0);
    assert_eq!(field.completed.get(), 3);
    assert!(field.effects.is_empty());
}

#[test]
fn unmount_cancels_inflight_effects() {
    let mut field = NameField::new();
    field.type_value("sam");
    field.tick(0.1);
    field.unmount();
    field.tick(1.0);
    assert_eq!(field.completed.get(), 0, "no callback after teardown");
}

#[test]
fn sanitization_feeds_the_reconciler() {
    let mut field = NameField::new();
    field.type_value("sam\u{0007}🦀");
    assert_eq!(field.value, "sam");
    assert_eq!(field.states.len(), 3);
}

#[test]
fn empty_field_renders_the_placeholder() {
    let mut field = NameField::new();
    field.type_value("s");
    field.type_value("");
    let display = display_states(&field.value, &field.states);
    let row: String = display.iter().map(|s| s.grapheme.as_str()).collect();
    assert_eq!(row, "_____");
    assert!(display.iter().all(|s| !s.is_new));
}

#[test]
fn greeting_layout_shrinks_long_names_only() {
    let mut cache = WidthCache::default();
    let mut fit = |text: &str, viewport: f32| {
        fit_font_size(text, viewport, 48.0, 16.0, |t, f, b| cache.estimate(t, f, b))
    };

    let short = fit("Welcome, sam", 400.0);
    assert_eq!(short, 48.0);

    let long = fit("Welcome, bartholomew archibald the third", 20.0);
    assert!(long < 48.0);
    assert!(long >= 16.0);

    // Wrap detection is a separate signal from font size.
    assert!(has_wrapped(Some(0.0), Some(52.0)));
    assert!(!has_wrapped(Some(0.0), Some(0.5)));
}

#[test]
fn failed_submit_renders_catalog_copy() {
    // The form validates, maps the failure to a code, and renders.
    assert!(!is_valid_email("sam@nope"));
    let def = lookup_str("INVALID_EMAIL_FORMAT");
    assert_eq!(def.title, "Invalid email address");

    let variant = def.variant(17);
    assert!(variant.iter().any(|s| matches!(s, MsgSegment::Email { .. })));

    // Unknown codes from a newer backend still render something.
    let fallback = lookup_str("RATE_LIMITED_V2");
    assert_eq!(fallback.title, lookup(ErrorCode::Default).title);
}
