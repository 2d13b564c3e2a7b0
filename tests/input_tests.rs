// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn drag_tracker_reports_incremental_deltas() {
    let mut t = DragTracker::default();
    assert!(!t.is_active());
    assert_eq!(t.delta(1, 100.0), None);
    assert!(!t.is_active(), "hover moves must not start a gesture");

    assert!(t.begin(1, 100.0));
    assert!(t.is_active());
    assert_eq!(t.delta(1, 130.0), Some(30.0));
    assert_eq!(t.delta(1, 125.0), Some(-5.0));
    assert_eq!(t.delta(1, 125.0), Some(0.0));
    assert!(t.end(1));
    assert!(!t.end(1));
    assert_eq!(t.delta(1, 200.0), None);
}

#[test]
fn drag_tracker_restarts_from_new_origin() {
    let mut t = DragTracker::default();
    t.begin(1, 10.0);
    t.delta(1, 50.0);
    t.end(1);
    assert!(t.begin(2, 300.0));
    assert_eq!(t.delta(2, 310.0), Some(10.0));
}

#[test]
fn second_pointer_cannot_hijack_gesture() {
    let mut t = DragTracker::default();
    assert!(t.begin(1, 100.0));
    assert!(!t.begin(2, 400.0));

    // the other finger's moves neither report nor disturb the baseline
    assert_eq!(t.delta(2, 420.0), None);
    assert_eq!(t.delta(1, 110.0), Some(10.0));

    // lifting the other finger leaves the gesture running
    assert!(!t.end(2));
    assert!(t.is_active());
    assert_eq!(t.delta(1, 105.0), Some(-5.0));
    assert!(t.end(1));
    assert!(!t.is_active());
}

#[test]
fn keys_in_form_fields_and_shortcuts_are_left_alone() {
    assert!(carousel_owns_key(&KeyContext::default()));
    assert!(carousel_owns_key(&KeyContext {
        target_tag: Some("BODY"),
        ..Default::default()
    }));
    assert!(carousel_owns_key(&KeyContext {
        target_tag: Some("BUTTON"),
        ..Default::default()
    }));

    for tag in ["INPUT", "TEXTAREA", "SELECT", "input"] {
        let ctx = KeyContext {
            target_tag: Some(tag),
            ..Default::default()
        };
        assert!(!carousel_owns_key(&ctx), "{tag} should keep its keys");
    }
    assert!(!carousel_owns_key(&KeyContext {
        target_tag: Some("DIV"),
        target_editable: true,
        ..Default::default()
    }));
    assert!(!carousel_owns_key(&KeyContext {
        ctrl: true,
        ..Default::default()
    }));
    assert!(!carousel_owns_key(&KeyContext {
        meta: true,
        ..Default::default()
    }));
    assert!(!carousel_owns_key(&KeyContext {
        alt: true,
        ..Default::default()
    }));
}

#[test]
fn step_for_key_maps_arrows() {
    assert_eq!(step_for_key("ArrowRight"), Some(1));
    assert_eq!(step_for_key("ArrowLeft"), Some(-1));
    assert_eq!(step_for_key("l"), Some(1));
    assert_eq!(step_for_key("H"), Some(-1));
    assert_eq!(step_for_key("ArrowUp"), None);
    assert_eq!(step_for_key(" "), None);
}

#[test]
fn index_for_digit_is_one_based_and_bounded() {
    assert_eq!(index_for_digit("1", 5), Some(0));
    assert_eq!(index_for_digit("5", 5), Some(4));
    assert_eq!(index_for_digit("6", 5), None);
    assert_eq!(index_for_digit("0", 5), None);
    assert_eq!(index_for_digit("x", 5), None);
}
