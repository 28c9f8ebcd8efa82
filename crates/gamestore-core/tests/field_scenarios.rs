//! Scenario tests: a user typing into a password field inside a form,
//! tabbing to it, and loading a cart seed from disk.

use std::io::Write;

use gamestore_core::{
    CartStore, FocusRing, Focusable, Keystroke, Masking, PasswordFieldState, PasswordPolicy,
    StoreError,
};
use tempfile::NamedTempFile;

#[test]
fn typing_a_sentence_reveals_toggle_and_reports_each_key() {
    let mut field = PasswordFieldState::new("");
    let text = "This is my new text";
    let mut calls = Vec::new();

    for (i, c) in text.chars().enumerate() {
        if let Some(value) = field.apply(Keystroke::Insert(c)) {
            calls.push(value);
        }
        if i == 0 {
            assert!(field.is_toggle_shown(), "toggle shown after first character");
        }
    }

    assert_eq!(calls.len(), text.len());
    assert_eq!(calls.last().map(String::as_str), Some(text));

    assert_eq!(field.toggle_masking(), Masking::Unmasked);
    assert_eq!(field.toggle_label(), "Hide password");
    assert_eq!(field.text(), text);
}

#[test]
fn tab_from_body_reaches_enabled_field_only() {
    let enabled = PasswordFieldState::new("");
    let mut ring = FocusRing::new(vec![enabled.focusable("PasswordField")]);
    assert!(ring.focused().is_none());
    assert_eq!(ring.tab(), Some("PasswordField"));

    let disabled = PasswordFieldState::new("").with_disabled(true);
    let mut ring = FocusRing::new(vec![disabled.focusable("PasswordField")]);
    assert_eq!(ring.tab(), None);
    assert!(ring.focused().is_none());
}

#[test]
fn disabled_field_between_buttons_is_skipped() {
    let field = PasswordFieldState::new("").with_disabled(true);
    let mut ring = FocusRing::new(vec![
        Focusable::new("email"),
        field.focusable("password"),
        Focusable::new("submit"),
    ]);
    assert_eq!(ring.tab(), Some("email"));
    assert_eq!(ring.tab(), Some("submit"));
}

#[test]
fn host_policy_feeds_error_text() {
    let mut field = PasswordFieldState::new("");
    let mut last = None;
    for c in "short".chars() {
        last = field.apply(Keystroke::Insert(c));
    }
    let error = PasswordPolicy::default()
        .validate(last.as_deref().unwrap_or_default())
        .err()
        .map(|e| e.to_string());
    assert_eq!(error.as_deref(), Some("Password must be at least 8 characters"));
}

#[test]
fn load_cart_seed_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "1", "title": "Red Dead Redemption 2", "img": "/img/rdr2.jpg", "price": 21500}},
            {{"id": "2", "title": "Borderlands 3", "price": 4999}}
        ]"#
    )
    .unwrap();

    let cart = CartStore::load(file.path()).unwrap();
    assert_eq!(cart.quantity(), 2);
    assert_eq!(cart.formatted_total(), "$264.99");
}

#[test]
fn load_missing_seed_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CartStore::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}
