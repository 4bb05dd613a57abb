// Host-side tests for the key map.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::{action_for_key, KeyAction};

#[test]
fn mapped_keys_ignore_case() {
    let cases = [
        ("r", KeyAction::Reset),
        ("s", KeyAction::CycleShape),
        ("p", KeyAction::ToggleTrails),
        ("x", KeyAction::ToggleSpin),
        ("h", KeyAction::ToggleHint),
    ];
    for (key, action) in cases {
        assert_eq!(action_for_key(key), Some(action), "key {key}");
        assert_eq!(
            action_for_key(&key.to_uppercase()),
            Some(action),
            "key {}",
            key.to_uppercase()
        );
    }
}

#[test]
fn symbol_keys() {
    assert_eq!(action_for_key("Escape"), Some(KeyAction::ReleaseFocus));
    assert_eq!(action_for_key("["), Some(KeyAction::PowerDown));
    assert_eq!(action_for_key("]"), Some(KeyAction::PowerUp));
}

#[test]
fn unmapped_keys() {
    for key in ["", "a", "Enter", " ", "escape", "{", "}", "ArrowUp", "notakey"] {
        assert_eq!(action_for_key(key), None, "key {key:?}");
    }
}
