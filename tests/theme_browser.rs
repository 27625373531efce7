//! Browser-only checks for theme persistence and application.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use webatlas::config::THEME_STORAGE_KEY;
use webatlas::models::Theme;
use webatlas::utils::dom;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn stored_preference_round_trips() {
    Theme::Dark.store();
    assert_eq!(Theme::load(), Theme::Dark);

    Theme::Light.store();
    assert_eq!(Theme::load(), Theme::Light);
}

#[wasm_bindgen_test]
fn load_defaults_to_light_when_absent() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(THEME_STORAGE_KEY);
    }
    assert_eq!(Theme::load(), Theme::Light);
}

#[wasm_bindgen_test]
fn apply_sets_the_document_attribute() {
    Theme::Dark.apply();
    let root = dom::document_root().expect("document root");
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));

    Theme::Light.apply();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
}
