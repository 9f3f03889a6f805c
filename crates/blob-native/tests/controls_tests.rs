// Host-side tests for input mapping.
// The front-end is a binary, so we include the pure module directly.

#![allow(dead_code)]
mod controls {
    include!("../src/controls.rs");
}

use controls::*;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{Key, NamedKey};

#[test]
fn space_morphs_and_t_toggles_theme() {
    let space = Key::Named(NamedKey::Space);
    assert_eq!(
        action_for_key(&space, ElementState::Pressed, false),
        Some(HostAction::Morph)
    );
    let t = Key::Character("t".into());
    assert_eq!(
        action_for_key(&t, ElementState::Pressed, false),
        Some(HostAction::ToggleTheme)
    );
    let upper = Key::Character("T".into());
    assert_eq!(
        action_for_key(&upper, ElementState::Pressed, false),
        Some(HostAction::ToggleTheme)
    );
}

#[test]
fn releases_repeats_and_other_keys_are_ignored() {
    let space = Key::Named(NamedKey::Space);
    assert_eq!(action_for_key(&space, ElementState::Released, false), None);
    assert_eq!(action_for_key(&space, ElementState::Pressed, true), None);
    assert_eq!(
        action_for_key(&Key::Character("x".into()), ElementState::Pressed, false),
        None
    );
    assert_eq!(
        action_for_key(&Key::Named(NamedKey::Enter), ElementState::Pressed, false),
        None
    );
}

#[test]
fn left_press_morphs() {
    assert_eq!(
        action_for_button(MouseButton::Left, ElementState::Pressed),
        Some(HostAction::Morph)
    );
    assert_eq!(action_for_button(MouseButton::Left, ElementState::Released), None);
    assert_eq!(action_for_button(MouseButton::Right, ElementState::Pressed), None);
}

#[test]
fn window_theme_maps_to_scene_theme() {
    assert_eq!(
        theme_from_window(winit::window::Theme::Dark),
        blob_core::Theme::Dark
    );
    assert_eq!(
        theme_from_window(winit::window::Theme::Light),
        blob_core::Theme::Light
    );
}

#[test]
fn seed_parsing_accepts_integers_only() {
    assert_eq!(parse_seed(None), None);
    assert_eq!(parse_seed(Some("")), None);
    assert_eq!(parse_seed(Some("  42 ")), Some(42));
    assert_eq!(parse_seed(Some("18446744073709551615")), Some(u64::MAX));
    assert_eq!(parse_seed(Some("-1")), None);
    assert_eq!(parse_seed(Some("blob")), None);
}
