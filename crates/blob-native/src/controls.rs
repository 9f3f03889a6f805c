use blob_core::Theme;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{Key, NamedKey};

/// Environment variable holding an optional RNG seed for reproducible sessions.
pub const SEED_ENV: &str = "BLOBBER_SEED";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostAction {
    Morph,
    ToggleTheme,
}

// Space morphs, T flips the theme. Held keys do not retrigger.
#[inline]
pub fn action_for_key(key: &Key, state: ElementState, repeat: bool) -> Option<HostAction> {
    if state != ElementState::Pressed || repeat {
        return None;
    }
    match key {
        Key::Named(NamedKey::Space) => Some(HostAction::Morph),
        Key::Character(c) if c.eq_ignore_ascii_case("t") => Some(HostAction::ToggleTheme),
        _ => None,
    }
}

// Any left click on the surface morphs.
#[inline]
pub fn action_for_button(button: MouseButton, state: ElementState) -> Option<HostAction> {
    match (button, state) {
        (MouseButton::Left, ElementState::Pressed) => Some(HostAction::Morph),
        _ => None,
    }
}

#[inline]
pub fn theme_from_window(theme: winit::window::Theme) -> Theme {
    match theme {
        winit::window::Theme::Dark => Theme::Dark,
        winit::window::Theme::Light => Theme::Light,
    }
}

pub fn parse_seed(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("[config] ignoring {SEED_ENV}={raw:?}: {e}");
            None
        }
    }
}
