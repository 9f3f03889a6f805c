use std::time::Duration;

use blob_core::*;
use glam::Vec3;
use instant::Instant;

#[test]
fn toggling_flips_between_the_two_themes() {
    assert_eq!(Theme::default(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn palettes_are_distinct_and_populated() {
    assert_eq!(Theme::Dark.palette().len(), 3);
    assert_eq!(Theme::Light.palette().len(), 3);
    assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
    for rgb in Theme::Dark.palette().iter().chain(Theme::Light.palette()) {
        assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn ink_contrasts_with_background() {
    for theme in [Theme::Dark, Theme::Light] {
        let d = (theme.primary_ink() - theme.background()).length();
        assert!(d > 1.0, "{theme:?} ink too close to background");
    }
}

#[test]
fn ease_in_out_cubic_hits_its_anchors() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    assert_eq!(ease_in_out_cubic(-3.0), 0.0);
    assert_eq!(ease_in_out_cubic(7.0), 1.0);
    let mut prev = 0.0;
    for i in 0..=100 {
        let v = ease_in_out_cubic(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn fade_moves_background_over_its_duration() {
    let t0 = Instant::now();
    let mut fade = ThemeFade::settled(Theme::Dark, 1.2);
    assert_eq!(fade.color_at(t0), Vec3::ZERO);
    fade.begin(t0, Theme::Light);
    assert_eq!(fade.color_at(t0), Vec3::ZERO);
    let mid = fade.color_at(t0 + Duration::from_millis(600));
    assert!((mid - Vec3::splat(0.5)).length() < 1e-4);
    assert_eq!(fade.color_at(t0 + Duration::from_millis(1200)), Vec3::ONE);
    assert_eq!(fade.color_at(t0 + Duration::from_secs(60)), Vec3::ONE);
}

#[test]
fn reversing_mid_fade_starts_from_the_shown_color() {
    let t0 = Instant::now();
    let mut fade = ThemeFade::settled(Theme::Dark, 1.2);
    fade.begin(t0, Theme::Light);
    let t1 = t0 + Duration::from_millis(300);
    let shown = fade.color_at(t1);
    fade.begin(t1, Theme::Dark);
    assert!((fade.color_at(t1) - shown).length() < 1e-6);
    assert_eq!(fade.color_at(t1 + Duration::from_secs(2)), Vec3::ZERO);
}

#[test]
fn zero_duration_fade_is_instant() {
    let t0 = Instant::now();
    let mut fade = ThemeFade::settled(Theme::Light, 0.0);
    fade.begin(t0, Theme::Dark);
    assert_eq!(fade.color_at(t0), Vec3::ZERO);
}
