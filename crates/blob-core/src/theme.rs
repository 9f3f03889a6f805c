//! Dark/light theme, the palettes tied to each, and the background cross-fade.

use glam::Vec3;
use instant::Instant;

use crate::constants::{DARK_PALETTE, LIGHT_PALETTE};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Colors a morph may pick from while this theme is active.
    pub fn palette(self) -> &'static [[f32; 3]] {
        match self {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }

    /// Fill used before any morph has chosen a color.
    pub fn primary_ink(self) -> Vec3 {
        match self {
            Theme::Dark => Vec3::ONE,
            Theme::Light => Vec3::ZERO,
        }
    }

    pub fn background(self) -> Vec3 {
        match self {
            Theme::Dark => Vec3::ZERO,
            Theme::Light => Vec3::ONE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark Mode",
            Theme::Light => "Light Mode",
        }
    }
}

/// Eased cross-fade of the background between two themes.
#[derive(Clone, Copy, Debug)]
pub struct ThemeFade {
    from: Vec3,
    to: Vec3,
    start: Option<Instant>,
    duration_secs: f32,
}

impl ThemeFade {
    pub fn settled(theme: Theme, duration_secs: f32) -> Self {
        Self {
            from: theme.background(),
            to: theme.background(),
            start: None,
            duration_secs,
        }
    }

    /// Begin fading toward `theme`, starting from the color shown at `now` so
    /// that a toggle mid-fade reverses smoothly.
    pub fn begin(&mut self, now: Instant, theme: Theme) {
        self.from = self.color_at(now);
        self.to = theme.background();
        self.start = Some(now);
    }

    #[inline]
    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    pub fn color_at(&self, now: Instant) -> Vec3 {
        let Some(start) = self.start else {
            return self.to;
        };
        if self.duration_secs <= 0.0 {
            return self.to;
        }
        let t = now.saturating_duration_since(start).as_secs_f32() / self.duration_secs;
        self.from.lerp(self.to, ease_in_out_cubic(t))
    }
}

/// Cubic ease-in-out on \[0, 1\]; input is clamped.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
