//! Per-frame assembly of shader parameters from the tracked state.

use glam::Vec2;
use instant::Instant;

use crate::morph::AnimationState;
use crate::pointer::PointerState;
use crate::theme::{Theme, ThemeFade};
use crate::tuning::Tuning;
use crate::uniforms::{FrameUniforms, Paint};

/// Turns the current animation and pointer state into [`FrameUniforms`].
///
/// Holds only the clock origin and the output constants; all mutable state is
/// passed in by reference so synthesis cannot change it.
#[derive(Clone, Copy, Debug)]
pub struct FrameSynthesizer {
    epoch: Instant,
    time_offset_secs: f64,
    time_period_secs: f64,
    pointer_sentinel: Vec2,
}

impl FrameSynthesizer {
    pub fn new(epoch: Instant, tuning: &Tuning) -> Self {
        Self {
            epoch,
            time_offset_secs: 0.0,
            time_period_secs: tuning.time_period_secs,
            pointer_sentinel: Vec2::from(tuning.pointer_sentinel),
        }
    }

    /// Phase the time feed starts at, in seconds. Hosts seed this from the
    /// wall clock so each run opens on a different shape.
    pub fn with_time_offset(mut self, offset_secs: f64) -> Self {
        if offset_secs.is_finite() {
            self.time_offset_secs = offset_secs.rem_euclid(self.time_period_secs);
        }
        self
    }

    pub fn synthesize(
        &self,
        now: Instant,
        viewport_size: Vec2,
        anim: &AnimationState,
        pointer: &PointerState,
    ) -> FrameUniforms {
        let elapsed = now.saturating_duration_since(self.epoch).as_secs_f64();
        let time = wrap_time(self.time_offset_secs + elapsed, self.time_period_secs);

        let (position, speed) = pointer.current_sample();
        let pointer = position
            .map(|p| normalize_pointer(p, viewport_size, self.pointer_sentinel))
            .unwrap_or(self.pointer_sentinel);

        FrameUniforms {
            viewport_size,
            time,
            complexity: finite_or(anim.complexity_at(now), anim.complexity_target()),
            evolution: finite_or(anim.evolution_at(now), anim.evolution_accumulator()),
            trigger_elapsed: anim.elapsed_since(now),
            pointer,
            pointer_speed: finite_or(speed, 0.0).max(0.0),
        }
    }

    pub fn paint(
        &self,
        now: Instant,
        theme: Theme,
        anim: &AnimationState,
        fade: &ThemeFade,
    ) -> Paint {
        Paint {
            fill: anim.fill_color(now, theme),
            background: fade.color_at(now),
        }
    }
}

/// Wrap a running clock into `[0, period)`.
pub fn wrap_time(seconds: f64, period_secs: f64) -> f32 {
    let wrapped = seconds.rem_euclid(period_secs) as f32;
    // narrowing can round up onto the period itself
    if wrapped >= period_secs as f32 {
        0.0
    } else {
        wrapped
    }
}

/// Map a pixel position to shape space: the viewport center is the origin and
/// the shorter side spans \[-1, 1\], so the shape keeps its aspect on any
/// window. Degenerate viewports yield `sentinel`.
pub fn normalize_pointer(position: Vec2, viewport_size: Vec2, sentinel: Vec2) -> Vec2 {
    let min_dim = viewport_size.x.min(viewport_size.y);
    if !(min_dim > 0.0 && min_dim.is_finite()) {
        return sentinel;
    }
    let m = (position - viewport_size * 0.5) / min_dim * 2.0;
    if m.is_finite() {
        m
    } else {
        sentinel
    }
}

#[inline]
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
