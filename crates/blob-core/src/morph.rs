//! Morph trigger: the discrete event that picks a new shape and color.

use std::ops::RangeInclusive;

use glam::Vec3;
use instant::Instant;

use crate::constants::{fallback_color_vec3, IDLE_TRIGGER_ELAPSED_SECS};
use crate::random::RandomSource;
use crate::spring::Spring;
use crate::theme::Theme;
use crate::tuning::Tuning;

/// What a single morph drew.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphOutcome {
    pub complexity: f32,
    pub evolution_step: f32,
    pub color: Vec3,
}

/// Targets chosen by the last morph and the springs that chase them.
#[derive(Clone, Debug)]
pub struct AnimationState {
    complexity_target: f32,
    evolution_accumulator: f32,
    active_color: Option<Vec3>,
    last_trigger: Option<Instant>,

    complexity: Spring,
    evolution: Spring,
    evolution_floor: f32,
    color_mix: Spring,
    color_from: Option<Vec3>,

    complexity_range: RangeInclusive<f32>,
    evolution_step: RangeInclusive<f32>,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(&Tuning::default())
    }
}

impl AnimationState {
    pub fn new(tuning: &Tuning) -> Self {
        let spring = tuning.spring;
        Self {
            complexity_target: tuning.complexity_default,
            evolution_accumulator: 0.0,
            active_color: None,
            last_trigger: None,
            complexity: Spring::at_rest(tuning.complexity_default, spring),
            evolution: Spring::at_rest(0.0, tuning.evolution_spring),
            evolution_floor: 0.0,
            color_mix: Spring::at_rest(1.0, spring),
            color_from: None,
            complexity_range: tuning.complexity_range.clone(),
            evolution_step: tuning.evolution_step.clone(),
        }
    }

    /// Draw new targets and start the springs toward them.
    ///
    /// Complexity is replaced, evolution only ever grows so every morph yields
    /// a shape the viewer has not seen, and the color comes from the palette of
    /// the theme active at `now`.
    pub fn trigger<R: RandomSource + ?Sized>(
        &mut self,
        now: Instant,
        theme: Theme,
        rng: &mut R,
    ) -> MorphOutcome {
        let (c_lo, c_hi) = (*self.complexity_range.start(), *self.complexity_range.end());
        let (e_lo, e_hi) = (*self.evolution_step.start(), *self.evolution_step.end());

        let complexity = rng.uniform(c_lo, c_hi).clamp(c_lo, c_hi);
        let evolution_step = rng.uniform(e_lo, e_hi).clamp(e_lo, e_hi);
        let palette = theme.palette();
        let color = rng
            .pick(palette.len())
            .and_then(|i| palette.get(i))
            .map(|rgb| Vec3::from(*rgb))
            .unwrap_or_else(fallback_color_vec3);

        self.color_from = Some(self.fill_color(now, theme));
        self.color_mix.settle(0.0);
        self.color_mix.retarget(now, 1.0);

        self.last_trigger = Some(now);
        self.complexity_target = complexity;
        self.evolution_accumulator += evolution_step;
        self.active_color = Some(color);
        self.complexity.retarget(now, complexity);
        self.evolution_floor = self.evolution_at(now);
        self.evolution.retarget(now, self.evolution_accumulator);

        log::debug!(
            "[morph] complexity={:.2} evolution={:.2} (+{:.2}) color=({:.2},{:.2},{:.2})",
            complexity,
            self.evolution_accumulator,
            evolution_step,
            color.x,
            color.y,
            color.z
        );

        MorphOutcome {
            complexity,
            evolution_step,
            color,
        }
    }

    /// Seconds from the last morph to `now`, never negative and not clamped
    /// from above. Before any morph this is a large idle value.
    pub fn elapsed_since(&self, now: Instant) -> f32 {
        match self.last_trigger {
            Some(at) => now.saturating_duration_since(at).as_secs_f32(),
            None => IDLE_TRIGGER_ELAPSED_SECS,
        }
    }

    pub fn complexity_at(&self, now: Instant) -> f32 {
        self.complexity.value_at(now)
    }

    /// Animated evolution. Never below the value shown at the last morph, so
    /// the emitted phase is non-decreasing across retargets.
    pub fn evolution_at(&self, now: Instant) -> f32 {
        self.evolution.value_at(now).max(self.evolution_floor)
    }

    /// Fill color shown at `now`, cross-fading from the previous color.
    pub fn fill_color(&self, now: Instant, theme: Theme) -> Vec3 {
        let to = self.active_color.unwrap_or_else(|| theme.primary_ink());
        match self.color_from {
            Some(from) => from.lerp(to, self.color_mix.value_at(now).clamp(0.0, 1.0)),
            None => to,
        }
    }

    #[inline]
    pub fn complexity_target(&self) -> f32 {
        self.complexity_target
    }

    #[inline]
    pub fn evolution_accumulator(&self) -> f32 {
        self.evolution_accumulator
    }

    #[inline]
    pub fn active_color(&self) -> Option<Vec3> {
        self.active_color
    }

    #[inline]
    pub fn last_trigger(&self) -> Option<Instant> {
        self.last_trigger
    }
}
