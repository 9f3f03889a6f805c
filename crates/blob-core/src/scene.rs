//! Owned state for one blob surface and the input-event mutators a host calls.

use glam::Vec2;
use instant::Instant;

use crate::morph::{AnimationState, MorphOutcome};
use crate::pointer::PointerState;
use crate::random::{RandomSource, SeededRandom};
use crate::synth::FrameSynthesizer;
use crate::theme::{Theme, ThemeFade};
use crate::tuning::{Tuning, TuningError};
use crate::uniforms::{FrameUniforms, Paint, ShaderUniforms};

pub struct Scene<R: RandomSource = SeededRandom> {
    anim: AnimationState,
    pointer: PointerState,
    synth: FrameSynthesizer,
    theme: Theme,
    fade: ThemeFade,
    rng: R,
}

impl Scene<SeededRandom> {
    /// Scene with reference tuning, dark theme and an entropy-seeded RNG.
    pub fn new(now: Instant) -> Self {
        let tuning = Tuning::default();
        Self::build(now, &tuning, SeededRandom::from_entropy())
    }
}

impl<R: RandomSource> Scene<R> {
    pub fn with_tuning(now: Instant, tuning: Tuning, rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(now, &tuning, rng))
    }

    fn build(now: Instant, tuning: &Tuning, rng: R) -> Self {
        let theme = Theme::default();
        Self {
            anim: AnimationState::new(tuning),
            pointer: PointerState::new(tuning.speed_blend, tuning.exit_decay),
            synth: FrameSynthesizer::new(now, tuning),
            theme,
            fade: ThemeFade::settled(theme, tuning.theme_fade_secs),
            rng,
        }
    }

    pub fn with_time_offset(mut self, offset_secs: f64) -> Self {
        self.synth = self.synth.with_time_offset(offset_secs);
        self
    }

    /// Start in `theme` without fading into it.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.fade = ThemeFade::settled(theme, self.fade_duration());
        self
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.on_pointer_move(position);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.on_pointer_exit();
    }

    pub fn trigger(&mut self, now: Instant) -> MorphOutcome {
        self.anim.trigger(now, self.theme, &mut self.rng)
    }

    pub fn set_theme(&mut self, now: Instant, theme: Theme) {
        if theme == self.theme {
            return;
        }
        log::debug!("[theme] {} -> {}", self.theme.label(), theme.label());
        self.theme = theme;
        self.fade.begin(now, theme);
    }

    pub fn toggle_theme(&mut self, now: Instant) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(now, next);
        next
    }

    pub fn frame(&self, now: Instant, viewport_size: Vec2) -> FrameUniforms {
        self.synth.synthesize(now, viewport_size, &self.anim, &self.pointer)
    }

    pub fn paint(&self, now: Instant) -> Paint {
        self.synth.paint(now, self.theme, &self.anim, &self.fade)
    }

    pub fn shader_uniforms(&self, now: Instant, viewport_size: Vec2) -> ShaderUniforms {
        ShaderUniforms::pack(&self.frame(now, viewport_size), &self.paint(now))
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[inline]
    pub fn animation(&self) -> &AnimationState {
        &self.anim
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    fn fade_duration(&self) -> f32 {
        self.fade.duration_secs()
    }
}
