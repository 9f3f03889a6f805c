//! Every number the pipeline depends on, grouped so a host can adjust the feel
//! in one place. `Tuning::default()` reproduces the reference behavior.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::constants::*;
use crate::spring::SpringParams;

#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{name} range is inverted or not finite: {lo}..={hi}")]
    BadRange { name: &'static str, lo: f32, hi: f32 },
    #[error("complexity default {0} lies outside the complexity range")]
    DefaultOutOfRange(f32),
    #[error("{name} must lie in [0, 1], got {value}")]
    BadFactor { name: &'static str, value: f32 },
    #[error("spring stiffness and damping must be positive, got k={stiffness} c={damping}")]
    BadSpring { stiffness: f32, damping: f32 },
    #[error("evolution spring must not ring, damping ratio {0} is below 1")]
    UnderdampedEvolution(f32),
    #[error("time period must be positive and finite, got {0}")]
    BadPeriod(f64),
    #[error("pointer sentinel must be finite, got {0:?}")]
    BadSentinel([f32; 2]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    pub complexity_default: f32,
    pub complexity_range: RangeInclusive<f32>,
    pub evolution_step: RangeInclusive<f32>,
    pub speed_blend: f32,
    pub exit_decay: f32,
    pub time_period_secs: f64,
    pub pointer_sentinel: [f32; 2],
    pub spring: SpringParams,
    pub evolution_spring: SpringParams,
    pub theme_fade_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            complexity_default: COMPLEXITY_DEFAULT,
            complexity_range: COMPLEXITY_MIN..=COMPLEXITY_MAX,
            evolution_step: EVOLUTION_STEP_MIN..=EVOLUTION_STEP_MAX,
            speed_blend: POINTER_SPEED_BLEND,
            exit_decay: POINTER_EXIT_DECAY,
            time_period_secs: TIME_PERIOD_SECS,
            pointer_sentinel: POINTER_SENTINEL,
            spring: SpringParams::default(),
            evolution_spring: SpringParams {
                stiffness: SPRING_STIFFNESS,
                damping: EVOLUTION_SPRING_DAMPING,
            },
            theme_fade_secs: THEME_FADE_SECS,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        check_range("complexity", &self.complexity_range)?;
        check_range("evolution step", &self.evolution_step)?;
        if !self.complexity_range.contains(&self.complexity_default) {
            return Err(TuningError::DefaultOutOfRange(self.complexity_default));
        }
        // a negative step would break the accumulator's monotonicity
        if *self.evolution_step.start() < 0.0 {
            return Err(TuningError::BadRange {
                name: "evolution step",
                lo: *self.evolution_step.start(),
                hi: *self.evolution_step.end(),
            });
        }
        check_factor("speed blend", self.speed_blend)?;
        check_factor("exit decay", self.exit_decay)?;
        check_spring(self.spring)?;
        check_spring(self.evolution_spring)?;
        let ratio = self.evolution_spring.damping_ratio();
        if ratio < 1.0 - 1e-4 {
            return Err(TuningError::UnderdampedEvolution(ratio));
        }
        if !(self.time_period_secs > 0.0 && self.time_period_secs.is_finite()) {
            return Err(TuningError::BadPeriod(self.time_period_secs));
        }
        if !self.pointer_sentinel.iter().all(|v| v.is_finite()) {
            return Err(TuningError::BadSentinel(self.pointer_sentinel));
        }
        Ok(())
    }
}

fn check_range(name: &'static str, range: &RangeInclusive<f32>) -> Result<(), TuningError> {
    let (lo, hi) = (*range.start(), *range.end());
    if lo.is_finite() && hi.is_finite() && lo <= hi {
        Ok(())
    } else {
        Err(TuningError::BadRange { name, lo, hi })
    }
}

fn check_spring(params: SpringParams) -> Result<(), TuningError> {
    let SpringParams { stiffness, damping } = params;
    if stiffness > 0.0 && damping > 0.0 && stiffness.is_finite() && damping.is_finite() {
        Ok(())
    } else {
        Err(TuningError::BadSpring { stiffness, damping })
    }
}

fn check_factor(name: &'static str, value: f32) -> Result<(), TuningError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TuningError::BadFactor { name, value })
    }
}
