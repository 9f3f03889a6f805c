//! Damped spring evaluated in closed form.
//!
//! A [`Spring`] remembers where it started, how fast it was moving and when it
//! was last retargeted. Its value at any later instant is a pure function of
//! elapsed time, so sampling it twice for the same frame gives the same answer
//! and nothing has to be stepped from the render loop.

use instant::Instant;

use crate::constants::{SPRING_DAMPING, SPRING_STIFFNESS};

/// Stiffness and damping of a unit-mass spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }
}

impl SpringParams {
    /// Undamped natural frequency in radians per second.
    #[inline]
    pub fn natural_frequency(&self) -> f32 {
        self.stiffness.sqrt()
    }

    /// 1.0 is critical; below rings, above crawls.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * self.natural_frequency())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Spring {
    params: SpringParams,
    origin: f32,
    velocity: f32,
    target: f32,
    start: Option<Instant>,
}

impl Spring {
    /// A spring resting at `value`.
    pub fn at_rest(value: f32, params: SpringParams) -> Self {
        Self {
            params,
            origin: value,
            velocity: 0.0,
            target: value,
            start: None,
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        self.state_at(now).0
    }

    pub fn velocity_at(&self, now: Instant) -> f32 {
        self.state_at(now).1
    }

    /// Start moving toward `target` from wherever the spring is at `now`,
    /// carrying its current velocity over.
    pub fn retarget(&mut self, now: Instant, target: f32) {
        let (pos, vel) = self.state_at(now);
        self.origin = pos;
        self.velocity = vel;
        self.target = target;
        self.start = Some(now);
    }

    /// Jump to `value` with no motion.
    pub fn settle(&mut self, value: f32) {
        *self = Self::at_rest(value, self.params);
    }

    fn state_at(&self, now: Instant) -> (f32, f32) {
        let Some(start) = self.start else {
            return (self.target, 0.0);
        };
        let t = now.saturating_duration_since(start).as_secs_f32();
        let (offset, vel) =
            damped_offset(self.params, self.origin - self.target, self.velocity, t);
        (self.target + offset, vel)
    }
}

/// Offset from the target and its derivative after `t` seconds, given the
/// offset `a` and velocity `v0` at t = 0.
fn damped_offset(params: SpringParams, a: f32, v0: f32, t: f32) -> (f32, f32) {
    let omega = params.natural_frequency();
    let zeta = params.damping_ratio();

    if (zeta - 1.0).abs() < 1e-4 {
        let e = (-omega * t).exp();
        let c = v0 + omega * a;
        let d = (a + c * t) * e;
        return (d, c * e - omega * d);
    }

    if zeta < 1.0 {
        let decay = zeta * omega;
        let wd = omega * (1.0 - zeta * zeta).sqrt();
        let b = (v0 + decay * a) / wd;
        let e = (-decay * t).exp();
        let (s, c) = (wd * t).sin_cos();
        let d = e * (a * c + b * s);
        let dv = -decay * d + e * wd * (b * c - a * s);
        return (d, dv);
    }

    let s = omega * (zeta * zeta - 1.0).sqrt();
    let r1 = -zeta * omega + s;
    let r2 = -zeta * omega - s;
    let c2 = (v0 - r1 * a) / (r2 - r1);
    let c1 = a - c2;
    let e1 = (r1 * t).exp();
    let e2 = (r2 * t).exp();
    (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
}
