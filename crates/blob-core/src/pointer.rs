use glam::Vec2;

use crate::constants::{POINTER_EXIT_DECAY, POINTER_SPEED_BLEND};

/// Latest pointer sample plus a smoothed speed estimate.
///
/// Speed is measured in pixels per sample, not per second: hosts deliver
/// pointer events at roughly display rate, and the shader only cares about
/// relative agitation.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    last_known: Option<Vec2>,
    previous: Option<Vec2>,
    smoothed_speed: f32,
    speed_blend: f32,
    exit_decay: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(POINTER_SPEED_BLEND, POINTER_EXIT_DECAY)
    }
}

impl PointerState {
    pub fn new(speed_blend: f32, exit_decay: f32) -> Self {
        Self {
            last_known: None,
            previous: None,
            smoothed_speed: 0.0,
            speed_blend,
            exit_decay,
        }
    }

    pub fn on_pointer_move(&mut self, position: Vec2) {
        if !position.is_finite() {
            log::trace!("[pointer] dropped non-finite sample {position:?}");
            return;
        }
        if let Some(prev) = self.previous {
            let dist = position.distance(prev);
            self.smoothed_speed =
                self.smoothed_speed * (1.0 - self.speed_blend) + dist * self.speed_blend;
        }
        self.previous = Some(position);
        self.last_known = Some(position);
    }

    /// End of a hover session. Speed decays by a one-shot factor rather than
    /// dropping to zero; every call applies it again.
    pub fn on_pointer_exit(&mut self) {
        self.last_known = None;
        self.previous = None;
        self.smoothed_speed *= self.exit_decay;
    }

    pub fn current_sample(&self) -> (Option<Vec2>, f32) {
        (self.last_known, self.smoothed_speed)
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.last_known
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.smoothed_speed
    }
}
