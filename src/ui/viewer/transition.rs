// SPDX-License-Identifier: MPL-2.0
//! Eased transition between two displayed transforms.

use super::state::Transform;
use crate::config::TRANSFORM_TRANSITION_MS;
use std::time::{Duration, Instant};

const DURATION: Duration = Duration::from_millis(TRANSFORM_TRANSITION_MS);

/// Cubic ease-out.
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: Transform,
    to: Transform,
    started: Instant,
}

impl Transition {
    /// Settled on `transform`, nothing left to animate.
    #[must_use]
    pub fn settled(transform: Transform, now: Instant) -> Self {
        Self {
            from: transform,
            to: transform,
            started: now.checked_sub(DURATION).unwrap_or(now),
        }
    }

    /// Retargets towards `to`, starting from wherever the image is drawn now.
    pub fn retarget(&mut self, to: Transform, now: Instant) {
        if to == self.to {
            return;
        }
        self.from = self.current(now);
        self.to = to;
        self.started = now;
    }

    /// Jumps straight to `to`. Used while dragging so the image tracks the pointer.
    pub fn snap(&mut self, to: Transform, now: Instant) {
        *self = Self::settled(to, now);
    }

    #[must_use]
    pub fn target(&self) -> Transform {
        self.to
    }

    #[must_use]
    pub fn current(&self, now: Instant) -> Transform {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= DURATION {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / DURATION.as_secs_f32();
        self.from.lerp(self.to, ease_out(t))
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.from != self.to && now.saturating_duration_since(self.started) < DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Vector;

    fn zoomed() -> Transform {
        Transform {
            translation: Vector::new(40.0, 0.0),
            scale: 2.0,
        }
    }

    #[test]
    fn settled_transition_is_not_animating() {
        let now = Instant::now();
        let transition = Transition::settled(Transform::IDENTITY, now);
        assert!(!transition.is_animating(now));
        assert_eq!(transition.current(now), Transform::IDENTITY);
    }

    #[test]
    fn retarget_eases_towards_target() {
        let start = Instant::now();
        let mut transition = Transition::settled(Transform::IDENTITY, start);
        transition.retarget(zoomed(), start);

        assert!(transition.is_animating(start));
        assert_eq!(transition.current(start), Transform::IDENTITY);

        let halfway = transition.current(start + DURATION / 2);
        assert!(halfway.scale > 1.5 && halfway.scale < 2.0);

        assert_eq!(transition.current(start + DURATION), zoomed());
        assert!(!transition.is_animating(start + DURATION));
    }

    #[test]
    fn snap_skips_animation() {
        let now = Instant::now();
        let mut transition = Transition::settled(Transform::IDENTITY, now);
        transition.snap(zoomed(), now);
        assert!(!transition.is_animating(now));
        assert_eq!(transition.current(now), zoomed());
    }

    #[test]
    fn ease_out_is_monotonic() {
        let samples: Vec<f32> = (0..=10).map(|i| ease_out(i as f32 / 10.0)).collect();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[10], 1.0);
    }
}
