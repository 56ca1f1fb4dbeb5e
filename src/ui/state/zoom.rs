// SPDX-License-Identifier: MPL-2.0
//! Zoom scale management
//!
//! The viewer scale is changed through two input paths with different
//! ceilings: the mouse wheel (up to 4x) and the zoom buttons (up to 3x).
//! Each operation clamps with the bound of the path that produced it, so a
//! wheel-driven 4x survives until a button press pulls it back under 3x.

pub use crate::config::{
    BASE_SCALE, BUTTON_MAX_SCALE, BUTTON_ZOOM_IN_STEP, BUTTON_ZOOM_OUT_STEP, MIN_SCALE,
    PEEK_SCALE, WHEEL_MAX_SCALE, WHEEL_ZOOM_STEP,
};

/// Direction of a single wheel tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scrolling up, away from the user. Zooms in.
    Up,
    /// Scrolling down, toward the user. Zooms out.
    Down,
}

impl WheelDirection {
    /// Maps a vertical scroll amount (positive = up, as iced reports it).
    ///
    /// A purely horizontal scroll (`0.0`) counts as upward.
    #[must_use]
    pub fn from_vertical_delta(y: f32) -> Self {
        if y < 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }
}

/// Viewer zoom factor (1.0 = fitted image).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// Scale every viewer session starts from.
    pub const BASE: Self = Self(BASE_SCALE);

    /// Preview scale held before the first open.
    pub const PEEK: Self = Self(PEEK_SCALE);

    #[cfg(test)]
    pub(crate) fn from_raw(value: f32) -> Self {
        Self(value)
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the image is magnified beyond the fitted size, which is what
    /// enables panning.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.0 > MIN_SCALE
    }

    /// Whether the scale is exactly the peek value.
    #[must_use]
    pub fn is_peek(self) -> bool {
        #[allow(clippy::float_cmp)]
        let peek = self.0 == PEEK_SCALE;
        peek
    }

    /// Applies one wheel tick, bounded to `[MIN_SCALE, WHEEL_MAX_SCALE]`.
    #[must_use]
    pub fn wheel(self, direction: WheelDirection) -> Self {
        let delta = match direction {
            WheelDirection::Up => WHEEL_ZOOM_STEP,
            WheelDirection::Down => -WHEEL_ZOOM_STEP,
        };
        Self((self.0 + delta).clamp(MIN_SCALE, WHEEL_MAX_SCALE))
    }

    /// Applies the zoom-in button, bounded to `[MIN_SCALE, BUTTON_MAX_SCALE]`.
    #[must_use]
    pub fn button_zoom_in(self) -> Self {
        Self((self.0 + BUTTON_ZOOM_IN_STEP).clamp(MIN_SCALE, BUTTON_MAX_SCALE))
    }

    /// Applies the zoom-out button. Only the lower bound applies, so a
    /// wheel-driven value above the button ceiling steps down gradually.
    #[must_use]
    pub fn button_zoom_out(self) -> Self {
        Self((self.0 - BUTTON_ZOOM_OUT_STEP).max(MIN_SCALE))
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn wheel_up_from_base_adds_one_step() {
        let scale = Scale::BASE.wheel(WheelDirection::Up);
        assert_abs_diff_eq!(scale.value(), 1.1, epsilon = 1e-6);
    }

    #[test]
    fn wheel_never_leaves_its_range() {
        let mut scale = Scale::BASE;
        for _ in 0..60 {
            scale = scale.wheel(WheelDirection::Up);
            assert!(scale.value() >= MIN_SCALE && scale.value() <= WHEEL_MAX_SCALE);
        }
        assert_eq!(scale.value(), WHEEL_MAX_SCALE);

        for _ in 0..60 {
            scale = scale.wheel(WheelDirection::Down);
            assert!(scale.value() >= MIN_SCALE && scale.value() <= WHEEL_MAX_SCALE);
        }
        assert_eq!(scale.value(), MIN_SCALE);
    }

    #[test]
    fn button_zoom_in_stops_at_button_ceiling() {
        let mut scale = Scale::BASE;
        for _ in 0..20 {
            scale = scale.button_zoom_in();
            assert!(scale.value() >= MIN_SCALE && scale.value() <= BUTTON_MAX_SCALE);
        }
        assert_eq!(scale.value(), BUTTON_MAX_SCALE);
    }

    #[test]
    fn button_zoom_in_pulls_wheel_maximum_down_to_button_ceiling() {
        let mut scale = Scale::BASE;
        for _ in 0..40 {
            scale = scale.wheel(WheelDirection::Up);
        }
        assert_eq!(scale.button_zoom_in().value(), BUTTON_MAX_SCALE);
    }

    #[test]
    fn button_zoom_out_keeps_lower_bound_only() {
        let mut scale = Scale::BASE;
        for _ in 0..40 {
            scale = scale.wheel(WheelDirection::Up);
        }
        assert_abs_diff_eq!(scale.button_zoom_out().value(), 3.7, epsilon = 1e-5);

        let mut scale = Scale(2.0);
        for _ in 0..10 {
            scale = scale.button_zoom_out();
            assert!(scale.value() >= MIN_SCALE);
        }
        assert_eq!(scale.value(), MIN_SCALE);
    }

    #[test]
    fn vertical_delta_maps_to_direction() {
        assert_eq!(WheelDirection::from_vertical_delta(1.0), WheelDirection::Up);
        assert_eq!(WheelDirection::from_vertical_delta(-3.0), WheelDirection::Down);
        assert_eq!(WheelDirection::from_vertical_delta(0.0), WheelDirection::Up);
    }

    #[test]
    fn only_exact_peek_counts_as_peek() {
        assert!(Scale::PEEK.is_peek());
        assert!(!Scale::BASE.is_peek());
        assert!(!Scale(2.0).is_peek());
    }
}
