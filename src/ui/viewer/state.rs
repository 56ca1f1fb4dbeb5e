// SPDX-License-Identifier: MPL-2.0
//! Zoom/pan state of one viewer session and the geometry derived from it.

use crate::config::VIEWER_FIT_FRACTION;
use crate::ui::state::{DragState, Scale, WheelDirection};
use iced::{mouse, Point, Rectangle, Size, Vector};

/// What a double-click on the image does for a given scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleClickAction {
    ZoomIn,
    Reset,
}

/// Affine transform applied to the fitted image: translate, then scale about
/// the image center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vector,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vector::ZERO,
        scale: 1.0,
    };

    /// Linear interpolation towards `to`, `t` in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            translation: Vector::new(
                self.translation.x + (to.translation.x - self.translation.x) * t,
                self.translation.y + (to.translation.y - self.translation.y) * t,
            ),
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    /// Where an image of `fitted` size lands inside `viewport` under this transform.
    #[must_use]
    pub fn image_bounds(self, fitted: Size, viewport: Size) -> Rectangle {
        let size = Size::new(fitted.width * self.scale, fitted.height * self.scale);
        let center = Point::new(
            viewport.width / 2.0 + self.translation.x,
            viewport.height / 2.0 + self.translation.y,
        );
        Rectangle::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Size of the image at scale 1: its natural size, shrunk (never enlarged)
/// to fit a fraction of the viewport. Unknown natural size fills that area.
#[must_use]
// Image dimensions are far below f32's exact-integer limit.
#[allow(clippy::cast_precision_loss)]
pub fn fitted_size(natural: Option<Size<u32>>, viewport: Size) -> Size {
    let max = Size::new(
        viewport.width * VIEWER_FIT_FRACTION,
        viewport.height * VIEWER_FIT_FRACTION,
    );

    let Some(natural) = natural.filter(|n| n.width > 0 && n.height > 0) else {
        return max;
    };

    let width = natural.width as f32;
    let height = natural.height as f32;
    let factor = (max.width / width).min(max.height / height).min(1.0).max(0.0);

    Size::new(width * factor, height * factor)
}

/// Zoom, pan, and drag state for one open viewer.
///
/// Every mutation keeps `1 <= scale`, keeps the bound of the path that
/// produced the scale, and never leaves a drag active at scale 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    scale: Scale,
    pan_offset: Vector,
    drag: DragState,
}

impl ViewerState {
    /// Baseline state entered on every open.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: Scale::BASE,
            pan_offset: Vector::ZERO,
            drag: DragState::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_scale(scale: f32) -> Self {
        Self {
            scale: Scale::from_raw(scale),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    #[must_use]
    pub fn pan_offset(&self) -> Vector {
        self.pan_offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn drag_anchor(&self) -> Point {
        self.drag.anchor
    }

    /// One wheel tick.
    pub fn wheel(&mut self, direction: WheelDirection) {
        self.set_scale(self.scale.wheel(direction));
    }

    /// Zoom-in button.
    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale.button_zoom_in());
    }

    /// Zoom-out button.
    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale.button_zoom_out());
    }

    /// Back to scale 1 with no offset and no drag.
    pub fn reset(&mut self) {
        self.scale = Scale::BASE;
        self.pan_offset = Vector::ZERO;
        self.drag.stop();
    }

    /// What a double-click should do right now.
    #[must_use]
    pub fn double_click_action(&self) -> DoubleClickAction {
        if self.scale.is_peek() {
            DoubleClickAction::ZoomIn
        } else {
            DoubleClickAction::Reset
        }
    }

    /// Starts a drag at `pointer`. Refused at scale 1.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.scale.is_zoomed() {
            return false;
        }
        self.drag.start(pointer, self.pan_offset);
        true
    }

    /// Moves the pan offset with the pointer while dragging.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        if !self.scale.is_zoomed() {
            return false;
        }
        match self.drag.calculate_offset(pointer) {
            Some(offset) => {
                self.pan_offset = offset;
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.stop();
    }

    /// Transform the image should be displayed with.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.pan_offset,
            scale: self.scale.value(),
        }
    }

    /// Pointer affordance over the image.
    #[must_use]
    pub fn cursor(&self) -> mouse::Interaction {
        if self.drag.is_dragging {
            mouse::Interaction::Grabbing
        } else if self.scale.is_zoomed() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::ZoomIn
        }
    }

    fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
        if !scale.is_zoomed() {
            self.drag.stop();
        }
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}
