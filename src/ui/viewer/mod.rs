// SPDX-License-Identifier: MPL-2.0
//! Full-window image viewer with wheel, button, and drag zoom.
//!
//! [`component::ZoomPanViewer`] owns the session lifecycle and input routing,
//! [`state::ViewerState`] the bounded zoom/pan arithmetic, and
//! [`transition::Transition`] the eased transform the image is drawn with.

pub mod component;
pub mod state;
pub mod transition;

pub use component::{Event, ImageSource, Message, Phase, ZoomPanViewer};
pub use state::{Transform, ViewerState};
