// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes are always tracked so the viewer fits images to the current
//! window the moment it opens. Pointer and keyboard input is only subscribed
//! while the viewer is open.

use super::{App, Message};
use iced::{window, Subscription};

pub(super) fn create(app: &App) -> Subscription<Message> {
    Subscription::batch([
        window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        app.viewer.subscription().map(Message::Viewer),
    ])
}
