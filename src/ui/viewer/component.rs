// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The viewer is a modal overlay. While closed it holds no session, emits no
//! subscription and does not touch the scroll lock. Opening creates a fresh
//! [`Session`] which owns the scroll-lock guard, so dropping the session on
//! any exit path (close gesture, reopen, component dropped) restores
//! scrolling.

use super::state::{fitted_size, DoubleClickAction, Transform, ViewerState};
use super::transition::Transition;
use crate::audio::{Cue, SharedCuePlayer};
use crate::config::{WHEEL_CUE_VOLUME, ZOOM_CUE_VOLUME};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::state::{ScrollLock, ScrollLockGuard, WheelDirection};
use crate::ui::styles;
use iced::advanced::graphics::core::Image;
use iced::widget::canvas::{self, Canvas, Geometry, Program};
use iced::widget::{button, container, image, mouse_area, row, stack, text, Space};
use iced::{
    event, keyboard, mouse, touch, window, Element, Length, Point, Rectangle, Renderer,
    Size, Subscription, Theme,
};
use std::collections::HashSet;
use std::path::Path;
use std::time::{Duration, Instant};

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Image handed to the viewer on open.
#[derive(Debug, Clone)]
pub struct ImageSource {
    pub handle: image::Handle,
    pub alt: String,
    /// Pixel size of the image, when it could be read.
    pub natural_size: Option<Size<u32>>,
}

impl ImageSource {
    #[must_use]
    pub fn new(handle: image::Handle, alt: impl Into<String>, natural_size: Option<Size<u32>>) -> Self {
        Self {
            handle,
            alt: alt.into(),
            natural_size,
        }
    }

    /// Image stored on disk. The natural size is read from the file header.
    #[must_use]
    pub fn from_path(path: &Path, alt: impl Into<String>) -> Self {
        let natural_size = match image_rs::image_dimensions(path) {
            Ok((width, height)) => Some(Size::new(width, height)),
            Err(err) => {
                tracing::debug!(path = %path.display(), "cannot read image size: {err}");
                None
            }
        };
        Self::new(image::Handle::from_path(path), alt, natural_size)
    }
}

/// Messages handled by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input routed from the viewer subscription.
    RawEvent(iced::Event),
    /// Left press on the drawn image, in window coordinates.
    ImagePressed(Point),
    BackdropPressed,
    ZoomIn,
    ZoomOut,
    Reset,
    CloseRequested,
    CloseHovered,
    WindowResized(Size),
    Tick(Instant),
}

/// Notifications for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The viewer was closed by the user. Emitted once per close gesture.
    Closed,
}

/// Lifecycle phase, as observed from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Idle,
    Dragging,
}

#[derive(Debug)]
struct Session {
    state: ViewerState,
    source: ImageSource,
    pointer: Option<Point>,
    last_press: Option<Instant>,
    touches: HashSet<touch::Finger>,
    transition: Transition,
    _scroll_guard: ScrollLockGuard,
}

impl Session {
    fn sync_transition(&mut self, now: Instant) {
        let target = self.state.transform();
        if self.state.is_dragging() {
            self.transition.snap(target, now);
        } else {
            self.transition.retarget(target, now);
        }
    }
}

/// Full-window image viewer with wheel, button and drag zoom.
#[derive(Debug)]
pub struct ZoomPanViewer {
    cues: SharedCuePlayer,
    scroll_lock: ScrollLock,
    window_size: Size,
    session: Option<Session>,
}

impl ZoomPanViewer {
    #[must_use]
    pub fn new(cues: SharedCuePlayer, scroll_lock: ScrollLock, window_size: Size) -> Self {
        Self {
            cues,
            scroll_lock,
            window_size,
            session: None,
        }
    }

    /// Shows `source` at scale 1 with no offset, replacing any open session.
    pub fn open(&mut self, source: ImageSource) {
        let now = Instant::now();
        // Release the previous guard before taking a new one.
        self.session = None;
        tracing::debug!(alt = %source.alt, "viewer opened");
        self.session = Some(Session {
            state: ViewerState::new(),
            source,
            pointer: None,
            last_press: None,
            touches: HashSet::new(),
            transition: Transition::settled(Transform::IDENTITY, now),
            _scroll_guard: self.scroll_lock.acquire(),
        });
    }

    /// Drops the session. Returns [`Event::Closed`] only if one was open.
    pub fn close(&mut self) -> Event {
        match self.session.take() {
            Some(_) => {
                tracing::debug!("viewer closed");
                Event::Closed
            }
            None => Event::None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.session {
            None => Phase::Closed,
            Some(session) if session.state.is_dragging() => Phase::Dragging,
            Some(_) => Phase::Idle,
        }
    }

    /// Zoom state of the open session.
    #[must_use]
    pub fn state(&self) -> Option<&ViewerState> {
        self.session.as_ref().map(|session| &session.state)
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> Option<&mut ViewerState> {
        self.session.as_mut().map(|session| &mut session.state)
    }

    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    /// Where the image is drawn right now, in window coordinates.
    #[must_use]
    pub fn image_bounds(&self, now: Instant) -> Option<Rectangle> {
        let session = self.session.as_ref()?;
        let fitted = fitted_size(session.source.natural_size, self.window_size);
        Some(
            session
                .transition
                .current(now)
                .image_bounds(fitted, self.window_size),
        )
    }

    pub fn handle(&mut self, message: Message) -> Event {
        let now = Instant::now();

        match message {
            Message::WindowResized(size) => {
                self.window_size = size;
                Event::None
            }
            Message::CloseRequested => {
                if self.is_open() {
                    self.cues.play_default(Cue::Close);
                }
                self.close()
            }
            Message::BackdropPressed => self.close(),
            Message::CloseHovered => {
                if self.is_open() {
                    self.cues.play(Cue::Hover, WHEEL_CUE_VOLUME);
                }
                Event::None
            }
            Message::Tick(_) => Event::None,
            Message::RawEvent(event) => self.handle_raw_event(event, now),
            Message::ZoomIn => {
                self.zoom_in(now);
                Event::None
            }
            Message::ZoomOut => {
                if let Some(session) = self.session.as_mut() {
                    session.state.zoom_out();
                    session.sync_transition(now);
                    self.cues.play(Cue::Zoom, ZOOM_CUE_VOLUME);
                }
                Event::None
            }
            Message::Reset => {
                self.reset(now);
                Event::None
            }
            Message::ImagePressed(position) => {
                self.press_image(position, now);
                Event::None
            }
        }
    }

    fn zoom_in(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.state.zoom_in();
            session.sync_transition(now);
            self.cues.play(Cue::Zoom, ZOOM_CUE_VOLUME);
        }
    }

    fn reset(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.state.reset();
            session.sync_transition(now);
            self.cues.play_default(Cue::Pop);
        }
    }

    fn press_image(&mut self, position: Point, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.pointer = Some(position);

        let is_double = session
            .last_press
            .is_some_and(|last| now.duration_since(last) <= DOUBLE_CLICK_THRESHOLD);

        if is_double {
            session.last_press = None;
            session.state.end_drag();
            match session.state.double_click_action() {
                DoubleClickAction::ZoomIn => self.zoom_in(now),
                DoubleClickAction::Reset => self.reset(now),
            }
            return;
        }

        session.last_press = Some(now);
        session.state.begin_drag(position);
        session.sync_transition(now);
    }

    fn handle_raw_event(&mut self, event: iced::Event, now: Instant) -> Event {
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => self.close(),
            iced::Event::Window(window::Event::Resized(size)) => {
                self.window_size = size;
                Event::None
            }
            iced::Event::Mouse(mouse_event) => {
                self.handle_mouse(mouse_event, now);
                Event::None
            }
            iced::Event::Touch(touch_event) => {
                self.handle_touch(touch_event, now);
                Event::None
            }
            _ => Event::None,
        }
    }

    fn handle_mouse(&mut self, event: mouse::Event, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match event {
            mouse::Event::WheelScrolled { delta } => {
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => y,
                };
                session.state.wheel(WheelDirection::from_vertical_delta(y));
                session.sync_transition(now);
                self.cues.play(Cue::Hover, WHEEL_CUE_VOLUME);
            }
            mouse::Event::CursorMoved { position } => {
                session.pointer = Some(position);
                if session.state.drag_to(position) {
                    session.sync_transition(now);
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft => {
                session.state.end_drag();
                session.sync_transition(now);
            }
            _ => {}
        }
    }

    fn handle_touch(&mut self, event: touch::Event, now: Instant) {
        let image = self.image_bounds(now);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match event {
            touch::Event::FingerPressed { id, position } => {
                session.touches.insert(id);
                session.pointer = Some(position);
                let on_image = image.is_some_and(|bounds| bounds.contains(position));
                if session.touches.len() == 1 && on_image {
                    session.state.begin_drag(position);
                } else {
                    session.state.end_drag();
                }
            }
            touch::Event::FingerMoved { id, position } => {
                if session.touches.len() == 1 && session.touches.contains(&id) {
                    session.pointer = Some(position);
                    session.state.drag_to(position);
                }
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                session.touches.remove(&id);
                session.state.end_drag();
            }
        }
        session.sync_transition(now);
    }

    /// Input listeners, alive only while a session is open.
    pub fn subscription(&self) -> Subscription<Message> {
        let Some(session) = &self.session else {
            return Subscription::none();
        };

        let input = event::listen_with(route_event);

        if session.transition.is_animating(Instant::now()) {
            Subscription::batch([input, window::frames().map(Message::Tick)])
        } else {
            input
        }
    }

    /// Overlay to stack above the catalog, or `None` while closed.
    pub fn view(&self) -> Option<Element<'_, Message>> {
        let session = self.session.as_ref()?;
        let now = Instant::now();
        let viewport = self.window_size;
        let fitted = fitted_size(session.source.natural_size, viewport);
        let bounds = session
            .transition
            .current(now)
            .image_bounds(fitted, viewport);

        let backdrop = mouse_area(
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop),
        )
        .on_press(Message::BackdropPressed)
        .interaction(mouse::Interaction::Idle);

        let picture = Canvas::new(ImageCanvas {
            handle: &session.source.handle,
            bounds,
            cursor: session.state.cursor(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = stack![backdrop, picture];

        if session.source.alt.is_empty() {
            layers = layers.push(self.controls());
        } else {
            layers = layers.push(self.controls()).push(
                container(
                    text(session.source.alt.as_str())
                        .size(typography::BODY)
                        .color(palette::WHITE),
                )
                .padding(spacing::MD)
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Left),
            );
        }

        Some(layers.width(Length::Fill).height(Length::Fill).into())
    }

    fn controls(&self) -> Element<'_, Message> {
        let overlay_style = || {
            styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            )
        };
        let control = |label: &'static str, message: Message| {
            button(text(label).size(typography::TITLE_SM))
                .on_press(message)
                .padding(spacing::SM)
                .style(overlay_style())
        };

        let close = mouse_area(
            button(text("✕").size(typography::TITLE_SM))
                .on_press(Message::CloseRequested)
                .padding(spacing::SM)
                .width(Length::Fixed(sizing::ICON_BUTTON))
                .style(overlay_style()),
        )
        .on_enter(Message::CloseHovered);

        let zoom_bar = row![
            control("−", Message::ZoomOut),
            control("⟲", Message::Reset),
            control("+", Message::ZoomIn),
        ]
        .spacing(spacing::XS);

        let top = container(close)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Right)
            .padding(spacing::MD);

        let bottom = container(zoom_bar)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Bottom)
            .padding(spacing::LG);

        stack![top, bottom]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Routes the input the viewer listens to while open.
fn route_event(
    event: iced::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match &event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        })
        | iced::Event::Mouse(
            mouse::Event::WheelScrolled { .. }
            | mouse::Event::CursorMoved { .. }
            | mouse::Event::CursorLeft
            | mouse::Event::ButtonReleased(mouse::Button::Left),
        )
        | iced::Event::Touch(_)
        | iced::Event::Window(window::Event::Resized(_)) => Some(Message::RawEvent(event)),
        _ => None,
    }
}

/// Draws the image at its current transform and reports presses on it.
///
/// The canvas fills the window, so its local coordinates are window
/// coordinates.
struct ImageCanvas<'a> {
    handle: &'a image::Handle,
    bounds: Rectangle,
    cursor: mouse::Interaction,
}

impl Program<Message, Theme, Renderer> for ImageCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                self.bounds
                    .contains(position)
                    .then(|| canvas::Action::publish(Message::ImagePressed(position)).and_capture())
            }
            _ => None,
        }
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(position) if self.bounds.contains(position) => self.cursor,
            _ => mouse::Interaction::default(),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.draw_image(self.bounds, Image::new(self.handle.clone()));
        vec![frame.into_geometry()]
    }
}
