// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are first handed to their component, which plays its
//! own cues and reports an event. The handlers here act on those events.

use super::{App, Message, CONTENT_SCROLLABLE_ID};
use crate::ads::carousel::Event as CarouselEvent;
use crate::audio::Cue;
use crate::catalog::{Entry, FolderId};
use crate::links;
use crate::ui::detail::{self, Event as DetailEvent};
use crate::ui::grid::{self, Event as GridEvent};
use crate::ui::sidebar::{self, Event as SidebarEvent};
use crate::ui::taskbar::{self, Event as TaskbarEvent};
use crate::ui::toolbar::{self, Event as ToolbarEvent};
use crate::ui::viewer::{component, ImageSource};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toolbar(msg) => self.handle_toolbar(msg),
            Message::Sidebar(msg) => self.handle_sidebar(msg),
            Message::Grid(msg) => self.handle_grid(msg),
            Message::Detail(msg) => self.handle_detail(msg),
            Message::Taskbar(msg) => match taskbar::update(msg, self.cues.as_ref()) {
                TaskbarEvent::Home => self.go_home(),
                TaskbarEvent::OpenLink(link) => links::open_task(link),
                TaskbarEvent::None => Task::none(),
            },
            Message::Viewer(msg) => {
                if self.viewer.handle(msg) == component::Event::Closed {
                    tracing::debug!("image viewer closed");
                }
                Task::none()
            }
            Message::Ads(msg) => {
                let (event, task) = self.carousel.handle(msg);
                let task = task.map(Message::Ads);
                match event {
                    CarouselEvent::Navigate(id) => Task::batch([task, self.enter(id)]),
                    CarouselEvent::None => task,
                }
            }
            Message::WindowResized(size) => {
                self.viewer.handle(component::Message::WindowResized(size));
                Task::none()
            }
        }
    }

    /// Entries of the current folder that pass the search and location filter.
    pub(super) fn visible_entries(&self) -> Vec<&Entry> {
        self.filter.apply(self.path.resolve(&self.catalog))
    }

    fn handle_toolbar(&mut self, message: toolbar::Message) -> Task<Message> {
        match toolbar::update(message, self.cues.as_ref()) {
            ToolbarEvent::ToggleMenu => {
                self.sidebar_open = !self.sidebar_open;
                Task::none()
            }
            ToolbarEvent::Home => self.go_home(),
            ToolbarEvent::Back => self.go_back(),
            ToolbarEvent::QueryChanged(query) => {
                self.filter.set_query(query);
                Task::none()
            }
            ToolbarEvent::ClearQuery => {
                self.filter.clear_query();
                Task::none()
            }
            ToolbarEvent::None => Task::none(),
        }
    }

    fn handle_sidebar(&mut self, message: sidebar::Message) -> Task<Message> {
        match sidebar::update(message, self.cues.as_ref()) {
            SidebarEvent::JumpTo(category) => {
                self.path.jump_to(category);
                self.after_navigation()
            }
            SidebarEvent::LocationChanged(location) => {
                self.filter.set_location(location);
                Task::none()
            }
            SidebarEvent::OpenLink(link) => links::open_task(link),
            SidebarEvent::None => Task::none(),
        }
    }

    fn handle_grid(&mut self, message: grid::Message) -> Task<Message> {
        match grid::update(message, self.cues.as_ref()) {
            GridEvent::OpenFolder(id) => {
                let (event, task) = self.carousel.open(id, &self.ads, &mut self.ad_media);
                let task = task.map(Message::Ads);
                match event {
                    CarouselEvent::Navigate(target) => Task::batch([task, self.enter(target)]),
                    CarouselEvent::None => task,
                }
            }
            GridEvent::SelectProduct(id) => {
                let product = self
                    .path
                    .resolve(&self.catalog)
                    .iter()
                    .filter_map(Entry::as_product)
                    .find(|product| product.id == id)
                    .cloned();
                match product {
                    Some(product) => {
                        tracing::debug!(id = %product.id, "product selected");
                        self.selection = Some(detail::State::new(product));
                        scroll_to_top()
                    }
                    None => {
                        tracing::warn!(%id, "selected product is not in the current folder");
                        Task::none()
                    }
                }
            }
            GridEvent::ClearSearch => {
                self.filter.clear_query();
                Task::none()
            }
            GridEvent::None => Task::none(),
        }
    }

    fn handle_detail(&mut self, message: detail::Message) -> Task<Message> {
        let Some(selection) = self.selection.as_mut() else {
            return Task::none();
        };

        match selection.handle(message, self.cues.as_ref()) {
            DetailEvent::Closed => {
                self.selection = None;
            }
            DetailEvent::OpenViewer { reference, alt } => match self.media.load(&reference) {
                Some(loaded) => {
                    self.viewer
                        .open(ImageSource::new(loaded.handle, alt, loaded.natural_size));
                }
                None => tracing::warn!(%reference, "cannot open viewer without an image"),
            },
            DetailEvent::OpenLink(link) => return links::open_task(link),
            DetailEvent::None => {}
        }
        Task::none()
    }

    fn go_home(&mut self) -> Task<Message> {
        self.cues.play_default(Cue::Click);
        self.path.home();
        self.after_navigation()
    }

    fn go_back(&mut self) -> Task<Message> {
        if !self.path.back() {
            tracing::debug!("already at the catalog root");
            return Task::none();
        }
        self.cues.play_default(Cue::Back);
        self.after_navigation()
    }

    fn enter(&mut self, id: FolderId) -> Task<Message> {
        self.path.enter(id);
        self.after_navigation()
    }

    /// Leaving or entering a folder drops the selection and rewinds the page.
    fn after_navigation(&mut self) -> Task<Message> {
        self.selection = None;
        scroll_to_top()
    }
}

fn scroll_to_top() -> Task<Message> {
    operation::snap_to(Id::new(CONTENT_SCROLLABLE_ID), RelativeOffset::START)
}
