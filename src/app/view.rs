// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The catalog (toolbar, sidebar, content, taskbar) is the base layer. The
//! advertisement popup and the image viewer are stacked above it when open.

use super::{App, Message, CONTENT_SCROLLABLE_ID};
use crate::catalog::Category;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::{ad_popup, grid, sidebar, taskbar, toolbar};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{column, container, opaque, row, scrollable, stack, Id};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let toolbar = toolbar::view(toolbar::ViewContext {
        menu_open: app.sidebar_open,
        at_root: app.path.is_root(),
        breadcrumbs: app.path.breadcrumbs(&app.catalog),
        query: app.filter.query(),
    })
    .map(Message::Toolbar);

    let content: Element<'_, Message> = match &app.selection {
        Some(selection) => selection.view(&app.media).map(Message::Detail),
        None => grid::view(grid::ViewContext {
            entries: app.visible_entries(),
            media: &app.media,
            searching: !app.filter.query().is_empty(),
        })
        .map(Message::Grid),
    };

    // Overlays own the wheel while the lock is held.
    let scrollbar = if app.scroll_lock.is_locked() {
        Scrollbar::hidden()
    } else {
        Scrollbar::default()
    };
    let content = scrollable(container(content).padding(spacing::LG).width(Length::Fill))
        .id(Id::new(CONTENT_SCROLLABLE_ID))
        .direction(Direction::Vertical(scrollbar))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut middle = row![].height(Length::Fill);
    if app.sidebar_open {
        let sidebar = sidebar::view(sidebar::ViewContext {
            active: app.path.top().and_then(Category::from_id),
            location: app.filter.location(),
        })
        .map(Message::Sidebar);
        middle = middle.push(sidebar);
    }
    middle = middle.push(content);

    let base = container(column![
        toolbar,
        middle,
        taskbar::view(app.catalog.product_count()).map(Message::Taskbar),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::app);

    let mut layers = stack![base].width(Length::Fill).height(Length::Fill);
    if let Some(popup) = ad_popup::view(&app.carousel) {
        layers = layers.push(popup.map(Message::Ads));
    }
    if let Some(viewer) = app.viewer.view() {
        layers = layers.push(opaque(viewer.map(Message::Viewer)));
    }

    layers.into()
}
