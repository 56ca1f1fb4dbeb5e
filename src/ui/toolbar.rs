// SPDX-License-Identifier: MPL-2.0
//! Top toolbar: menu toggle, home and back buttons, breadcrumbs and search.

use crate::audio::{Cue, CuePlayer};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, row, text, text_input, Row, Space};
use iced::{alignment::Vertical, Element, Length};

const BRAND: &str = "Noutbuk olami";
const SEARCH_PLACEHOLDER: &str = "🔍 Search laptops...";

const TOGGLE_CUE_VOLUME: f32 = 0.7;
const CLEAR_CUE_VOLUME: f32 = 0.5;
const BUTTON_HOVER_VOLUME: f32 = 0.5;
const CLEAR_HOVER_VOLUME: f32 = 0.3;
const BRAND_HOVER_VOLUME: f32 = 0.1;

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub menu_open: bool,
    pub at_root: bool,
    pub breadcrumbs: Vec<&'a str>,
    pub query: &'a str,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Home,
    Back,
    QueryChanged(String),
    ClearQuery,
    /// Pointer entered a button; carries the hover cue volume.
    Hovered(f32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ToggleMenu,
    Home,
    Back,
    QueryChanged(String),
    ClearQuery,
}

/// Plays the toolbar's own cues and forwards the intent.
///
/// Navigation cues belong to the navigation itself and are played by the
/// application, so `Home` and `Back` stay silent here.
pub fn update(message: Message, cues: &dyn CuePlayer) -> Event {
    match message {
        Message::ToggleMenu => {
            cues.play(Cue::Click, TOGGLE_CUE_VOLUME);
            Event::ToggleMenu
        }
        Message::Home => Event::Home,
        Message::Back => Event::Back,
        Message::QueryChanged(query) => Event::QueryChanged(query),
        Message::ClearQuery => {
            cues.play(Cue::Pop, CLEAR_CUE_VOLUME);
            Event::ClearQuery
        }
        Message::Hovered(volume) => {
            cues.play(Cue::Hover, volume);
            Event::None
        }
    }
}

fn hoverable<'a>(
    content: impl Into<Element<'a, Message>>,
    volume: f32,
) -> Element<'a, Message> {
    mouse_area(content).on_enter(Message::Hovered(volume)).into()
}

fn icon_button<'a>(
    glyph: &'a str,
    accent: iced::Color,
    message: Message,
) -> Element<'a, Message> {
    let button = button(
        container(text(glyph).size(typography::TITLE_SM))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(sizing::ICON_BUTTON)
    .height(sizing::ICON_BUTTON)
    .on_press(message)
    .style(styles::button::toolbar(accent));

    hoverable(button, BUTTON_HOVER_VOLUME)
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let menu_glyph = if ctx.menu_open { "✕" } else { "☰" };

    let mut navigation = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icon_button(
            menu_glyph,
            palette::NEON_BLUE,
            Message::ToggleMenu,
        ))
        .push(icon_button("🏠", palette::NEON_GREEN, Message::Home));

    if !ctx.at_root {
        navigation = navigation.push(icon_button("⬅", palette::NEON_CYAN, Message::Back));
    }

    let brand = button(text(BRAND).size(typography::TITLE_MD))
        .padding(0)
        .on_press(Message::Home)
        .style(styles::button::link(palette::NEON_CYAN));

    let mut trail = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(hoverable(brand, BRAND_HOVER_VOLUME));
    for crumb in ctx.breadcrumbs {
        trail = trail
            .push(text("▶").size(typography::CAPTION).color(palette::NEON_PINK))
            .push(text(crumb).size(typography::BODY_LG));
    }

    let mut search = row![text_input(SEARCH_PLACEHOLDER, ctx.query)
        .on_input(Message::QueryChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(sizing::SEARCH_WIDTH)]
    .spacing(spacing::XS)
    .align_y(Vertical::Center);

    if !ctx.query.is_empty() {
        let clear = button(text("✕").size(typography::BODY))
            .on_press(Message::ClearQuery)
            .style(styles::button::link(palette::ERROR_500));
        search = search.push(hoverable(clear, CLEAR_HOVER_VOLUME));
    }

    let bar = row![navigation, trail, Space::new().width(Length::Fill), search]
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center);

    container(bar)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}
