// SPDX-License-Identifier: MPL-2.0
//! Bottom taskbar with the home shortcut, stock counter and social links.

use crate::audio::{Cue, CuePlayer};
use crate::links::{Link, SOCIALS};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, row, text, Row, Space};
use iced::{alignment::Vertical, Element, Length};

const HOVER_VOLUME: f32 = 0.1;
const DEVELOPER_CUE_VOLUME: f32 = 0.3;
const SOCIAL_CUE_VOLUME: f32 = 0.7;
const SOCIAL_HOVER_VOLUME: f32 = 0.5;

#[derive(Debug, Clone)]
pub enum Message {
    Home,
    Hovered,
    LinkPressed(Link),
    LinkHovered(Link),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Home,
    OpenLink(Link),
}

pub fn update(message: Message, cues: &dyn CuePlayer) -> Event {
    match message {
        Message::Home => Event::Home,
        Message::Hovered => {
            cues.play(Cue::Hover, HOVER_VOLUME);
            Event::None
        }
        Message::LinkPressed(link) => {
            let volume = match link {
                Link::DeveloperTelegram => DEVELOPER_CUE_VOLUME,
                _ => SOCIAL_CUE_VOLUME,
            };
            cues.play(Cue::Click, volume);
            Event::OpenLink(link)
        }
        Message::LinkHovered(link) => {
            let volume = match link {
                Link::DeveloperTelegram => HOVER_VOLUME,
                _ => SOCIAL_HOVER_VOLUME,
            };
            cues.play(Cue::Hover, volume);
            Event::None
        }
    }
}

/// Label for the stock counter.
#[must_use]
pub fn product_count_label(count: usize) -> String {
    match count {
        1 => "📊 1 laptop".to_string(),
        n => format!("📊 {n} laptops"),
    }
}

pub fn view<'a>(product_count: usize) -> Element<'a, Message> {
    let home = mouse_area(
        button(
            container(text("🏠").size(typography::BODY_LG))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(sizing::ICON_BUTTON)
        .height(sizing::ICON_BUTTON)
        .on_press(Message::Home)
        .style(styles::button::toolbar(palette::NEON_PURPLE)),
    )
    .on_enter(Message::Hovered);

    let developer = mouse_area(
        button(text("👨‍💻 Olimjon Ernazarov ↗").size(typography::BODY))
            .on_press(Message::LinkPressed(Link::DeveloperTelegram))
            .style(styles::button::link(palette::NEON_CYAN)),
    )
    .on_enter(Message::LinkHovered(Link::DeveloperTelegram));

    let socials = SOCIALS
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, (link, icon)| {
            row.push(
                mouse_area(
                    button(text(icon).size(typography::BODY_LG))
                        .on_press(Message::LinkPressed(link))
                        .style(styles::button::link(palette::NEON_PINK)),
                )
                .on_enter(Message::LinkHovered(link)),
            )
        });

    let bar = row![
        home,
        text("💻 Noutbuk olami")
            .size(typography::BODY_LG)
            .color(palette::NEON_CYAN),
        developer,
        text(product_count_label(product_count))
            .size(typography::BODY)
            .color(palette::NEON_GREEN),
        Space::new().width(Length::Fill),
        socials,
    ]
    .spacing(spacing::MD)
    .padding([spacing::SM, spacing::LG])
    .align_y(Vertical::Center);

    container(bar)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}
