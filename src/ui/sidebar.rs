// SPDX-License-Identifier: MPL-2.0
//! Category list, location picker and shop contacts.

use crate::audio::{Cue, CuePlayer};
use crate::catalog::{Category, Location};
use crate::links::{Link, SOCIALS};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, column, container, mouse_area, pick_list, scrollable, text, Column, Row,
};
use iced::{alignment::Horizontal, Element, Length};

const CATEGORY_CUE_VOLUME: f32 = 0.7;
const CATEGORY_HOVER_VOLUME: f32 = 0.5;
const MAP_HOVER_VOLUME: f32 = 0.1;

/// Contact rows, in display order.
pub const CONTACTS: [(Link, &str); 3] = [
    (Link::ShopPhone, "📱 +998 93 148 00 06"),
    (Link::ShopTelegram, "✈ Telegram"),
    (Link::StoreMap, "📍 Andijan, Mashrab 245"),
];

/// Cue played when `link` is clicked, with its volume.
#[must_use]
pub fn link_cue(link: Link) -> (Cue, Option<f32>) {
    match link {
        Link::ShopPhone => (Cue::Ding, None),
        Link::StoreMap => (Cue::Whoosh, None),
        _ => (Cue::Click, Some(CATEGORY_CUE_VOLUME)),
    }
}

fn link_hover_volume(link: Link) -> f32 {
    match link {
        Link::StoreMap => MAP_HOVER_VOLUME,
        _ => CATEGORY_HOVER_VOLUME,
    }
}

pub struct ViewContext {
    pub active: Option<Category>,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(Category),
    LocationSelected(Location),
    LinkPressed(Link),
    LinkHovered(Link),
    Hovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    JumpTo(Category),
    LocationChanged(Location),
    OpenLink(Link),
}

pub fn update(message: Message, cues: &dyn CuePlayer) -> Event {
    match message {
        Message::CategorySelected(category) => {
            cues.play(Cue::Click, CATEGORY_CUE_VOLUME);
            Event::JumpTo(category)
        }
        Message::LocationSelected(location) => {
            cues.play_default(Cue::Click);
            Event::LocationChanged(location)
        }
        Message::LinkPressed(link) => {
            match link_cue(link) {
                (cue, Some(volume)) => cues.play(cue, volume),
                (cue, None) => cues.play_default(cue),
            }
            Event::OpenLink(link)
        }
        Message::LinkHovered(link) => {
            cues.play(Cue::Hover, link_hover_volume(link));
            Event::None
        }
        Message::Hovered => {
            cues.play(Cue::Hover, CATEGORY_HOVER_VOLUME);
            Event::None
        }
    }
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let categories = Category::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::SM), |column, category| {
            let selected = ctx.active == Some(category);
            let entry = button(text(category.title()).size(typography::BODY_LG))
                .width(Length::Fill)
                .padding(spacing::MD)
                .on_press(Message::CategorySelected(category))
                .style(styles::button::card(selected));
            column.push(mouse_area(entry).on_enter(Message::Hovered))
        });

    let location = pick_list(
        Location::ALL,
        Some(ctx.location),
        Message::LocationSelected,
    )
    .width(Length::Fill)
    .text_size(typography::BODY);

    let contacts = CONTACTS
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |column, (link, label)| {
            column.push(
                mouse_area(
                    button(text(label).size(typography::CAPTION))
                        .on_press(Message::LinkPressed(link))
                        .style(styles::button::link(palette::NEON_GREEN)),
                )
                .on_enter(Message::LinkHovered(link)),
            )
        });

    let socials = SOCIALS
        .into_iter()
        .fold(Row::new().spacing(spacing::MD), |row, (link, icon)| {
            row.push(
                mouse_area(
                    button(text(icon).size(typography::TITLE_SM))
                        .on_press(Message::LinkPressed(link))
                        .style(styles::button::link(palette::NEON_PINK)),
                )
                .on_enter(Message::LinkHovered(link)),
            )
        });

    let contact_block = container(
        column![
            text("📞").size(typography::TITLE_LG),
            text("Contact us")
                .size(typography::BODY_LG)
                .color(palette::NEON_CYAN),
            contacts,
            socials,
        ]
        .spacing(spacing::XS)
        .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel);

    let content = column![
        text("⚡ Categories").size(typography::TITLE_MD),
        categories,
        text("Location")
            .size(typography::CAPTION)
            .color(palette::TEXT_MUTED),
        location,
        contact_block,
    ]
    .spacing(spacing::LG)
    .padding(spacing::LG);

    container(scrollable(content))
        .width(sizing::SIDEBAR_WIDTH)
        .height(Length::Fill)
        .style(styles::container::bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingCuePlayer;
    use crate::config::DEFAULT_CUE_VOLUME;

    #[test]
    fn category_selection_jumps_with_click() {
        let cues = RecordingCuePlayer::new();
        assert_eq!(
            update(Message::CategorySelected(Category::Student), &cues),
            Event::JumpTo(Category::Student)
        );
        assert_eq!(cues.played(), vec![(Cue::Click, CATEGORY_CUE_VOLUME)]);
    }

    #[test]
    fn contacts_open_their_link_with_distinct_cues() {
        let cues = RecordingCuePlayer::new();
        for (link, _) in CONTACTS {
            assert_eq!(update(Message::LinkPressed(link), &cues), Event::OpenLink(link));
        }
        assert_eq!(
            cues.played(),
            vec![
                (Cue::Ding, DEFAULT_CUE_VOLUME),
                (Cue::Click, CATEGORY_CUE_VOLUME),
                (Cue::Whoosh, DEFAULT_CUE_VOLUME),
            ]
        );
        let targets: Vec<&str> = CONTACTS.iter().map(|(link, _)| link.url()).collect();
        assert_eq!(
            targets,
            [
                "tel:+998931480006",
                "https://t.me/Laptop_centri",
                "https://maps.app.goo.gl/DejpApSEpvmb8YQRA?g_st=com.google.maps.preview.copy",
            ]
        );
    }

    #[test]
    fn socials_open_with_click() {
        let cues = RecordingCuePlayer::new();
        for (link, _) in SOCIALS {
            assert_eq!(update(Message::LinkPressed(link), &cues), Event::OpenLink(link));
        }
        assert!(cues
            .played()
            .iter()
            .all(|played| *played == (Cue::Click, CATEGORY_CUE_VOLUME)));
        let targets: Vec<&str> = SOCIALS.iter().map(|(link, _)| link.url()).collect();
        assert_eq!(
            targets,
            [
                "https://www.youtube.com/@uz_laptop",
                "https://t.me/noutbuk_olami",
                "https://www.instagram.com/uz_laptop/",
            ]
        );
    }

    #[test]
    fn map_hover_is_quieter() {
        let cues = RecordingCuePlayer::new();
        update(Message::LinkHovered(Link::StoreMap), &cues);
        update(Message::LinkHovered(Link::YouTube), &cues);
        assert_eq!(
            cues.played(),
            vec![
                (Cue::Hover, MAP_HOVER_VOLUME),
                (Cue::Hover, CATEGORY_HOVER_VOLUME),
            ]
        );
    }

    #[test]
    fn location_change_is_forwarded() {
        let cues = RecordingCuePlayer::new();
        assert_eq!(
            update(Message::LocationSelected(Location::Mashrab), &cues),
            Event::LocationChanged(Location::Mashrab)
        );
    }
}
