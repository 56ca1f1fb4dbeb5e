// SPDX-License-Identifier: MPL-2.0
//! Card grid for the entries of the current folder.

use crate::audio::{Cue, CuePlayer};
use crate::catalog::media::MediaLibrary;
use crate::catalog::{Entry, Folder, FolderId, Product};
use crate::config::CARD_FEATURE_COUNT;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, mouse_area, text, Column, Row};
use iced::{alignment::Horizontal, ContentFit, Element, Length};

const CARD_CUE_VOLUME: f32 = 0.3;
const CARD_HOVER_VOLUME: f32 = 0.2;
const CLEAR_CUE_VOLUME: f32 = 0.5;

const EMPTY_MESSAGE: &str = "Nothing found";

pub struct ViewContext<'a> {
    pub entries: Vec<&'a Entry>,
    pub media: &'a MediaLibrary,
    /// Whether a search query is narrowing the list.
    pub searching: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    FolderPressed(FolderId),
    ProductPressed(String),
    ClearSearch,
    Hovered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenFolder(FolderId),
    SelectProduct(String),
    ClearSearch,
}

pub fn update(message: Message, cues: &dyn CuePlayer) -> Event {
    match message {
        Message::FolderPressed(id) => {
            cues.play(Cue::Click, CARD_CUE_VOLUME);
            Event::OpenFolder(id)
        }
        Message::ProductPressed(id) => {
            cues.play(Cue::Click, CARD_CUE_VOLUME);
            Event::SelectProduct(id)
        }
        Message::ClearSearch => {
            cues.play(Cue::Pop, CLEAR_CUE_VOLUME);
            Event::ClearSearch
        }
        Message::Hovered => {
            cues.play(Cue::Hover, CARD_HOVER_VOLUME);
            Event::None
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.entries.is_empty() {
        return empty_state(ctx.searching);
    }

    let media = ctx.media;
    let cards = ctx.entries.into_iter().map(|entry| -> Element<'a, Message> {
        let (body, message) = match entry {
            Entry::Folder(folder) => (folder_card(folder), Message::FolderPressed(folder.id)),
            Entry::Product(product) => (
                product_card(product, media),
                Message::ProductPressed(product.id.clone()),
            ),
        };
        let card = button(body)
            .width(sizing::CARD_WIDTH)
            .padding(spacing::MD)
            .on_press(message)
            .style(styles::button::card(false));
        mouse_area(card).on_enter(Message::Hovered).into()
    });

    Row::with_children(cards)
        .spacing(spacing::LG)
        .wrap()
        .vertical_spacing(spacing::LG)
        .into()
}

fn folder_card<'a>(folder: &'a Folder) -> Element<'a, Message> {
    column![
        container(text("📁").size(typography::DISPLAY))
            .center_x(Length::Fill)
            .height(sizing::CARD_HEIGHT / 2.0),
        text(folder.name.as_str()).size(typography::TITLE_SM),
        text(format!("{} products →", folder.entries.len()))
            .size(typography::BODY)
            .color(palette::NEON_CYAN),
    ]
    .spacing(spacing::SM)
    .align_x(Horizontal::Center)
    .width(Length::Fill)
    .into()
}

fn product_card<'a>(product: &'a Product, media: &'a MediaLibrary) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match product.main_image().and_then(|r| media.get(r)) {
        Some(loaded) => image(loaded.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(sizing::CARD_HEIGHT)
            .into(),
        None => container(text("💻").size(typography::DISPLAY))
            .center_x(Length::Fill)
            .center_y(sizing::CARD_HEIGHT)
            .into(),
    };

    let mut details = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(picture)
        .push(text(product.name.as_str()).size(typography::TITLE_SM));

    if let Some(price) = &product.price {
        details = details.push(
            text(price.as_str())
                .size(typography::BODY_LG)
                .color(palette::NEON_GREEN),
        );
    }
    if let Some(processor) = &product.processor {
        details = details.push(
            text(processor.as_str())
                .size(typography::BODY)
                .color(palette::TEXT_MUTED),
        );
    }
    for feature in product.features.iter().take(CARD_FEATURE_COUNT) {
        details = details.push(
            text(feature.as_str())
                .size(typography::CAPTION)
                .color(palette::NEON_PURPLE),
        );
    }

    details.into()
}

fn empty_state<'a>(searching: bool) -> Element<'a, Message> {
    let mut content = column![
        text("🔍").size(typography::DISPLAY),
        text(EMPTY_MESSAGE)
            .size(typography::TITLE_MD)
            .color(palette::ERROR_500),
    ]
    .spacing(spacing::MD)
    .align_x(Horizontal::Center);

    if searching {
        content = content.push(
            button(text("Clear search").size(typography::BODY))
                .on_press(Message::ClearSearch)
                .style(styles::button::primary),
        );
    }

    container(content)
        .center_x(Length::Fill)
        .padding(spacing::XL)
        .into()
}
