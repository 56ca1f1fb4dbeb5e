// SPDX-License-Identifier: MPL-2.0
//! Full-window advertisement popup drawn for an open [`AdCarousel`].

use crate::ads::carousel::{AdCarousel, Message, Slide};
use crate::ads::AdKind;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, mouse_area, opaque, text, Column};
use iced::{alignment::Horizontal, ContentFit, Element, Length};

const MEDIA_HEIGHT: f32 = 420.0;

/// Overlay to stack above the catalog, or `None` while the carousel is closed.
pub fn view(carousel: &AdCarousel) -> Option<Element<'_, Message>> {
    let slide = carousel.current()?;

    let mut card = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    if let Some(title) = &slide.ad.title {
        card = card.push(
            container(text(title.as_str()).size(typography::TITLE_MD))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::banner),
        );
    }

    card = card.push(media(slide));

    if let Some(description) = &slide.ad.description {
        card = card.push(
            text(description.as_str())
                .size(typography::BODY_LG)
                .color(palette::TEXT_MUTED),
        );
    }

    let position = text(format!("{} / {}", carousel.index() + 1, carousel.len()))
        .size(typography::CAPTION)
        .color(palette::TEXT_MUTED);

    let proceed = mouse_area(
        button(text("CONTINUE →").size(typography::BODY_LG))
            .padding([spacing::SM, spacing::LG])
            .on_press(Message::Continue)
            .style(styles::button::primary),
    )
    .on_enter(Message::ContinueHovered);

    card = card.push(position).push(proceed);

    let popup = container(card)
        .max_width(sizing::AD_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::popup);

    Some(
        opaque(
            container(popup)
                .center(Length::Fill)
                .padding(spacing::XL)
                .style(styles::container::backdrop),
        )
        .into(),
    )
}

fn media(slide: &Slide) -> Element<'_, Message> {
    match (&slide.image, slide.ad.kind) {
        (Some(loaded), _) => image(loaded.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(MEDIA_HEIGHT)
            .into(),
        (None, AdKind::Video) => placeholder("🎬", slide.ad.source.as_str()),
        (None, AdKind::Image) => placeholder("🖼", "Advertisement unavailable"),
    }
}

fn placeholder<'a>(glyph: &'a str, caption: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(glyph).size(typography::DISPLAY),
            text(caption)
                .size(typography::BODY)
                .color(palette::TEXT_MUTED),
        ]
        .spacing(spacing::SM)
        .align_x(Horizontal::Center),
    )
    .center_x(Length::Fill)
    .center_y(MEDIA_HEIGHT)
    .into()
}
