// SPDX-License-Identifier: MPL-2.0
//! Product detail page: gallery, price, specifications and contacts.

use crate::audio::{Cue, CuePlayer};
use crate::catalog::media::MediaLibrary;
use crate::catalog::Product;
use crate::config::MAX_DETAIL_THUMBNAILS;
use crate::links::Link;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, mouse_area, row, text, Column, Row, Space};
use iced::{alignment::Vertical, ContentFit, Element, Length};

const THUMBNAIL_CUE_VOLUME: f32 = 0.3;
const CLOSE_HOVER_VOLUME: f32 = 0.5;
const TELEGRAM_CUE_VOLUME: f32 = 0.7;
const ACTION_HOVER_VOLUME: f32 = 0.5;

const PHONES: [(Link, &str); 3] = [
    (Link::ShopPhone, "+998 93 148 00 06 Muhammad"),
    (Link::SalesPhone, "+998 97 338 60 50 Mirolimjon"),
    (Link::AdminPhone, "+998 88 866 09 06 Admin"),
];

const TELEGRAMS: [(Link, &str); 3] = [
    (Link::AdminTelegram, "Laptop Centri"),
    (Link::SalesTelegram, "Muhammad"),
    (Link::DeveloperTelegram, "Admin"),
];

/// Cue played when a contact link on the page is clicked, with its volume.
#[must_use]
pub fn link_cue(link: Link) -> (Cue, Option<f32>) {
    match link {
        Link::ShopPhone | Link::SalesPhone | Link::AdminPhone => (Cue::Ding, None),
        Link::StoreMap => (Cue::Click, None),
        _ => (Cue::Click, Some(TELEGRAM_CUE_VOLUME)),
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    CloseHovered,
    MainImagePressed,
    ThumbnailPressed(usize),
    LinkPressed(Link),
    MapHovered,
    OrderPressed,
    FavoritePressed,
    ActionHovered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Closed,
    /// Show `reference` full screen.
    OpenViewer { reference: String, alt: String },
    OpenLink(Link),
}

/// The product being inspected and the gallery image in focus.
#[derive(Debug, Clone)]
pub struct State {
    product: Product,
    selected_image: Option<String>,
}

impl State {
    #[must_use]
    pub fn new(product: Product) -> Self {
        let selected_image = product.main_image().map(str::to_string);
        Self {
            product,
            selected_image,
        }
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    /// Gallery images offered as thumbnails.
    #[must_use]
    pub fn thumbnails(&self) -> &[String] {
        if self.product.images.len() > 1 {
            let count = self.product.images.len().min(MAX_DETAIL_THUMBNAILS);
            &self.product.images[..count]
        } else {
            &[]
        }
    }

    pub fn handle(&mut self, message: Message, cues: &dyn CuePlayer) -> Event {
        match message {
            Message::Close => {
                cues.play_default(Cue::Close);
                Event::Closed
            }
            Message::CloseHovered => {
                cues.play(Cue::Hover, CLOSE_HOVER_VOLUME);
                Event::None
            }
            Message::MainImagePressed => {
                let Some(reference) = self.selected_image.clone() else {
                    return Event::None;
                };
                cues.play_default(Cue::Flash);
                Event::OpenViewer {
                    reference,
                    alt: self.product.name.clone(),
                }
            }
            Message::ThumbnailPressed(index) => {
                let Some(reference) = self.thumbnails().get(index).cloned() else {
                    return Event::None;
                };
                cues.play(Cue::Click, THUMBNAIL_CUE_VOLUME);
                self.selected_image = Some(reference);
                Event::None
            }
            Message::LinkPressed(link) => {
                match link_cue(link) {
                    (cue, Some(volume)) => cues.play(cue, volume),
                    (cue, None) => cues.play_default(cue),
                }
                Event::OpenLink(link)
            }
            Message::MapHovered => {
                cues.play_default(Cue::Hover);
                Event::None
            }
            Message::OrderPressed => {
                cues.play_default(Cue::Game);
                tracing::info!(product = %self.product.id, "order requested");
                Event::OpenLink(Link::ShopTelegram)
            }
            Message::FavoritePressed => {
                cues.play_default(Cue::Ding);
                Event::None
            }
            Message::ActionHovered => {
                cues.play(Cue::Hover, ACTION_HOVER_VOLUME);
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, media: &'a MediaLibrary) -> Element<'a, Message> {
        let close = button(
            container(text("×").size(typography::TITLE_MD))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(sizing::ICON_BUTTON)
        .height(sizing::ICON_BUTTON)
        .on_press(Message::Close)
        .style(styles::button::toolbar(palette::ERROR_500));

        let header = row![
            text(self.product.name.as_str())
                .size(typography::TITLE_LG)
                .color(palette::NEON_CYAN),
            Space::new().width(Length::Fill),
            mouse_area(close).on_enter(Message::CloseHovered),
        ]
        .align_y(Vertical::Center);

        let body = row![self.gallery(media), self.details()]
            .spacing(spacing::XL)
            .width(Length::Fill);

        container(
            column![header, body]
                .spacing(spacing::LG)
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
    }

    fn gallery<'a>(&'a self, media: &'a MediaLibrary) -> Element<'a, Message> {
        let mut gallery = Column::new().spacing(spacing::MD).width(Length::FillPortion(1));

        if let Some(loaded) = self.selected_image.as_deref().and_then(|r| media.get(r)) {
            gallery = gallery.push(
                mouse_area(
                    image(loaded.handle.clone())
                        .content_fit(ContentFit::Cover)
                        .width(Length::Fill)
                        .height(sizing::DETAIL_IMAGE_HEIGHT),
                )
                .on_press(Message::MainImagePressed)
                .interaction(iced::mouse::Interaction::ZoomIn),
            );
        }

        let thumbnails = self.thumbnails().iter().enumerate().filter_map(
            |(index, reference)| -> Option<Element<'a, Message>> {
                let loaded = media.get(reference)?;
                let selected = self.selected_image.as_deref() == Some(reference.as_str());
                Some(
                    button(
                        image(loaded.handle.clone())
                            .content_fit(ContentFit::Cover)
                            .width(sizing::THUMBNAIL)
                            .height(sizing::THUMBNAIL),
                    )
                    .padding(spacing::XXS)
                    .on_press(Message::ThumbnailPressed(index))
                    .style(styles::button::thumbnail(selected))
                    .into(),
                )
            },
        );
        gallery = gallery.push(Row::with_children(thumbnails).spacing(spacing::SM).wrap());

        gallery.into()
    }

    fn details(&self) -> Element<'_, Message> {
        let product = &self.product;
        let mut details = Column::new().spacing(spacing::LG).width(Length::FillPortion(1));

        if let Some(price) = &product.price {
            details = details.push(section(
                "💵 Price",
                palette::NEON_GREEN,
                text(price.as_str()).size(typography::TITLE_LG).into(),
            ));
        }

        let specs = [
            ("Processor", &product.processor),
            ("Memory", &product.ram),
            ("Storage", &product.storage),
            ("Graphics", &product.graphics),
            ("Display", &product.display),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|value| spec_row(label, value)));
        details = details.push(section(
            "⚙ Specifications",
            palette::NEON_CYAN,
            Column::with_children(specs).spacing(spacing::SM).into(),
        ));

        if !product.features.is_empty() {
            let chips = product.features.iter().map(|feature| {
                text(feature.as_str())
                    .size(typography::CAPTION)
                    .color(palette::NEON_PURPLE)
                    .into()
            });
            details = details.push(section(
                "✨ Features",
                palette::NEON_BLUE,
                Row::with_children(chips).spacing(spacing::SM).wrap().into(),
            ));
        }

        details = details.push(section(
            "📞 Contact",
            palette::NEON_GREEN,
            link_list("☎", &PHONES),
        ));
        details = details.push(section(
            "✈ Telegram",
            palette::NEON_BLUE,
            link_list("✈", &TELEGRAMS),
        ));

        let map = mouse_area(
            button(
                container(text("🌎 Andijan, Mashrab st. 245").size(typography::BODY))
                    .center_x(Length::Fill),
            )
            .width(Length::Fill)
            .padding(spacing::SM)
            .on_press(Message::LinkPressed(Link::StoreMap))
            .style(styles::button::primary),
        )
        .on_enter(Message::MapHovered);
        details = details.push(section(
            "ℹ Information",
            palette::NEON_CYAN,
            column![
                text("✈ Free delivery across Uzbekistan").size(typography::BODY),
                text("⚠ 95% of the payment after delivery").size(typography::BODY),
                map,
            ]
            .spacing(spacing::SM)
            .into(),
        ));

        let order = mouse_area(
            button(
                container(text("🛒 Place an order").size(typography::BODY_LG))
                    .center_x(Length::Fill),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .on_press(Message::OrderPressed)
            .style(styles::button::toolbar(palette::NEON_GREEN)),
        )
        .on_enter(Message::ActionHovered);
        let favorite = mouse_area(
            button(text("❤").size(typography::BODY_LG))
                .padding(spacing::MD)
                .on_press(Message::FavoritePressed)
                .style(styles::button::toolbar(palette::NEON_BLUE)),
        )
        .on_enter(Message::ActionHovered);
        details = details.push(row![order, favorite].spacing(spacing::MD));

        details.into()
    }
}

fn section<'a>(
    title: &'a str,
    accent: iced::Color,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    container(
        column![text(title).size(typography::BODY_LG).color(accent), content]
            .spacing(spacing::SM),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

fn link_list<'a>(icon: &'a str, links: &'a [(Link, &'a str)]) -> Element<'a, Message> {
    let rows = links.iter().map(|&(link, label)| {
        button(text(format!("{icon} {label}")).size(typography::BODY))
            .on_press(Message::LinkPressed(link))
            .style(styles::button::link(palette::WHITE))
            .into()
    });
    Column::with_children(rows).spacing(spacing::XS).into()
}

fn spec_row<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    row![
        text(label).size(typography::BODY).color(palette::NEON_GREEN),
        Space::new().width(Length::Fill),
        text(value).size(typography::BODY),
    ]
    .spacing(spacing::SM)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingCuePlayer;
    use crate::catalog::{Location, ProductKind};
    use crate::config::DEFAULT_CUE_VOLUME;

    fn product(images: usize) -> Product {
        Product {
            id: "tp-480".into(),
            name: "ThinkPad T480".into(),
            processor: Some("i5-8350U".into()),
            ram: Some("16GB".into()),
            storage: None,
            graphics: None,
            display: None,
            price: Some("280$".into()),
            features: vec!["Backlit keyboard".into()],
            image: None,
            images: (0..images).map(|i| format!("images/{i}.png")).collect(),
            location: Location::Default,
            added: None,
            kind: ProductKind::Laptop,
        }
    }

    #[test]
    fn starts_on_main_image() {
        let state = State::new(product(3));
        assert_eq!(state.selected_image(), Some("images/0.png"));
    }

    #[test]
    fn thumbnails_capped_and_hidden_for_single_image() {
        assert_eq!(State::new(product(12)).thumbnails().len(), MAX_DETAIL_THUMBNAILS);
        assert!(State::new(product(1)).thumbnails().is_empty());
    }

    #[test]
    fn thumbnail_selects_with_soft_click() {
        let cues = RecordingCuePlayer::new();
        let mut state = State::new(product(4));
        assert_eq!(state.handle(Message::ThumbnailPressed(2), &cues), Event::None);
        assert_eq!(state.selected_image(), Some("images/2.png"));
        assert_eq!(cues.played(), vec![(Cue::Click, THUMBNAIL_CUE_VOLUME)]);

        assert_eq!(state.handle(Message::ThumbnailPressed(9), &cues), Event::None);
        assert_eq!(state.selected_image(), Some("images/2.png"));
        assert_eq!(cues.played().len(), 1);
    }

    #[test]
    fn main_image_flashes_and_opens_viewer() {
        let cues = RecordingCuePlayer::new();
        let mut state = State::new(product(2));
        assert_eq!(
            state.handle(Message::MainImagePressed, &cues),
            Event::OpenViewer {
                reference: "images/0.png".into(),
                alt: "ThinkPad T480".into(),
            }
        );
        assert_eq!(cues.played(), vec![(Cue::Flash, DEFAULT_CUE_VOLUME)]);
    }

    #[test]
    fn main_image_without_picture_does_nothing() {
        let cues = RecordingCuePlayer::new();
        let mut state = State::new(product(0));
        assert_eq!(state.handle(Message::MainImagePressed, &cues), Event::None);
        assert!(cues.played().is_empty());
    }

    #[test]
    fn order_plays_game_and_opens_shop_telegram() {
        let cues = RecordingCuePlayer::new();
        let mut state = State::new(product(1));
        assert_eq!(
            state.handle(Message::OrderPressed, &cues),
            Event::OpenLink(Link::ShopTelegram)
        );
        assert_eq!(cues.played(), vec![(Cue::Game, DEFAULT_CUE_VOLUME)]);
        assert_eq!(Link::ShopTelegram.url(), "https://t.me/Laptop_centri");
    }

    #[test]
    fn contact_links_open_with_their_cue() {
        let cues = RecordingCuePlayer::new();
        let mut state = State::new(product(1));

        for (link, _) in PHONES.into_iter().chain(TELEGRAMS) {
            assert_eq!(state.handle(Message::LinkPressed(link), &cues), Event::OpenLink(link));
        }
        assert_eq!(
            state.handle(Message::LinkPressed(Link::StoreMap), &cues),
            Event::OpenLink(Link::StoreMap)
        );

        let played = cues.played();
        assert_eq!(played[..3], [(Cue::Ding, DEFAULT_CUE_VOLUME); 3]);
        assert_eq!(played[3..6], [(Cue::Click, TELEGRAM_CUE_VOLUME); 3]);
        assert_eq!(played[6], (Cue::Click, DEFAULT_CUE_VOLUME));

        let phones: Vec<&str> = PHONES.iter().map(|(link, _)| link.url()).collect();
        assert_eq!(
            phones,
            ["tel:+998931480006", "tel:+998973386050", "tel:+998888660906"]
        );
        let telegrams: Vec<&str> = TELEGRAMS.iter().map(|(link, _)| link.url()).collect();
        assert_eq!(
            telegrams,
            [
                "https://t.me/admin_noutbuk_olami",
                "https://t.me/Laptop0006",
                "https://t.me/OlimjonErnazarov",
            ]
        );
    }

    #[test]
    fn favorite_only_dings() {
        let cues = RecordingCuePlayer::new();
        let mut state = State::new(product(1));
        assert_eq!(state.handle(Message::FavoritePressed, &cues), Event::None);
        assert_eq!(cues.cues(), vec![Cue::Ding]);
    }

    #[test]
    fn close_plays_close_cue() {
        let cues = RecordingCuePlayer::new();
        let mut state = State::new(product(1));
        assert_eq!(state.handle(Message::Close, &cues), Event::Closed);
        assert_eq!(cues.cues(), vec![Cue::Close]);
    }
}
