// SPDX-License-Identifier: MPL-2.0
//! Shop contacts and social pages opened with the system handler.

use iced::Task;

/// External addresses the storefront links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    ShopPhone,
    SalesPhone,
    AdminPhone,
    /// Order desk, also used by the order button.
    ShopTelegram,
    AdminTelegram,
    SalesTelegram,
    DeveloperTelegram,
    TelegramChannel,
    YouTube,
    Instagram,
    StoreMap,
}

/// Social pages with the icon shown for each.
pub const SOCIALS: [(Link, &str); 3] = [
    (Link::YouTube, "▶"),
    (Link::TelegramChannel, "✈"),
    (Link::Instagram, "◎"),
];

impl Link {
    #[must_use]
    pub fn url(self) -> &'static str {
        match self {
            Link::ShopPhone => "tel:+998931480006",
            Link::SalesPhone => "tel:+998973386050",
            Link::AdminPhone => "tel:+998888660906",
            Link::ShopTelegram => "https://t.me/Laptop_centri",
            Link::AdminTelegram => "https://t.me/admin_noutbuk_olami",
            Link::SalesTelegram => "https://t.me/Laptop0006",
            Link::DeveloperTelegram => "https://t.me/OlimjonErnazarov",
            Link::TelegramChannel => "https://t.me/noutbuk_olami",
            Link::YouTube => "https://www.youtube.com/@uz_laptop",
            Link::Instagram => "https://www.instagram.com/uz_laptop/",
            Link::StoreMap => {
                "https://maps.app.goo.gl/DejpApSEpvmb8YQRA?g_st=com.google.maps.preview.copy"
            }
        }
    }
}

/// Hands `link` to the system handler (browser, dialer, Telegram).
///
/// Failures are logged and otherwise ignored.
pub fn open(link: Link) {
    match open::that_detached(link.url()) {
        Ok(()) => tracing::info!(url = link.url(), "opened link"),
        Err(err) => tracing::warn!(url = link.url(), "cannot open link: {err}"),
    }
}

/// Opens `link` off the update loop.
pub fn open_task<Message: Send + 'static>(link: Link) -> Task<Message> {
    Task::future(async move { open(link) }).discard()
}
