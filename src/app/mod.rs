// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog views and the
//! overlays.
//!
//! The `App` struct wires together the domains (catalog, navigation, search,
//! advertisements, image viewer) and translates component events into state
//! changes. Startup data problems never abort the application: a broken
//! external file falls back to the embedded data with a warning.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::ads::carousel::AdCarousel;
use crate::ads::{self, Advertisement, SlideDurations};
use crate::audio::{self, SharedCuePlayer};
use crate::catalog::media::{MediaLibrary, MediaRoot};
use crate::catalog::{source, Catalog, Entry, Location, Rules};
use crate::config::{self, Config};
use crate::navigation::NavigationPath;
use crate::search::Filter;
use crate::ui::detail;
use crate::ui::state::ScrollLock;
use crate::ui::viewer::ZoomPanViewer;
use chrono::NaiveDate;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

const TITLE: &str = "Noutbuk olami";

/// Id of the scrollable holding the grid or the detail page.
pub(crate) const CONTENT_SCROLLABLE_ID: &str = "catalog-content";

/// Root Iced application state.
pub struct App {
    cues: SharedCuePlayer,
    scroll_lock: ScrollLock,
    catalog: Catalog,
    ads: Vec<Advertisement>,
    /// Product images, preloaded for every catalog entry.
    media: MediaLibrary,
    /// Advertisement images, loaded when the carousel opens.
    ad_media: MediaLibrary,
    path: NavigationPath,
    filter: Filter,
    /// Product shown in the detail view instead of the grid.
    selection: Option<detail::State>,
    sidebar_open: bool,
    viewer: ZoomPanViewer,
    carousel: AdCarousel,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("path", &self.path)
            .field("query", &self.filter.query())
            .field("viewer_open", &self.viewer.is_open())
            .field("ads_open", &self.carousel.is_open())
            .finish()
    }
}

/// Everything the application needs, already loaded.
struct Parts {
    config: Config,
    cues: SharedCuePlayer,
    catalog: Catalog,
    media_root: MediaRoot,
    ads: Vec<Advertisement>,
    ad_media_root: MediaRoot,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, catalog and advertisements, then builds the state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default settings");
        }

        let today = chrono::Local::now().date_naive();
        let (catalog, media_root) = load_catalog(flags.catalog_path.as_deref(), today, &config);
        let (ads, ad_media_root) = load_advertisements(flags.ads_path.as_deref());
        let cues = audio::create_player(&config, flags.muted);

        tracing::info!(
            products = catalog.product_count(),
            ads = ads.len(),
            "catalog ready"
        );

        let app = Self::from_parts(Parts {
            config,
            cues,
            catalog,
            media_root,
            ads,
            ad_media_root,
        });
        (app, Task::none())
    }

    fn from_parts(parts: Parts) -> Self {
        let Parts {
            config,
            cues,
            catalog,
            media_root,
            ads,
            ad_media_root,
        } = parts;

        let scroll_lock = ScrollLock::new();
        let window_size = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);

        let location = config
            .catalog
            .default_location
            .as_deref()
            .and_then(|key| {
                let parsed = Location::from_key(key);
                if parsed.is_none() {
                    tracing::warn!(key, "unknown default location");
                }
                parsed
            })
            .unwrap_or_default();

        let mut media = MediaLibrary::new(media_root);
        preload_images(&mut media, catalog.root());

        let viewer = ZoomPanViewer::new(cues.clone(), scroll_lock.clone(), window_size);
        let carousel = AdCarousel::new(
            cues.clone(),
            scroll_lock.clone(),
            SlideDurations::from_config(&config),
            config.ads.enabled.unwrap_or(true),
        );

        Self {
            cues,
            scroll_lock,
            catalog,
            ads,
            media,
            ad_media: MediaLibrary::new(ad_media_root),
            path: NavigationPath::new(),
            filter: Filter::new(location),
            selection: None,
            sidebar_open: true,
            viewer,
            carousel,
        }
    }

    fn title(&self) -> String {
        match self.path.breadcrumbs(&self.catalog).last() {
            Some(folder) => format!("{folder} - {TITLE}"),
            None => TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self)
    }
}

/// Reads and categorizes the catalog. A broken external file falls back to
/// the embedded catalog; a broken embedded catalog yields an empty one.
fn load_catalog(path: Option<&str>, today: NaiveDate, config: &Config) -> (Catalog, MediaRoot) {
    let rules = Rules::from_config(config);
    let loaded = source::load_products(path.map(Path::new)).or_else(|err| {
        tracing::warn!(%err, "falling back to the embedded catalog");
        source::load_products(None)
    });

    match loaded {
        Ok((products, root)) => (Catalog::categorize(products, today, &rules), root),
        Err(err) => {
            tracing::warn!(%err, "catalog unavailable");
            (Catalog::categorize(Vec::new(), today, &rules), MediaRoot::Embedded)
        }
    }
}

fn load_advertisements(path: Option<&str>) -> (Vec<Advertisement>, MediaRoot) {
    let loaded = ads::load_ads(path.map(Path::new)).or_else(|err| {
        tracing::warn!(%err, "falling back to the embedded advertisements");
        ads::load_ads(None)
    });

    loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "advertisements unavailable");
        (Vec::new(), MediaRoot::Embedded)
    })
}

fn preload_images(media: &mut MediaLibrary, entries: &[Entry]) {
    for entry in entries {
        match entry {
            Entry::Folder(folder) => preload_images(media, &folder.entries),
            Entry::Product(product) => {
                for reference in product.image.iter().chain(&product.images) {
                    media.load(reference);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Cue, RecordingCuePlayer};
    use crate::catalog::{Category, FolderId};
    use crate::ui::{detail, grid, sidebar, toolbar};
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap_or_default()
    }

    fn app_with(ads_enabled: bool) -> (App, Arc<RecordingCuePlayer>) {
        let mut config = Config::default();
        config.ads.enabled = Some(ads_enabled);
        let (catalog, media_root) = load_catalog(None, today(), &config);
        let (ads, ad_media_root) = load_advertisements(None);
        let cues = Arc::new(RecordingCuePlayer::new());
        let app = App::from_parts(Parts {
            config,
            cues: cues.clone(),
            catalog,
            media_root,
            ads,
            ad_media_root,
        });
        (app, cues)
    }

    fn first_product_id(app: &App) -> String {
        app.path
            .resolve(&app.catalog)
            .iter()
            .find_map(Entry::as_product)
            .map(|product| product.id.clone())
            .unwrap_or_default()
    }

    #[test]
    fn embedded_data_loads_at_startup() {
        let (app, _) = app_with(true);
        assert_eq!(app.catalog.root().len(), Category::ALL.len());
        assert!(app.catalog.product_count() > 0);
        assert!(!app.ads.is_empty());
        assert!(app.path.is_root());
        assert_eq!(app.title(), TITLE);
    }

    #[test]
    fn folder_card_with_ads_disabled_enters_directly() {
        let (mut app, _) = app_with(false);
        let _ = app.update(Message::Grid(grid::Message::FolderPressed(FolderId(1))));
        assert_eq!(app.path.ids(), &[FolderId(1)]);
        assert!(!app.carousel.is_open());
        assert!(app.title().starts_with(Category::Gaming.title()));
    }

    #[test]
    fn folder_card_with_ads_shows_carousel_first() {
        let (mut app, cues) = app_with(true);
        let _ = app.update(Message::Grid(grid::Message::FolderPressed(FolderId(2))));
        assert!(app.carousel.is_open());
        assert!(app.path.is_root());
        assert!(app.scroll_lock.is_locked());
        assert_eq!(cues.cues().last(), Some(&Cue::Pop));

        let _ = app.update(Message::Ads(crate::ads::carousel::Message::Continue));
        assert!(!app.carousel.is_open());
        assert!(!app.scroll_lock.is_locked());
        assert_eq!(app.path.ids(), &[FolderId(2)]);
    }

    #[test]
    fn selecting_a_product_opens_detail_and_viewer() {
        let (mut app, _) = app_with(false);
        let _ = app.update(Message::Sidebar(sidebar::Message::CategorySelected(
            Category::Business,
        )));
        let id = first_product_id(&app);
        let _ = app.update(Message::Grid(grid::Message::ProductPressed(id.clone())));
        assert_eq!(app.selection.as_ref().map(|s| s.product().id.clone()), Some(id));

        let _ = app.update(Message::Detail(detail::Message::MainImagePressed));
        assert!(app.viewer.is_open());
        assert!(app.scroll_lock.is_locked());

        let _ = app.update(Message::Viewer(
            crate::ui::viewer::Message::CloseRequested,
        ));
        assert!(!app.viewer.is_open());
        assert!(!app.scroll_lock.is_locked());
        assert!(app.selection.is_some());
    }

    #[test]
    fn order_button_plays_game_cue() {
        let (mut app, cues) = app_with(false);
        let _ = app.update(Message::Sidebar(sidebar::Message::CategorySelected(
            Category::Gaming,
        )));
        let id = first_product_id(&app);
        let _ = app.update(Message::Grid(grid::Message::ProductPressed(id)));

        let _ = app.update(Message::Detail(detail::Message::OrderPressed));
        assert_eq!(cues.cues().last(), Some(&Cue::Game));
        assert!(app.selection.is_some());
    }

    #[test]
    fn back_and_home_clear_selection() {
        let (mut app, cues) = app_with(false);
        let _ = app.update(Message::Sidebar(sidebar::Message::CategorySelected(
            Category::Business,
        )));
        let id = first_product_id(&app);
        let _ = app.update(Message::Grid(grid::Message::ProductPressed(id)));

        let _ = app.update(Message::Toolbar(toolbar::Message::Back));
        assert!(app.path.is_root());
        assert!(app.selection.is_none());
        assert_eq!(cues.cues().last(), Some(&Cue::Back));

        let before = cues.played().len();
        let _ = app.update(Message::Toolbar(toolbar::Message::Back));
        assert_eq!(cues.played().len(), before);

        let _ = app.update(Message::Sidebar(sidebar::Message::CategorySelected(
            Category::Gaming,
        )));
        let _ = app.update(Message::Toolbar(toolbar::Message::Home));
        assert!(app.path.is_root());
        assert_eq!(cues.cues().last(), Some(&Cue::Click));
    }

    #[test]
    fn search_filters_current_level() {
        let (mut app, _) = app_with(false);
        let _ = app.update(Message::Toolbar(toolbar::Message::QueryChanged(
            "GAMING".into(),
        )));
        let visible = app.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name(), Category::Gaming.title());

        let _ = app.update(Message::Toolbar(toolbar::Message::ClearQuery));
        assert_eq!(app.visible_entries().len(), Category::ALL.len());
    }

    #[test]
    fn location_filter_hides_folders_and_foreign_products() {
        let (mut app, _) = app_with(false);
        let _ = app.update(Message::Sidebar(sidebar::Message::LocationSelected(
            Location::Mashrab,
        )));
        assert!(app.visible_entries().is_empty());
    }

    #[test]
    fn toggling_menu_hides_sidebar() {
        let (mut app, _) = app_with(false);
        assert!(app.sidebar_open);
        let _ = app.update(Message::Toolbar(toolbar::Message::ToggleMenu));
        assert!(!app.sidebar_open);
    }

    #[test]
    fn resize_reaches_viewer() {
        let (mut app, _) = app_with(false);
        let _ = app.update(Message::WindowResized(Size::new(900.0, 700.0)));
        assert_eq!(app.viewer.window_size(), Size::new(900.0, 700.0));
    }
}
