// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ads::carousel;
use crate::ui::viewer::component;
use crate::ui::{detail, grid, sidebar, taskbar, toolbar};
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    Sidebar(sidebar::Message),
    Grid(grid::Message),
    Detail(detail::Message),
    Taskbar(taskbar::Message),
    Viewer(component::Message),
    Ads(carousel::Message),
    /// The main window changed size.
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// External catalog file replacing the embedded one.
    pub catalog_path: Option<String>,
    /// External advertisement file replacing the embedded one.
    pub ads_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LAPTOP_CATALOG_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Disable interaction cues regardless of the config.
    pub muted: bool,
}
