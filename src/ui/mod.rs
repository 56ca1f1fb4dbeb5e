// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `Event` for its parent, and a `view`.
//!
//! # Catalog surfaces
//!
//! - [`toolbar`] - Menu toggle, home/back, breadcrumbs, search field
//! - [`sidebar`] - Category shortcuts, location picker, contacts
//! - [`grid`] - Cards for the current folder, "Nothing found" state
//! - [`detail`] - Product page with gallery and specifications
//! - [`taskbar`] - Home shortcut and stock counter
//!
//! # Overlays
//!
//! - [`viewer`] - Full-window zoom/pan image viewer
//! - [`ad_popup`] - Advertisement carousel shown before entering a folder
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (zoom scale, drag, scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod ad_popup;
pub mod design_tokens;
pub mod detail;
pub mod grid;
pub mod sidebar;
pub mod state;
pub mod styles;
pub mod taskbar;
pub mod toolbar;
pub mod viewer;
