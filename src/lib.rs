// SPDX-License-Identifier: MPL-2.0
//! `laptop_catalog` is a laptop storefront catalog browser built with the Iced
//! GUI framework.
//!
//! Products are sorted into category folders, browsed through a card grid
//! with search and location filters, and inspected in a detail page whose
//! pictures open in a full-window zoom/pan viewer.

pub mod ads;
pub mod app;
pub mod audio;
pub mod catalog;
pub mod config;
pub mod error;
pub mod links;
pub mod navigation;
pub mod search;
pub mod ui;
