// SPDX-License-Identifier: MPL-2.0
//! Product records as stored in the catalog file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store a product is stocked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Not tied to a branch. Also the "all locations" filter value.
    #[default]
    Default,
    Mashrab,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Default, Location::Mashrab];

    /// Identifier used in config files.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Location::Default => "default",
            Location::Mashrab => "mashrab",
        }
    }

    /// Parses a config identifier. Unknown values yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|location| location.key().eq_ignore_ascii_case(key.trim()))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Location::Default => "All locations",
            Location::Mashrab => "Andijan, Mashrab st. 245",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[default]
    Laptop,
    Desktop,
}

/// One catalog product. Every descriptive field except the name is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Display price, e.g. `"450$"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Main image. Falls back to the first entry of `images`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<NaiveDate>,
    #[serde(default)]
    pub kind: ProductKind,
}

impl Product {
    /// Image shown first in the detail view.
    #[must_use]
    pub fn main_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
    }

    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.kind == ProductKind::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Product {
        toml::from_str(source).unwrap_or_else(|err| panic!("invalid product: {err}"))
    }

    #[test]
    fn minimal_product_uses_defaults() {
        let product = parse(r#"id = "p1""#);
        assert!(product.name.is_empty());
        assert_eq!(product.location, Location::Default);
        assert_eq!(product.kind, ProductKind::Laptop);
        assert!(product.main_image().is_none());
    }

    #[test]
    fn full_product_parses_dates_and_enums() {
        let product = parse(
            r#"
            id = "p2"
            name = "HP Victus"
            graphics = "RTX 3050"
            price = "650$"
            location = "mashrab"
            kind = "desktop"
            added = "2025-03-14"
            images = ["a.jpg", "b.jpg"]
            "#,
        );
        assert_eq!(product.location, Location::Mashrab);
        assert!(product.is_desktop());
        assert_eq!(product.added, NaiveDate::from_ymd_opt(2025, 3, 14));
        assert_eq!(product.main_image(), Some("a.jpg"));
    }

    #[test]
    fn explicit_image_wins_over_gallery() {
        let mut product = parse(r#"id = "p3""#);
        product.images = vec!["gallery.jpg".into()];
        product.image = Some("main.jpg".into());
        assert_eq!(product.main_image(), Some("main.jpg"));
    }

    #[test]
    fn location_keys_round_trip() {
        for location in Location::ALL {
            assert_eq!(Location::from_key(location.key()), Some(location));
        }
        assert_eq!(Location::from_key(" MASHRAB "), Some(Location::Mashrab));
        assert_eq!(Location::from_key("tashkent"), None);
    }
}
