// SPDX-License-Identifier: MPL-2.0
//! Where catalog data comes from: the files embedded in the binary, or a
//! TOML file given on the command line.

use super::media::MediaRoot;
use super::product::Product;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
pub(crate) struct DataAsset;

/// Embedded product list.
pub const CATALOG_FILE: &str = "catalog.toml";

/// Embedded advertisement list.
pub const ADS_FILE: &str = "ads.toml";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Contents of an embedded data file.
///
/// # Errors
///
/// Returns [`Error::Catalog`] if the file is missing or not UTF-8.
pub fn embedded_text(name: &str) -> Result<String> {
    let file = DataAsset::get(name)
        .ok_or_else(|| Error::Catalog(format!("embedded file {name} is missing")))?;
    match file.data {
        Cow::Borrowed(bytes) => std::str::from_utf8(bytes).map(str::to_owned),
        Cow::Owned(bytes) => String::from_utf8(bytes).map_err(|e| e.utf8_error()),
    }
    .map_err(|e| Error::Catalog(format!("embedded file {name} is not UTF-8: {e}")))
}

/// Raw bytes of an embedded media file.
#[must_use]
pub fn embedded_bytes(name: &str) -> Option<Vec<u8>> {
    DataAsset::get(name).map(|file| file.data.into_owned())
}

/// Parses a `[[products]]` TOML document.
///
/// # Errors
///
/// Returns [`Error::Catalog`] if the document is not valid.
pub fn parse_products(text: &str) -> Result<Vec<Product>> {
    toml::from_str::<CatalogFile>(text)
        .map(|file| file.products)
        .map_err(|e| Error::Catalog(e.to_string()))
}

/// Loads the products of `path`, or the embedded catalog when `None`.
///
/// Media references are resolved against the file's directory, or against
/// the embedded assets.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_products(path: Option<&Path>) -> Result<(Vec<Product>, MediaRoot)> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let products = parse_products(&text)?;
            tracing::info!(path = %path.display(), count = products.len(), "loaded catalog file");
            Ok((products, MediaRoot::for_file(path)))
        }
        None => {
            let products = parse_products(&embedded_text(CATALOG_FILE)?)?;
            tracing::info!(count = products.len(), "loaded embedded catalog");
            Ok((products, MediaRoot::Embedded))
        }
    }
}
