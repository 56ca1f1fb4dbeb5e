// SPDX-License-Identifier: MPL-2.0
//! Interstitial advertisements shown before a category opens.

pub mod carousel;

pub use carousel::AdCarousel;

use crate::catalog::media::MediaRoot;
use crate::catalog::source;
use crate::config::Config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdKind {
    #[default]
    Image,
    Video,
}

/// One advertisement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advertisement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: AdKind,
    pub source: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// How long each kind of slide stays up before the carousel advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDurations {
    pub image: Duration,
    pub video: Duration,
}

impl SlideDurations {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            image: config.ad_image_duration(),
            video: config.ad_video_duration(),
        }
    }

    #[must_use]
    pub fn for_kind(&self, kind: AdKind) -> Duration {
        match kind {
            AdKind::Image => self.image,
            AdKind::Video => self.video,
        }
    }
}

impl Default for SlideDurations {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Deserialize)]
struct AdsFile {
    #[serde(default)]
    ads: Vec<Advertisement>,
}

/// Parses an `[[ads]]` TOML document.
///
/// # Errors
///
/// Returns [`Error::Catalog`] if the document is not valid.
pub fn parse_ads(text: &str) -> Result<Vec<Advertisement>> {
    toml::from_str::<AdsFile>(text)
        .map(|file| file.ads)
        .map_err(|e| Error::Catalog(format!("invalid advertisement list: {e}")))
}

/// Loads the ads of `path`, or the embedded list when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_ads(path: Option<&Path>) -> Result<(Vec<Advertisement>, MediaRoot)> {
    match path {
        Some(path) => {
            let ads = parse_ads(&fs::read_to_string(path)?)?;
            tracing::info!(path = %path.display(), count = ads.len(), "loaded advertisement file");
            Ok((ads, MediaRoot::for_file(path)))
        }
        None => {
            let ads = parse_ads(&source::embedded_text(source::ADS_FILE)?)?;
            Ok((ads, MediaRoot::Embedded))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_ads_parse() {
        let (ads, root) = load_ads(None).unwrap_or_else(|e| panic!("{e}"));
        assert!(ads.iter().any(|ad| ad.active));
        assert!(ads.iter().any(|ad| !ad.active));
        assert_eq!(root, MediaRoot::Embedded);
    }

    #[test]
    fn active_defaults_to_true() {
        let ads = parse_ads(
            r#"
            [[ads]]
            source = "a.png"
            "#,
        )
        .unwrap_or_default();
        assert_eq!(ads.len(), 1);
        assert!(ads[0].active);
        assert_eq!(ads[0].kind, AdKind::Image);
    }

    #[test]
    fn ad_without_source_is_rejected() {
        assert!(parse_ads("[[ads]]\ntitle = \"x\"").is_err());
    }

    #[test]
    fn durations_depend_on_kind() {
        let durations = SlideDurations::default();
        assert_eq!(durations.for_kind(AdKind::Image), Duration::from_secs(5));
        assert_eq!(durations.for_kind(AdKind::Video), Duration::from_secs(15));
    }
}
