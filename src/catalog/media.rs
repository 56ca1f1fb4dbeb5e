// SPDX-License-Identifier: MPL-2.0
//! Image loading for product and advertisement media.

use super::source;
use iced::widget::image;
use iced::Size;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Base that relative media references are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRoot {
    Embedded,
    Directory(PathBuf),
}

impl MediaRoot {
    /// Root for a data file on disk: its parent directory.
    #[must_use]
    pub fn for_file(path: &Path) -> Self {
        let dir = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self::Directory(dir)
    }
}

/// Decoded-on-demand image with its pixel size, if known.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub natural_size: Option<Size<u32>>,
}

/// Strips the leading `/` web-style references carry.
#[must_use]
pub fn normalize_reference(reference: &str) -> &str {
    reference.strip_prefix('/').unwrap_or(reference)
}

/// Cache of resolved media handles.
///
/// A handle keeps its identity across frames, so the renderer uploads each
/// image once.
#[derive(Debug)]
pub struct MediaLibrary {
    root: MediaRoot,
    cache: HashMap<String, Option<LoadedImage>>,
}

impl MediaLibrary {
    #[must_use]
    pub fn new(root: MediaRoot) -> Self {
        Self {
            root,
            cache: HashMap::new(),
        }
    }

    /// Resolves `reference`, remembering failures too.
    pub fn load(&mut self, reference: &str) -> Option<LoadedImage> {
        let reference = normalize_reference(reference);
        if let Some(cached) = self.cache.get(reference) {
            return cached.clone();
        }

        let loaded = self.resolve(reference);
        if loaded.is_none() {
            tracing::warn!(reference, "media not found");
        }
        self.cache.insert(reference.to_string(), loaded.clone());
        loaded
    }

    /// Previously loaded image for `reference`.
    #[must_use]
    pub fn get(&self, reference: &str) -> Option<&LoadedImage> {
        self.cache
            .get(normalize_reference(reference))
            .and_then(Option::as_ref)
    }

    fn resolve(&self, reference: &str) -> Option<LoadedImage> {
        match &self.root {
            MediaRoot::Embedded => {
                let bytes = source::embedded_bytes(reference)?;
                let natural_size = dimensions_of(&bytes);
                Some(LoadedImage {
                    handle: image::Handle::from_bytes(bytes),
                    natural_size,
                })
            }
            MediaRoot::Directory(dir) => {
                let path = dir.join(reference);
                if !path.is_file() {
                    return None;
                }
                let natural_size = image_rs::image_dimensions(&path)
                    .ok()
                    .map(|(width, height)| Size::new(width, height));
                Some(LoadedImage {
                    handle: image::Handle::from_path(path),
                    natural_size,
                })
            }
        }
    }
}

fn dimensions_of(bytes: &[u8]) -> Option<Size<u32>> {
    image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
        .map(|(width, height)| Size::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn leading_slash_is_stripped() {
        assert_eq!(normalize_reference("/ads/a.png"), "ads/a.png");
        assert_eq!(normalize_reference("ads/a.png"), "ads/a.png");
    }

    #[test]
    fn embedded_images_report_their_size() {
        let mut library = MediaLibrary::new(MediaRoot::Embedded);
        let image = library.load("images/laptop-blue.png");
        assert_eq!(image.and_then(|i| i.natural_size), Some(Size::new(320, 200)));
        assert!(library.get("/images/laptop-blue.png").is_some());
    }

    #[test]
    fn missing_media_is_cached_as_absent() {
        let dir = tempdir().unwrap_or_else(|e| panic!("{e}"));
        let mut library = MediaLibrary::new(MediaRoot::Directory(dir.path().to_path_buf()));
        assert!(library.load("nope.png").is_none());
        assert!(library.get("nope.png").is_none());
    }

    #[test]
    fn root_for_file_is_its_directory() {
        assert_eq!(
            MediaRoot::for_file(Path::new("/data/catalog.toml")),
            MediaRoot::Directory(PathBuf::from("/data"))
        );
    }
}
