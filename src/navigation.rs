// SPDX-License-Identifier: MPL-2.0
//! Position in the folder tree.

use crate::catalog::{find_folder, Catalog, Category, Entry, FolderId};

/// Ordered folder ids from the root to the current folder. Empty at root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPath {
    ids: Vec<FolderId>,
}

impl NavigationPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[FolderId] {
        &self.ids
    }

    /// Top-level folder the path starts in.
    #[must_use]
    pub fn top(&self) -> Option<FolderId> {
        self.ids.first().copied()
    }

    pub fn enter(&mut self, id: FolderId) {
        tracing::debug!(?id, "entering folder");
        self.ids.push(id);
    }

    /// Steps up one level. Returns `false` at root.
    pub fn back(&mut self) -> bool {
        let moved = self.ids.pop().is_some();
        if !moved {
            tracing::debug!("already at root");
        }
        moved
    }

    pub fn home(&mut self) {
        self.ids.clear();
    }

    /// Jumps straight to a top-level category.
    pub fn jump_to(&mut self, category: Category) {
        self.ids = vec![category.id()];
    }

    /// Entries at the current level. An unknown id anywhere on the path
    /// yields no entries.
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> &'a [Entry] {
        let mut level = catalog.root();
        for id in &self.ids {
            match find_folder(level, *id) {
                Some(folder) => level = &folder.entries,
                None => {
                    tracing::warn!(path = ?self.ids, "path not found");
                    return &[];
                }
            }
        }
        level
    }

    /// Folder names along the path. Unknown ids show as `"Unknown"`.
    #[must_use]
    pub fn breadcrumbs<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        let mut level = Some(catalog.root());
        self.ids
            .iter()
            .map(|id| {
                let folder = level.and_then(|entries| find_folder(entries, *id));
                level = folder.map(|folder| folder.entries.as_slice());
                folder.map_or("Unknown", |folder| folder.name.as_str())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Folder, Product, Rules};
    use chrono::NaiveDate;

    fn catalog() -> Catalog {
        let product: Product = toml::from_str(
            r#"
            id = "p"
            name = "Pavilion"
            price = "500$"
            "#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
        Catalog::categorize(vec![product], today, &Rules::default())
    }

    #[test]
    fn root_resolves_to_top_folders() {
        let path = NavigationPath::new();
        assert!(path.is_root());
        assert_eq!(path.resolve(&catalog()).len(), 5);
        assert!(path.breadcrumbs(&catalog()).is_empty());
    }

    #[test]
    fn enter_and_back() {
        let catalog = catalog();
        let mut path = NavigationPath::new();
        path.enter(Category::Business.id());

        let entries = path.resolve(&catalog);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "Pavilion");
        assert_eq!(path.breadcrumbs(&catalog), [Category::Business.title()]);

        assert!(path.back());
        assert!(path.is_root());
        assert!(!path.back());
    }

    #[test]
    fn jump_replaces_path() {
        let mut path = NavigationPath::new();
        path.enter(FolderId(1));
        path.enter(FolderId(9));
        path.jump_to(Category::Student);
        assert_eq!(path.ids(), [Category::Student.id()]);
        assert_eq!(path.top(), Some(FolderId(3)));

        path.home();
        assert!(path.is_root());
    }

    #[test]
    fn unknown_id_resolves_empty() {
        let catalog = catalog();
        let mut path = NavigationPath::new();
        path.enter(FolderId(99));
        assert!(path.resolve(&catalog).is_empty());
        assert_eq!(path.breadcrumbs(&catalog), ["Unknown"]);
    }

    #[test]
    fn nested_folders_resolve() {
        let refurbished = Folder {
            id: FolderId(10),
            name: "Refurbished".into(),
            entries: Vec::new(),
        };
        let gaming = Folder {
            id: Category::Gaming.id(),
            name: Category::Gaming.title().into(),
            entries: vec![Entry::Folder(refurbished)],
        };
        let catalog = Catalog::from_root(vec![Entry::Folder(gaming)]);

        let mut path = NavigationPath::new();
        path.enter(Category::Gaming.id());
        path.enter(FolderId(10));
        assert!(path.resolve(&catalog).is_empty());
        assert_eq!(
            path.breadcrumbs(&catalog),
            [Category::Gaming.title(), "Refurbished"]
        );

        path.back();
        assert_eq!(path.resolve(&catalog).len(), 1);
    }
}
