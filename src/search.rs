// SPDX-License-Identifier: MPL-2.0
//! Name and location filtering of the entries at the current level.

use crate::catalog::{Entry, Location};

/// Active search query and location filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    query: String,
    location: Location,
}

impl Filter {
    #[must_use]
    pub fn new(location: Location) -> Self {
        Self {
            query: String::new(),
            location,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Whether `entry` passes both the name and the location filter.
    ///
    /// [`Location::Default`] admits everything. Any other location only
    /// admits products stocked there, so folders drop out.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        let matches_query = self.query.is_empty()
            || entry
                .name()
                .to_lowercase()
                .contains(&self.query.to_lowercase());
        let matches_location =
            self.location == Location::Default || entry.location() == Some(self.location);
        matches_query && matches_location
    }

    /// Entries that pass the filter, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Folder, FolderId, Product};

    fn product(name: &str, location: Location) -> Entry {
        let mut product: Product = toml::from_str(r#"id = "x""#).unwrap_or_else(|e| panic!("{e}"));
        product.name = name.into();
        product.location = location;
        Entry::Product(product)
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry::Folder(Folder {
                id: FolderId(1),
                name: "Gaming laptops".into(),
                entries: Vec::new(),
            }),
            product("ThinkPad T480", Location::Default),
            product("ThinkPad X1 Carbon", Location::Mashrab),
            product("MacBook Air", Location::Mashrab),
        ]
    }

    fn names<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
        entries.iter().map(|entry| entry.name()).collect()
    }

    #[test]
    fn empty_query_keeps_everything() {
        let entries = entries();
        assert_eq!(Filter::default().apply(&entries).len(), 4);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let entries = entries();
        let mut filter = Filter::default();
        filter.set_query("THINKpad");
        assert_eq!(
            names(&filter.apply(&entries)),
            ["ThinkPad T480", "ThinkPad X1 Carbon"]
        );

        filter.set_query("laptops");
        assert_eq!(names(&filter.apply(&entries)), ["Gaming laptops"]);

        filter.set_query("zzz");
        assert!(filter.apply(&entries).is_empty());

        filter.clear_query();
        assert_eq!(filter.apply(&entries).len(), 4);
    }

    #[test]
    fn location_filter_drops_folders_and_other_stores() {
        let entries = entries();
        let mut filter = Filter::new(Location::Mashrab);
        assert_eq!(
            names(&filter.apply(&entries)),
            ["ThinkPad X1 Carbon", "MacBook Air"]
        );

        filter.set_query("mac");
        assert_eq!(names(&filter.apply(&entries)), ["MacBook Air"]);
    }
}
