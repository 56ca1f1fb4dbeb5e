// SPDX-License-Identifier: MPL-2.0
//! Product catalog: loading, categorization, and the folder tree the UI
//! browses.
//!
//! Products are read once (embedded file or `--catalog` override) and sorted
//! into five fixed top-level folders by [`Catalog::categorize`]. The result
//! is immutable for the lifetime of the application.

pub mod categorize;
pub mod media;
pub mod product;
pub mod source;

pub use categorize::Rules;
pub use product::{Location, Product, ProductKind};

use categorize::Bucket;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Identifier of a folder in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderId(pub u32);

/// The fixed top-level folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Gaming,
    Business,
    Student,
    HomeComputer,
    NewArrivals,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Gaming,
        Category::Business,
        Category::Student,
        Category::HomeComputer,
        Category::NewArrivals,
    ];

    #[must_use]
    pub fn id(self) -> FolderId {
        FolderId(match self {
            Category::Gaming => 1,
            Category::Business => 2,
            Category::Student => 3,
            Category::HomeComputer => 4,
            Category::NewArrivals => 5,
        })
    }

    #[must_use]
    pub fn from_id(id: FolderId) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::Gaming => "🎮 Gaming laptops",
            Category::Business => "💼 Business laptops",
            Category::Student => "🎓 Student laptops",
            Category::HomeComputer => "🏠 Home computers",
            Category::NewArrivals => "🔥 New arrivals",
        }
    }
}

impl From<Bucket> for Category {
    fn from(bucket: Bucket) -> Self {
        match bucket {
            Bucket::Gaming => Category::Gaming,
            Bucket::Business => Category::Business,
            Bucket::Student => Category::Student,
        }
    }
}

/// A named group of entries. Folders may nest.
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Folder {
    /// Direct child folder with `id`.
    #[must_use]
    pub fn child(&self, id: FolderId) -> Option<&Folder> {
        find_folder(&self.entries, id)
    }
}

/// Something shown as a card in the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Folder(Folder),
    Product(Product),
}

impl Entry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Entry::Folder(folder) => &folder.name,
            Entry::Product(product) => &product.name,
        }
    }

    /// Store location. Folders have none.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Entry::Folder(_) => None,
            Entry::Product(product) => Some(product.location),
        }
    }

    #[must_use]
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Entry::Folder(folder) => Some(folder),
            Entry::Product(_) => None,
        }
    }

    #[must_use]
    pub fn as_product(&self) -> Option<&Product> {
        match self {
            Entry::Product(product) => Some(product),
            Entry::Folder(_) => None,
        }
    }
}

/// Folder with `id` among `entries`, not descending.
#[must_use]
pub fn find_folder(entries: &[Entry], id: FolderId) -> Option<&Folder> {
    entries
        .iter()
        .filter_map(Entry::as_folder)
        .find(|folder| folder.id == id)
}

fn count_products(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|entry| match entry {
            Entry::Folder(folder) => count_products(&folder.entries),
            Entry::Product(_) => 1,
        })
        .sum()
}

/// Categorized product tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    root: Vec<Entry>,
    product_count: usize,
}

impl Catalog {
    /// Sorts `products` into the five top-level folders.
    ///
    /// Nameless products stay out of the category folders. Duplicates (same
    /// name, processor and RAM, ignoring case) keep their first occurrence
    /// there. New arrivals are picked from the full list.
    #[must_use]
    pub fn categorize(products: Vec<Product>, today: NaiveDate, rules: &Rules) -> Self {
        let product_count = products.len();
        let mut seen = HashSet::new();
        let mut gaming = Vec::new();
        let mut business = Vec::new();
        let mut student = Vec::new();
        let mut home = Vec::new();
        let mut new_arrivals = Vec::new();

        for product in products {
            if categorize::is_new_arrival(product.added, today, rules) {
                new_arrivals.push(Entry::Product(product.clone()));
            }

            if product.name.trim().is_empty() {
                tracing::warn!(id = %product.id, "skipping product without a name");
                continue;
            }

            if !seen.insert(categorize::dedupe_key(&product)) {
                tracing::debug!(id = %product.id, "skipping duplicate listing");
                continue;
            }

            if product.is_desktop() {
                home.push(Entry::Product(product));
                continue;
            }

            match categorize::bucket_for(&product, rules) {
                Bucket::Gaming => gaming.push(Entry::Product(product)),
                Bucket::Business => business.push(Entry::Product(product)),
                Bucket::Student => student.push(Entry::Product(product)),
            }
        }

        let folder = |category: Category, entries: Vec<Entry>| {
            Entry::Folder(Folder {
                id: category.id(),
                name: category.title().to_string(),
                entries,
            })
        };

        let root = vec![
            folder(Category::Gaming, gaming),
            folder(Category::Business, business),
            folder(Category::Student, student),
            folder(Category::HomeComputer, home),
            folder(Category::NewArrivals, new_arrivals),
        ];

        tracing::info!(product_count, "catalog categorized");
        Self {
            root,
            product_count,
        }
    }

    /// Catalog over a prebuilt tree.
    #[must_use]
    pub fn from_root(root: Vec<Entry>) -> Self {
        let product_count = count_products(&root);
        Self {
            root,
            product_count,
        }
    }

    /// Top-level entries.
    #[must_use]
    pub fn root(&self) -> &[Entry] {
        &self.root
    }

    /// Top-level folder with `id`.
    #[must_use]
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        find_folder(&self.root, id)
    }

    /// Number of product records loaded, duplicates and nameless ones included.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.product_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            processor: None,
            ram: None,
            storage: None,
            graphics: None,
            display: None,
            price: None,
            features: Vec::new(),
            image: None,
            images: Vec::new(),
            location: Location::Default,
            added: None,
            kind: ProductKind::Laptop,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default()
    }

    fn ids(catalog: &Catalog, category: Category) -> Vec<String> {
        catalog
            .folder(category.id())
            .map(|folder| {
                folder
                    .entries
                    .iter()
                    .filter_map(Entry::as_product)
                    .map(|product| product.id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn folders_come_in_fixed_order() {
        let catalog = Catalog::categorize(Vec::new(), today(), &Rules::default());
        let names: Vec<&str> = catalog.root().iter().map(Entry::name).collect();
        let expected: Vec<&str> = Category::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(names, expected);

        let ids: Vec<FolderId> = catalog
            .root()
            .iter()
            .filter_map(Entry::as_folder)
            .map(|folder| folder.id)
            .collect();
        assert_eq!(ids, (1..=5).map(FolderId).collect::<Vec<_>>());
    }

    #[test]
    fn products_land_in_their_buckets() {
        let mut gamer = product("g", "Legion 5");
        gamer.graphics = Some("RTX 3060".into());
        let mut cheap = product("s", "Latitude 3189");
        cheap.price = Some("180$".into());
        let mut pricey = product("b", "XPS 13");
        pricey.price = Some("900$".into());
        let mut tower = product("d", "OptiPlex 7050");
        tower.kind = ProductKind::Desktop;
        tower.graphics = Some("GTX 1050".into());

        let catalog = Catalog::categorize(
            vec![gamer, cheap, pricey, tower],
            today(),
            &Rules::default(),
        );

        assert_eq!(ids(&catalog, Category::Gaming), ["g"]);
        assert_eq!(ids(&catalog, Category::Student), ["s"]);
        assert_eq!(ids(&catalog, Category::Business), ["b"]);
        assert_eq!(ids(&catalog, Category::HomeComputer), ["d"]);
        assert_eq!(catalog.product_count(), 4);
    }

    #[test]
    fn duplicates_keep_first_and_nameless_are_skipped() {
        let mut first = product("1", "ThinkPad T14");
        first.ram = Some("16GB".into());
        let mut second = product("2", "thinkpad t14");
        second.ram = Some("16gb".into());
        let nameless = product("3", "  ");

        let catalog = Catalog::categorize(
            vec![first, second, nameless],
            today(),
            &Rules::default(),
        );

        assert_eq!(ids(&catalog, Category::Business), ["1"]);
        assert_eq!(catalog.product_count(), 3);
    }

    #[test]
    fn new_arrivals_include_duplicates() {
        let mut first = product("1", "IdeaPad 3");
        first.added = NaiveDate::from_ymd_opt(2025, 6, 1);
        let mut second = first.clone();
        second.id = "2".into();
        let mut old = product("3", "Aspire 5");
        old.added = NaiveDate::from_ymd_opt(2025, 1, 1);

        let catalog = Catalog::categorize(vec![first, second, old], today(), &Rules::default());

        assert_eq!(ids(&catalog, Category::NewArrivals), ["1", "2"]);
        assert_eq!(ids(&catalog, Category::Business), ["1", "3"]);
    }

    #[test]
    fn nameless_recent_product_is_only_a_new_arrival() {
        let mut nameless = product("1", "");
        nameless.added = NaiveDate::from_ymd_opt(2025, 6, 10);

        let catalog = Catalog::categorize(vec![nameless], today(), &Rules::default());

        assert_eq!(ids(&catalog, Category::NewArrivals), ["1"]);
        for category in [
            Category::Gaming,
            Category::Business,
            Category::Student,
            Category::HomeComputer,
        ] {
            assert!(ids(&catalog, category).is_empty());
        }
    }

    #[test]
    fn category_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert_eq!(Category::from_id(FolderId(42)), None);
    }
}
