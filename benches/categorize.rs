// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog construction.
//!
//! Measures the performance of:
//! - Parsing the built-in catalog file
//! - Sorting parsed products into category folders
//! - Filtering a folder by name and location

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use laptop_catalog::catalog::source::{embedded_text, parse_products};
use laptop_catalog::catalog::{Catalog, Category, Location, Product, Rules};
use laptop_catalog::search::Filter;
use std::hint::black_box;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// The built-in products repeated until the list is large enough to measure.
fn large_product_list() -> Vec<Product> {
    let text = embedded_text("catalog.toml").unwrap();
    let products = parse_products(&text).unwrap();
    (0..64)
        .flat_map(|round| {
            products.iter().cloned().map(move |mut product| {
                product.name = format!("{} #{round}", product.name);
                product
            })
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let text = embedded_text("catalog.toml").unwrap();

    group.bench_function("parse_embedded", |b| {
        b.iter(|| black_box(parse_products(black_box(&text)).unwrap()));
    });

    group.finish();
}

fn bench_categorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let products = large_product_list();
    let rules = Rules::default();

    group.bench_function("categorize", |b| {
        b.iter(|| {
            let catalog = Catalog::categorize(black_box(products.clone()), today(), &rules);
            black_box(catalog);
        });
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let catalog = Catalog::categorize(large_product_list(), today(), &Rules::default());
    let entries = &catalog
        .folder(Category::Business.id())
        .unwrap()
        .entries;

    let mut filter = Filter::new(Location::Mashrab);
    filter.set_query("thinkpad");

    group.bench_function("filter_folder", |b| {
        b.iter(|| black_box(filter.apply(black_box(entries))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_categorize, bench_filter);
criterion_main!(benches);
