// SPDX-License-Identifier: MPL-2.0
//! Bucketing rules that sort products into the top-level categories.

use super::product::Product;
use crate::config::{Config, DEFAULT_NEW_ARRIVAL_MONTHS, DEFAULT_STUDENT_PRICE_CEILING};
use chrono::{Months, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Graphics strings naming a dedicated GPU.
static DEDICATED_GPU_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(rtx|gtx|mx\d*|radeon\s*(rx|pro|vega)|geforce)")
        .expect("dedicated GPU regex should compile")
});

/// Thresholds used by the categorization pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub student_price_ceiling: f64,
    pub new_arrival_months: u32,
}

impl Rules {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            student_price_ceiling: config
                .catalog
                .student_price_ceiling
                .filter(|ceiling| ceiling.is_finite() && *ceiling > 0.0)
                .unwrap_or(DEFAULT_STUDENT_PRICE_CEILING),
            new_arrival_months: config
                .catalog
                .new_arrival_months
                .unwrap_or(DEFAULT_NEW_ARRIVAL_MONTHS),
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            student_price_ceiling: DEFAULT_STUDENT_PRICE_CEILING,
            new_arrival_months: DEFAULT_NEW_ARRIVAL_MONTHS,
        }
    }
}

/// Laptop category a product is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Gaming,
    Business,
    Student,
}

/// Key identifying duplicate listings: `name-processor-ram`, lower-cased.
#[must_use]
pub fn dedupe_key(product: &Product) -> String {
    format!(
        "{}-{}-{}",
        product.name,
        product.processor.as_deref().unwrap_or_default(),
        product.ram.as_deref().unwrap_or_default()
    )
    .to_lowercase()
}

#[must_use]
pub fn has_dedicated_gpu(graphics: &str) -> bool {
    DEDICATED_GPU_PATTERN.is_match(graphics)
}

/// Numeric value of a display price such as `"1 250$"`.
///
/// Everything but digits and dots is dropped, then the longest leading
/// decimal number is read. Unparseable prices are `0`.
#[must_use]
pub fn parse_price(price: &str) -> f64 {
    let cleaned: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut seen_dot = false;
    let end = cleaned
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' {
                if seen_dot {
                    return true;
                }
                seen_dot = true;
            }
            false
        })
        .map_or(cleaned.len(), |(index, _)| index);

    cleaned[..end].parse().unwrap_or(0.0)
}

/// Category of a laptop. Dedicated graphics win, then price decides.
#[must_use]
pub fn bucket_for(product: &Product, rules: &Rules) -> Bucket {
    if product.graphics.as_deref().is_some_and(has_dedicated_gpu) {
        return Bucket::Gaming;
    }

    let price = product.price.as_deref().map_or(0.0, parse_price);
    if price > 0.0 && price <= rules.student_price_ceiling {
        Bucket::Student
    } else {
        Bucket::Business
    }
}

/// Whether `added` falls within the new-arrival window ending `today`.
#[must_use]
pub fn is_new_arrival(added: Option<NaiveDate>, today: NaiveDate, rules: &Rules) -> bool {
    let Some(added) = added else {
        return false;
    };
    let cutoff = today
        .checked_sub_months(Months::new(rules.new_arrival_months))
        .unwrap_or(NaiveDate::MIN);
    added >= cutoff
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop(graphics: Option<&str>, price: Option<&str>) -> Product {
        Product {
            id: "t".into(),
            name: "Test".into(),
            processor: None,
            ram: None,
            storage: None,
            graphics: graphics.map(String::from),
            display: None,
            price: price.map(String::from),
            features: Vec::new(),
            image: None,
            images: Vec::new(),
            location: Default::default(),
            added: None,
            kind: Default::default(),
        }
    }

    #[test]
    fn dedicated_gpus_are_detected() {
        for graphics in [
            "NVIDIA GeForce RTX 4060",
            "gtx 1650",
            "MX450",
            "AMD Radeon RX 6500M",
            "Radeon Pro 5300M",
            "radeonvega 8",
        ] {
            assert!(has_dedicated_gpu(graphics), "{graphics}");
        }
        for graphics in ["Intel UHD Graphics", "Intel Iris Xe", "AMD Radeon Graphics", ""] {
            assert!(!has_dedicated_gpu(graphics), "{graphics}");
        }
    }

    #[test]
    fn price_parsing_keeps_leading_number() {
        assert_eq!(parse_price("450$"), 450.0);
        assert_eq!(parse_price("$1 250"), 1250.0);
        assert_eq!(parse_price("299.99 USD"), 299.99);
        assert_eq!(parse_price("1.200.50"), 1.2);
        assert_eq!(parse_price("call us"), 0.0);
        assert_eq!(parse_price(""), 0.0);
    }

    #[test]
    fn buckets_follow_gpu_then_price() {
        let rules = Rules::default();
        assert_eq!(bucket_for(&laptop(Some("RTX 3050"), Some("200$")), &rules), Bucket::Gaming);
        assert_eq!(bucket_for(&laptop(Some("Intel UHD"), Some("300$")), &rules), Bucket::Student);
        assert_eq!(bucket_for(&laptop(None, Some("301$")), &rules), Bucket::Business);
        assert_eq!(bucket_for(&laptop(None, None), &rules), Bucket::Business);
        assert_eq!(bucket_for(&laptop(None, Some("0$")), &rules), Bucket::Business);
    }

    #[test]
    fn student_ceiling_is_configurable() {
        let rules = Rules {
            student_price_ceiling: 500.0,
            ..Rules::default()
        };
        assert_eq!(bucket_for(&laptop(None, Some("450$")), &rules), Bucket::Student);
    }

    #[test]
    fn dedupe_key_ignores_case_and_missing_fields() {
        let mut a = laptop(None, None);
        a.name = "ThinkPad T480".into();
        a.processor = Some("i5-8350U".into());
        let mut b = a.clone();
        b.name = "THINKPAD t480".into();
        b.processor = Some("I5-8350u".into());

        assert_eq!(dedupe_key(&a), dedupe_key(&b));
        assert_eq!(dedupe_key(&a), "thinkpad t480-i5-8350u-");
    }

    #[test]
    fn new_arrival_window_is_one_month_back() {
        let rules = Rules::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap_or_default();

        let feb_28 = NaiveDate::from_ymd_opt(2025, 2, 28);
        let feb_27 = NaiveDate::from_ymd_opt(2025, 2, 27);
        assert!(is_new_arrival(feb_28, today, &rules));
        assert!(!is_new_arrival(feb_27, today, &rules));
        assert!(!is_new_arrival(None, today, &rules));
    }
}
