use serde::{Deserialize, Serialize};

use mmomart_core::{Money, ProductId, ValueObject};

/// Star rating stored in tenths (45 = 4.5 stars), clamped to `[0, 50]`.
///
/// Tenths keep the type `Eq`/`Hash` where an `f32` would not be.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MAX_TENTHS: u8 = 50;

    pub fn from_tenths(tenths: u8) -> Self {
        Self(tenths.min(Self::MAX_TENTHS))
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }
}

impl ValueObject for Rating {}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// A catalog listing.
///
/// Immutable once supplied; owned by the external catalog supplier (mock
/// data today, an API response in a real deployment). Category and seller
/// may be absent on badly sourced records; absent values never match an
/// equality filter and never raise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Money,
    pub category: Option<String>,
    pub seller: Option<String>,
    pub rating: Rating,
    pub in_stock: bool,
}

/// Distinct categories in first-seen order, for the category dropdown.
///
/// The presentation layer prepends its own "all" entry.
pub fn categories(products: &[Product]) -> Vec<String> {
    distinct(products.iter().filter_map(|p| p.category.as_deref()))
}

/// Distinct sellers in first-seen order, for the seller dropdown.
pub fn sellers(products: &[Product]) -> Vec<String> {
    distinct(products.iter().filter_map(|p| p.seller.as_deref()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn rating_displays_with_one_decimal() {
        assert_eq!(Rating::from_tenths(45).to_string(), "4.5");
        assert_eq!(Rating::from_tenths(40).to_string(), "4.0");
        assert_eq!(Rating::from_tenths(0).to_string(), "0.0");
    }

    #[test]
    fn rating_clamps_to_five_stars() {
        assert_eq!(Rating::from_tenths(99).tenths(), 50);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let products = sample::catalog();
        assert_eq!(categories(&products), vec!["software", "account"]);
    }

    #[test]
    fn sellers_skip_absent_values() {
        let mut products = sample::catalog();
        products[0].seller = None;
        let sellers = sellers(&products);
        assert!(!sellers.contains(&"SEO Master".to_string()));
        assert!(sellers.contains(&"Game Master".to_string()));
    }
}
