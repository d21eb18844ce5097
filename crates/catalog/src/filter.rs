//! The filter engine: criteria and the product predicate.
//!
//! A pure transformation invoked on every criteria change; the enclosing
//! view re-invokes it and re-renders. There is no state machine here.

use serde::{Deserialize, Serialize};

use mmomart_core::{PriceRange, ValueObject};

use crate::product::Product;
use crate::tags::FilterKind;

/// The user's current constraints on the visible product set.
///
/// Defaults mean "no constraint": empty search, no category/seller selection
/// (`None` plays the role of the UI's "all" entry), price range at the full
/// catalog bounds. Owned by value by the calling view and passed in on each
/// recomputation; never shared mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against product titles.
    pub search: String,
    /// Case-sensitive exact match; `None` admits every category.
    pub category: Option<String>,
    /// Case-sensitive exact match; `None` admits every seller.
    pub seller: Option<String>,
    /// Inclusive bounds on the product price.
    pub price: PriceRange,
}

impl FilterCriteria {
    /// The default criteria for a catalog whose prices span `bounds`.
    pub fn unconstrained(bounds: PriceRange) -> Self {
        Self {
            search: String::new(),
            category: None,
            seller: None,
            price: bounds,
        }
    }

    /// Does `product` satisfy every active constraint?
    ///
    /// Search is a case-insensitive substring match on the title; category
    /// and seller are exact, case-sensitive matches. The asymmetry is
    /// intentional: search is forgiving free text, selections come verbatim
    /// from the facet dropdowns. A product without a category/seller never
    /// matches a concrete selection.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = self.search.is_empty()
            || product
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_category = match &self.category {
            None => true,
            Some(wanted) => product.category.as_deref() == Some(wanted.as_str()),
        };
        let matches_seller = match &self.seller {
            None => true,
            Some(wanted) => product.seller.as_deref() == Some(wanted.as_str()),
        };
        let matches_price = self.price.contains(product.price);

        matches_search && matches_category && matches_seller && matches_price
    }

    /// Reset exactly one field to its default, leaving the rest untouched.
    ///
    /// This is what removing a single active-filter tag does.
    pub fn clear(&mut self, kind: FilterKind, defaults: &FilterCriteria) {
        match kind {
            FilterKind::Search => self.search = defaults.search.clone(),
            FilterKind::Category => self.category = defaults.category.clone(),
            FilterKind::Seller => self.seller = defaults.seller.clone(),
            FilterKind::Price => self.price = defaults.price,
        }
    }

    /// Reset every field (the "clear all" affordance).
    pub fn reset(&mut self, defaults: &FilterCriteria) {
        *self = defaults.clone();
    }
}

impl ValueObject for FilterCriteria {}

/// Visible subset of `products` under `criteria`.
///
/// Stable: the output is a subsequence of the input in the original relative
/// order. Deterministic, no side effects. Default criteria return the input
/// unchanged.
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}
