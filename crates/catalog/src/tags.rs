//! Active-filter tags.
//!
//! A tag is a removable badge summarizing one non-default criterion. Tags
//! carry no identity of their own: the whole set is recomputed from the
//! current criteria on every change. They are a tagged variant (kind +
//! value), not a `"type:value"` string to be re-split later; the string form
//! exists only in `Display`.

use serde::{Deserialize, Serialize};

use mmomart_core::{PriceRange, ValueObject};

use crate::filter::FilterCriteria;

/// Which criteria field a tag (or a tag removal) refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Search,
    Category,
    Seller,
    Price,
}

impl core::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            FilterKind::Search => "search",
            FilterKind::Category => "category",
            FilterKind::Seller => "seller",
            FilterKind::Price => "price",
        };
        f.write_str(label)
    }
}

/// One active, independently removable filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterTag {
    Search(String),
    Category(String),
    Seller(String),
    Price(PriceRange),
}

impl FilterTag {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterTag::Search(_) => FilterKind::Search,
            FilterTag::Category(_) => FilterKind::Category,
            FilterTag::Seller(_) => FilterKind::Seller,
            FilterTag::Price(_) => FilterKind::Price,
        }
    }
}

impl ValueObject for FilterTag {}

impl core::fmt::Display for FilterTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FilterTag::Search(text) => write!(f, "search:{text}"),
            FilterTag::Category(name) => write!(f, "category:{name}"),
            FilterTag::Seller(name) => write!(f, "seller:{name}"),
            FilterTag::Price(range) => write!(f, "price:{range}"),
        }
    }
}

/// One tag per criteria field whose value differs from `defaults`.
///
/// The price tag carries both bounds; its display form is the localized
/// range string.
pub fn derive_active_tags(criteria: &FilterCriteria, defaults: &FilterCriteria) -> Vec<FilterTag> {
    let mut tags = Vec::new();
    if criteria.search != defaults.search {
        tags.push(FilterTag::Search(criteria.search.clone()));
    }
    if criteria.category != defaults.category {
        if let Some(name) = &criteria.category {
            tags.push(FilterTag::Category(name.clone()));
        }
    }
    if criteria.seller != defaults.seller {
        if let Some(name) = &criteria.seller {
            tags.push(FilterTag::Seller(name.clone()));
        }
    }
    if criteria.price != defaults.price {
        tags.push(FilterTag::Price(criteria.price));
    }
    tags
}
