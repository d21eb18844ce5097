//! One user's catalog-browsing session.
//!
//! The session owns a single `FilterCriteria` value and mutates it only in
//! response to its own input events, strictly in sequence - there is no
//! shared "current filters" singleton. Every update recomputes the view
//! through the pure engine; nothing here caches or re-sorts.

use serde::Serialize;

use mmomart_catalog::{
    categories, derive_active_tags, filter_products, sellers, FilterCriteria, FilterKind,
    FilterTag, Product,
};
use mmomart_core::{Money, PriceRange};

/// A single UI input event, already lifted out of widget land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaUpdate {
    /// Keystroke in the search box.
    SearchChanged(String),
    /// Dropdown selection; `None` is the "all" entry.
    CategorySelected(Option<String>),
    /// Dropdown selection; `None` is the "all" entry.
    SellerSelected(Option<String>),
    /// Slider drag: both bounds already numeric.
    PriceRangeChanged(PriceRange),
    /// Free-text price boxes; raw input, sanitized here. An empty box leaves
    /// that bound unchanged.
    PriceTyped { min: String, max: String },
    /// Click on the `x` of one active-filter tag.
    TagRemoved(FilterKind),
    /// The one-click reset affordance on the "no products found" state.
    Reset,
}

/// What the presentation layer renders after an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub active_tags: Vec<FilterTag>,
}

impl CatalogView {
    /// True when the current criteria match nothing; the UI shows the
    /// "no products found" state with a reset button instead of an error.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Catalog slice plus the criteria the user has built up so far.
pub struct CatalogSession {
    products: Vec<Product>,
    defaults: FilterCriteria,
    criteria: FilterCriteria,
}

impl CatalogSession {
    /// Start an unconstrained session over `products`, with the price
    /// slider spanning `bounds`.
    pub fn new(products: Vec<Product>, bounds: PriceRange) -> Self {
        let defaults = FilterCriteria::unconstrained(bounds);
        Self {
            products,
            criteria: defaults.clone(),
            defaults,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Dropdown contents: distinct categories in supplier order.
    pub fn category_facets(&self) -> Vec<String> {
        categories(&self.products)
    }

    /// Dropdown contents: distinct sellers in supplier order.
    pub fn seller_facets(&self) -> Vec<String> {
        sellers(&self.products)
    }

    /// Apply one input event and recompute the view.
    pub fn apply(&mut self, update: CriteriaUpdate) -> CatalogView {
        match update {
            CriteriaUpdate::SearchChanged(text) => self.criteria.search = text,
            CriteriaUpdate::CategorySelected(selection) => self.criteria.category = selection,
            CriteriaUpdate::SellerSelected(selection) => self.criteria.seller = selection,
            CriteriaUpdate::PriceRangeChanged(range) => self.criteria.price = range,
            CriteriaUpdate::PriceTyped { min, max } => {
                if let Some(min) = Money::parse_input(&min) {
                    self.criteria.price.min = min;
                }
                if let Some(max) = Money::parse_input(&max) {
                    self.criteria.price.max = max;
                }
            }
            CriteriaUpdate::TagRemoved(kind) => self.criteria.clear(kind, &self.defaults),
            CriteriaUpdate::Reset => self.criteria.reset(&self.defaults),
        }
        self.view()
    }

    /// Recompute the visible subset and tags for the current criteria.
    pub fn view(&self) -> CatalogView {
        let products = filter_products(&self.products, &self.criteria);
        let active_tags = derive_active_tags(&self.criteria, &self.defaults);
        tracing::debug!(
            visible = products.len(),
            total = self.products.len(),
            tags = active_tags.len(),
            "catalog view recomputed"
        );
        CatalogView {
            products,
            active_tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmomart_catalog::sample;

    fn session() -> CatalogSession {
        CatalogSession::new(sample::catalog(), sample::PRICE_BOUNDS)
    }

    #[test]
    fn fresh_session_shows_everything_untagged() {
        let view = session().view();
        assert_eq!(view.products.len(), 8);
        assert!(view.active_tags.is_empty());
        assert!(!view.is_empty());
    }

    #[test]
    fn updates_apply_in_sequence() {
        let mut session = session();
        session.apply(CriteriaUpdate::SearchChanged("premium".to_string()));
        let view = session.apply(CriteriaUpdate::CategorySelected(Some("account".to_string())));

        assert_eq!(view.products.len(), 2);
        assert_eq!(
            view.active_tags,
            vec![
                FilterTag::Search("premium".to_string()),
                FilterTag::Category("account".to_string()),
            ]
        );
    }

    #[test]
    fn later_keystrokes_overwrite_earlier_ones() {
        let mut session = session();
        session.apply(CriteriaUpdate::SearchChanged("prem".to_string()));
        session.apply(CriteriaUpdate::SearchChanged("premium ga".to_string()));

        let view = session.view();
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].title, "Premium Gaming Account");
    }

    #[test]
    fn typed_prices_are_sanitized_before_use() {
        let mut session = session();
        let view = session.apply(CriteriaUpdate::PriceTyped {
            min: "abc".to_string(),
            max: "3 0 0".to_string(),
        });

        assert_eq!(session.criteria().price, PriceRange::new(Money::ZERO, Money::dong(300)));
        assert!(view.products.iter().all(|p| p.price <= Money::dong(300)));
    }

    #[test]
    fn empty_price_box_leaves_that_bound_unchanged() {
        let mut session = session();
        session.apply(CriteriaUpdate::PriceTyped {
            min: "100".to_string(),
            max: String::new(),
        });

        assert_eq!(
            session.criteria().price,
            PriceRange::new(Money::dong(100), sample::PRICE_BOUNDS.max)
        );
    }

    #[test]
    fn removing_a_tag_resets_only_its_field() {
        let mut session = session();
        session.apply(CriteriaUpdate::SearchChanged("premium".to_string()));
        session.apply(CriteriaUpdate::PriceRangeChanged(PriceRange::new(
            Money::ZERO,
            Money::dong(300),
        )));

        let view = session.apply(CriteriaUpdate::TagRemoved(FilterKind::Price));
        assert_eq!(view.active_tags, vec![FilterTag::Search("premium".to_string())]);
        assert_eq!(view.products.len(), 3);
    }

    #[test]
    fn no_results_state_offers_a_working_reset() {
        let mut session = session();
        let view = session.apply(CriteriaUpdate::SearchChanged("xyz".to_string()));
        assert!(view.is_empty());

        let view = session.apply(CriteriaUpdate::Reset);
        assert!(!view.is_empty());
        assert_eq!(view.products.len(), 8);
        assert!(view.active_tags.is_empty());
    }

    #[test]
    fn selecting_all_drops_the_constraint() {
        let mut session = session();
        session.apply(CriteriaUpdate::SellerSelected(Some("Game Master".to_string())));
        let view = session.apply(CriteriaUpdate::SellerSelected(None));

        assert_eq!(view.products.len(), 8);
        assert!(view.active_tags.is_empty());
    }

    #[test]
    fn facets_come_back_in_supplier_order() {
        let session = session();
        assert_eq!(session.category_facets(), vec!["software", "account"]);
        assert_eq!(session.seller_facets()[0], "SEO Master");
    }
}
