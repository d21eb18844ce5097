//! Catalog domain module: products and the filter engine.
//!
//! This crate contains the marketplace's catalog browsing rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! presentation layer supplies a product list and the current criteria and
//! gets back the visible subset plus the active-filter tags.

pub mod filter;
pub mod product;
pub mod sample;
pub mod tags;

pub use filter::{filter_products, FilterCriteria};
pub use product::{categories, sellers, Product, Rating};
pub use tags::{derive_active_tags, FilterKind, FilterTag};
