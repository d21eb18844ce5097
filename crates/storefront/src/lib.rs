//! Storefront session layer.
//!
//! Owns the UI-facing state (the current filter criteria) as a plain value
//! and drives the pure catalog engine on every input event. This is the
//! seam between user input and the domain crates; rendering stays outside.

pub mod session;

pub use session::{CatalogSession, CatalogView, CriteriaUpdate};
