//! Cart domain module.
//!
//! In-memory shopping cart with derived totals. Purely deterministic domain
//! logic; checkout, persistence and payment live elsewhere (and outside this
//! repository).

pub mod cart;

pub use cart::{Cart, CartItem};
