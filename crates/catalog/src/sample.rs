//! Mock catalog supplier.
//!
//! Stands in for the real product API during development and in tests; the
//! records and their order mirror the storefront's seed data.

use mmomart_core::{Money, PriceRange, ProductId};

use crate::product::{Product, Rating};

/// Full price bounds of the sample catalog (the slider's end stops).
pub const PRICE_BOUNDS: PriceRange = PriceRange::new(Money::ZERO, Money::dong(1_000));

/// The seed product list, in stable supplier order.
pub fn catalog() -> Vec<Product> {
    [
        ("1", "Premium SEO Software", 299, "software", "SEO Master", 45),
        ("2", "Social Media Management Tool", 149, "software", "Digital Marketing Pro", 42),
        ("3", "Email Marketing Platform", 99, "software", "Email Guru", 40),
        ("4", "Content Creation Suite", 199, "software", "Content Creator", 47),
        ("5", "Premium Gaming Account", 499, "account", "Game Master", 48),
        ("6", "Streaming Platform Account", 89, "account", "Stream Pro", 39),
        ("7", "Analytics Dashboard Tool", 349, "software", "Data Expert", 46),
        ("8", "Premium Stock Trading Account", 899, "account", "Finance Pro", 44),
    ]
    .into_iter()
    .map(|(id, title, price, category, seller, rating)| Product {
        id: id.parse::<ProductId>().expect("sample ids are non-empty"),
        title: title.to_string(),
        price: Money::dong(price),
        category: Some(category.to_string()),
        seller: Some(seller.to_string()),
        rating: Rating::from_tenths(rating),
        in_stock: true,
    })
    .collect()
}
