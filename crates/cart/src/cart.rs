use serde::{Deserialize, Serialize};

use mmomart_core::{DomainError, DomainResult, Money, ProductId};

/// One cart line: a product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// The user's shopping cart.
///
/// Lines are kept in insertion order and keyed by product id; adding a
/// product already present merges quantities instead of duplicating the line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a line, merging with an existing line for the same product.
    pub fn add(&mut self, item: CartItem) -> DomainResult<()> {
        if item.quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if let Some(existing) = self.line_mut(&item.product_id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }
        Ok(())
    }

    /// Drop a line entirely.
    pub fn remove(&mut self, product_id: &ProductId) -> DomainResult<()> {
        let before = self.items.len();
        self.items.retain(|item| &item.product_id != product_id);
        if self.items.len() == before {
            return Err(DomainError::not_found());
        }
        Ok(())
    }

    /// Set an existing line's quantity. Zero is rejected; removing a product
    /// is an explicit `remove`, not a quantity edit.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        match self.line_mut(product_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(DomainError::not_found()),
        }
    }

    /// Total number of units across all lines (the badge on the cart icon).
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::ZERO, |sum, item| sum.plus(item.line_total()))
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| &i.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, price: u64, quantity: u32) -> CartItem {
        CartItem {
            product_id: id.parse().unwrap(),
            title: title.to_string(),
            unit_price: Money::dong(price),
            quantity,
        }
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), Money::ZERO);
    }

    #[test]
    fn totals_follow_quantities() {
        let mut cart = Cart::new();
        cart.add(item("1", "Premium WoW Account", 299_990, 1)).unwrap();
        cart.add(item("2", "Gold Farming Bot", 49_990, 2)).unwrap();

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal(), Money::dong(399_970));
    }

    #[test]
    fn adding_same_product_merges_lines() {
        let mut cart = Cart::new();
        cart.add(item("1", "Premium WoW Account", 299_990, 1)).unwrap();
        cart.add(item("1", "Premium WoW Account", 299_990, 2)).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn add_rejects_zero_quantity() {
        let mut cart = Cart::new();
        let err = cart.add(item("1", "Premium WoW Account", 299_990, 0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_drops_exactly_one_line() {
        let mut cart = Cart::new();
        cart.add(item("1", "Premium WoW Account", 299_990, 1)).unwrap();
        cart.add(item("2", "Gold Farming Bot", 49_990, 2)).unwrap();

        cart.remove(&"1".parse().unwrap()).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].title, "Gold Farming Bot");
    }

    #[test]
    fn remove_unknown_product_is_not_found() {
        let mut cart = Cart::new();
        let err = cart.remove(&"9".parse().unwrap()).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn set_quantity_updates_totals() {
        let mut cart = Cart::new();
        cart.add(item("2", "Gold Farming Bot", 49_990, 2)).unwrap();

        cart.set_quantity(&"2".parse().unwrap(), 5).unwrap();
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.subtotal(), Money::dong(249_950));
    }

    #[test]
    fn set_quantity_rejects_zero() {
        let mut cart = Cart::new();
        cart.add(item("2", "Gold Farming Bot", 49_990, 2)).unwrap();

        let err = cart.set_quantity(&"2".parse().unwrap(), 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(cart.items()[0].quantity, 2);
    }
}
