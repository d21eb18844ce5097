//! Money: amounts in Vietnamese đồng (integer, smallest unit).
//!
//! Catalog prices and wallet balances are whole đồng; there is no fractional
//! unit to carry, so a plain `u64` newtype is enough. Display formatting
//! groups thousands with `.` and suffixes `đ` (`1.500.000đ`), matching how
//! the storefront renders prices.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A non-negative amount of đồng.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn dong(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Line total for `quantity` units at this unit price.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn plus(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Parse free-form user input into an amount.
    ///
    /// Non-digit characters are stripped before parsing, so `"1.500.000 đ"`,
    /// `"1,500,000"` and `"1500000"` all read as the same amount. Empty input
    /// yields `None` (field untouched); input with no digits at all yields
    /// `Some(ZERO)` rather than an error, keeping parse failures out of the
    /// render path.
    pub fn parse_input(raw: &str) -> Option<Money> {
        if raw.trim().is_empty() {
            return None;
        }
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        Some(digits.parse().map(Money).unwrap_or(Money::ZERO))
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = self.0.to_string();
        let bytes = digits.as_bytes();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, b) in bytes.iter().enumerate() {
            if i > 0 && (bytes.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(*b as char);
        }
        write!(f, "{grouped}đ")
    }
}

/// Inclusive price interval `[min, max]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub const fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Both bounds inclusive.
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && price <= self.max
    }

    /// True when `self` admits no price outside `other`.
    pub fn is_within(&self, other: &PriceRange) -> bool {
        self.min >= other.min && self.max <= other.max
    }
}

impl ValueObject for PriceRange {}

impl core::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Money::dong(0).to_string(), "0đ");
        assert_eq!(Money::dong(999).to_string(), "999đ");
        assert_eq!(Money::dong(1_000).to_string(), "1.000đ");
        assert_eq!(Money::dong(299_000).to_string(), "299.000đ");
        assert_eq!(Money::dong(20_000_000).to_string(), "20.000.000đ");
    }

    #[test]
    fn parse_input_strips_non_digits() {
        assert_eq!(Money::parse_input("1.500.000 đ"), Some(Money::dong(1_500_000)));
        assert_eq!(Money::parse_input("50,000"), Some(Money::dong(50_000)));
        assert_eq!(Money::parse_input("299"), Some(Money::dong(299)));
    }

    #[test]
    fn parse_input_empty_leaves_field_untouched() {
        assert_eq!(Money::parse_input(""), None);
        assert_eq!(Money::parse_input("   "), None);
    }

    #[test]
    fn parse_input_junk_defaults_to_zero() {
        assert_eq!(Money::parse_input("abc"), Some(Money::ZERO));
        assert_eq!(Money::parse_input("đđđ"), Some(Money::ZERO));
    }

    #[test]
    fn times_computes_line_totals() {
        assert_eq!(Money::dong(49_990).times(2), Money::dong(99_980));
        assert_eq!(Money::dong(10).times(0), Money::ZERO);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = PriceRange::new(Money::dong(100), Money::dong(300));
        assert!(range.contains(Money::dong(100)));
        assert!(range.contains(Money::dong(300)));
        assert!(!range.contains(Money::dong(99)));
        assert!(!range.contains(Money::dong(301)));
    }

    #[test]
    fn range_displays_as_localized_pair() {
        let range = PriceRange::new(Money::ZERO, Money::dong(300_000));
        assert_eq!(range.to_string(), "0đ - 300.000đ");
    }

    #[test]
    fn narrower_range_is_within_wider() {
        let wide = PriceRange::new(Money::ZERO, Money::dong(1_000));
        let narrow = PriceRange::new(Money::dong(100), Money::dong(500));
        assert!(narrow.is_within(&wide));
        assert!(!wide.is_within(&narrow));
    }
}
