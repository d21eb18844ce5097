//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: `Money`,
/// `PriceRange`, a filter tag. To "modify" one, build a new one. Entities
/// (a `Product`, a `TopUpRequest`) are the opposite - identified by their id
/// regardless of attribute values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
