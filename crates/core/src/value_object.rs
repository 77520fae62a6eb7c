//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: they are defined entirely by their
/// attribute values and are never mutated in place. Derived read models such as
/// dashboard metrics and reorder suggestions are value objects; recomputing them
/// from the same snapshot yields an equal value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct StockLevel(u64);
///
/// impl ValueObject for StockLevel {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
