//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: tasting notes, a suggested price line or a
/// margin percentage are defined entirely by their attribute values. To
/// "modify" one, build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct SuggestedPrice { label: String, price: f64 }
///
/// impl ValueObject for SuggestedPrice {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
