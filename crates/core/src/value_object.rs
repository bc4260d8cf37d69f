//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are the same value. An inventory item
/// `{ name: "Sword", power: 10, broken: false }` is a value object - there
/// is no identity behind it, and duplicates of it are legitimate.
///
/// To "modify" a value object, build a new one with the new values. This
/// keeps transformations over sequences of value objects free of shared
/// mutable state.
///
/// The bounds are the minimum a value needs to be compared, copied around,
/// and shown in test failures:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Rune {
///     glyph: String,
///     charge: i64,
/// }
///
/// impl ValueObject for Rune {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
