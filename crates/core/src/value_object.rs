//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two `Amount`s of
/// `120.0` are the same thing, whereas two orders with identical contents but
/// different ids are not.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Amount(f64);
///
/// impl ValueObject for Amount {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
