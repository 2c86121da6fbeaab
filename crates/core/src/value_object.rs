//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values (through its validating constructor).
///
/// ## Value vs handle
///
/// An [`Item`](crate::Item) is a value object: two items with the same name,
/// weight, price and kind compare equal. Collections, however, store
/// [`ItemRef`](crate::ItemRef) handles, and handles compare by identity. Use
/// the value comparison when you care about *what* an item is and the handle
/// comparison when you care about *which* item it is.
///
/// ```ignore
/// let a = Item::weapon("Excalibur", 5.0, 200.0, 10)?;
/// let b = Item::weapon("Excalibur", 5.0, 200.0, 10)?;
/// assert_eq!(a, b); // equal by value
/// assert_ne!(ItemRef::new(a), ItemRef::new(b)); // distinct handles
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Compare two value objects by value.
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}
