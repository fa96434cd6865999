//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two items in a
//! shop with the same name, sell-in and quality are indistinguishable.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: value objects are copied freely (snapshots, test fixtures)
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects show up in logs and assertion failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Item {
///     name: String,
///     sell_in: i32,
///     quality: i32,
/// }
///
/// impl ValueObject for Item {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
