//! TableRow trait and row identity helpers.

use crate::value::Value;

/// Trait for records that can be displayed as rows in a [`DataTable`](crate::DataTable).
///
/// # Examples
///
/// ```
/// use datatable::{TableRow, Value};
///
/// #[derive(Clone, Debug)]
/// struct Person {
///     id: String,
///     name: String,
///     age: u32,
/// }
///
/// impl TableRow for Person {
///     fn id(&self) -> String {
///         self.id.clone()
///     }
///
///     fn value(&self, key: &str) -> Value {
///         match key {
///             "name" => Value::from(&self.name),
///             "age" => Value::from(self.age),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait TableRow: Send + Sync + Clone + 'static {
    /// Stable identity for this row.
    ///
    /// Selection is keyed by this string, never by reference, so rows may be
    /// recreated between renders without losing their selected state.
    /// Overridden per table by [`DataTable::with_row_key`](crate::DataTable::with_row_key).
    fn id(&self) -> String;

    /// Read the field for a column key. Unknown keys return [`Value::Null`].
    fn value(&self, key: &str) -> Value;
}

/// Extracts the identity string of a row.
pub type RowKey<T> = Box<dyn Fn(&T) -> String>;

/// Predicate deciding whether a row is visible.
pub type RowFilter<T> = Box<dyn Fn(&T) -> bool>;

/// Callback receiving the current selection, in row-collection order.
pub type SelectionObserver<T> = Box<dyn FnMut(&[T])>;

/// The default key extractor: [`TableRow::id`].
pub fn default_row_key<T: TableRow>() -> RowKey<T> {
    Box::new(T::id)
}
