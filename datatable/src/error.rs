//! Error types

/// Errors from the programmatic table API.
///
/// User intents (header clicks, checkbox toggles) never fail; these only
/// surface from calls such as [`DataTable::set_sort`](crate::DataTable::set_sort)
/// where the caller names a column directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// No column with this key is configured.
    #[error("Column '{key}' not found in table")]
    UnknownColumn { key: String },

    /// The column exists but is not sortable.
    #[error("Column '{key}' is not sortable")]
    NotSortable { key: String },
}

impl TableError {
    /// Creates a new unknown column error.
    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn { key: key.into() }
    }

    /// Creates a new not-sortable error.
    pub fn not_sortable(key: impl Into<String>) -> Self {
        Self::NotSortable { key: key.into() }
    }
}
