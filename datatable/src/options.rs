//! Table display options.

use serde::Deserialize;
use serde::Serialize;

/// Message shown when no rows are visible, unless configured otherwise.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Number of skeleton rows shown while loading, unless configured otherwise.
pub const DEFAULT_PLACEHOLDER_ROWS: usize = 5;

/// Display options for a [`DataTable`](crate::DataTable).
///
/// Build with the chained setters, or deserialize from host configuration;
/// missing fields take their defaults.
///
/// ```
/// use datatable::TableOptions;
///
/// let options = TableOptions::new()
///     .selectable(true)
///     .empty_message("Nothing to show");
/// assert!(!options.loading);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Show placeholder rows instead of data.
    pub loading: bool,
    /// Show selection checkboxes and accept selection intents.
    pub selectable: bool,
    /// Text of the single row shown when nothing is visible.
    pub empty_message: String,
    /// Skeleton rows rendered in loading mode.
    pub placeholder_rows: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            loading: false,
            selectable: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            placeholder_rows: DEFAULT_PLACEHOLDER_ROWS,
        }
    }
}

impl TableOptions {
    /// Default options: not loading, not selectable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set loading mode.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Enable or disable row selection.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Set the empty-state message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Set the number of loading placeholder rows.
    pub fn placeholder_rows(mut self, rows: usize) -> Self {
        self.placeholder_rows = rows;
        self
    }
}
