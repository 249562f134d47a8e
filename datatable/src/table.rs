//! DataTable: sort, selection and view state for one table instance.

use std::sync::Arc;

use crate::column::Column;
use crate::error::TableError;
use crate::options::TableOptions;
use crate::row::RowFilter;
use crate::row::RowKey;
use crate::row::SelectionObserver;
use crate::row::TableRow;
use crate::row::default_row_key;
use crate::selection::Selection;
use crate::selection::SelectionChange;
use crate::sort::SortDirection;
use crate::sort::SortState;
use crate::sort::sort_indices;
use crate::view::TableView;
use crate::view::render;

/// A table component with client-side sorting and multi-row selection.
///
/// `DataTable<T>` owns the sort and selection state of one table and derives
/// a [`TableView`] from them on demand:
/// - Rows are shared read-only (`Arc<[T]>`) and never reordered in place
/// - At most one sortable column orders the view; ties keep input order
/// - Selection is keyed by row identity and survives re-sorting and filtering
/// - Replacing the row collection clears the selection
///
/// Every intent is a synchronous `&mut self` call. A dirty flag records that
/// the view needs recomputing, and an optional observer hears about every
/// selection change.
pub struct DataTable<T: TableRow> {
    /// The row collection, in caller order.
    rows: Arc<[T]>,
    /// Column definitions.
    columns: Vec<Column<T>>,
    /// Display options.
    options: TableOptions,
    /// Active sort column and direction.
    sort: SortState,
    /// Selection state (by row ID).
    selection: Selection,
    /// Row identity extractor.
    row_key: RowKey<T>,
    /// Optional visibility predicate, applied before sorting.
    filter: Option<RowFilter<T>>,
    /// Selection-changed callback.
    on_selection_change: Option<SelectionObserver<T>>,
    /// Dirty flag for re-render.
    dirty: bool,
}

impl<T: TableRow> DataTable<T> {
    /// Create an empty table with column definitions.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            rows: Arc::from(Vec::new()),
            columns,
            options: TableOptions::default(),
            sort: SortState::new(),
            selection: Selection::new(),
            row_key: default_row_key(),
            filter: None,
            on_selection_change: None,
            dirty: false,
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column<T>>, rows: impl Into<Arc<[T]>>) -> Self {
        let mut table = Self::new(columns);
        table.rows = rows.into();
        table
    }

    /// Set the display options.
    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Identify rows with `key` instead of [`TableRow::id`].
    pub fn with_row_key<F>(mut self, key: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.row_key = Box::new(key);
        self
    }

    /// Register the selection-changed observer.
    pub fn on_selection_change<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&[T]) + 'static,
    {
        self.on_selection_change = Some(Box::new(observer));
        self
    }

    /// Replace or remove the selection-changed observer.
    pub fn set_on_selection_change(&mut self, observer: Option<SelectionObserver<T>>) {
        self.on_selection_change = observer;
    }

    // -------------------------------------------------------------------------
    // Columns and options
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Find a column by key.
    pub fn column(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|column| column.key == key)
    }

    /// Set the column definitions.
    ///
    /// The active sort is dropped if its column is gone or no longer sortable.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        self.columns = columns;
        if let Some(key) = self.sort.key()
            && !self.column(key).is_some_and(|column| column.sortable)
        {
            log::debug!("Sort column '{}' removed, clearing sort", key);
            self.sort.clear();
        }
        self.dirty = true;
    }

    /// Get the display options.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Set the display options.
    ///
    /// Turning selection off clears the selection.
    pub fn set_options(&mut self, options: TableOptions) {
        let disable_selection = self.options.selectable && !options.selectable;
        self.options = options;
        if disable_selection {
            let removed = self.selection.clear();
            self.notify(SelectionChange {
                added: vec![],
                removed,
            });
        }
        self.dirty = true;
    }

    /// Toggle loading mode.
    pub fn set_loading(&mut self, loading: bool) {
        if self.options.loading != loading {
            self.options.loading = loading;
            self.dirty = true;
        }
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in collection order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Shared handle to the row collection.
    pub fn shared_rows(&self) -> Arc<[T]> {
        Arc::clone(&self.rows)
    }

    /// Identity of a row under this table's key extractor.
    pub fn row_id(&self, row: &T) -> String {
        (self.row_key)(row)
    }

    /// Find a row by ID.
    pub fn find_row(&self, id: &str) -> Option<(usize, &T)> {
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| self.row_id(row) == id)
    }

    /// Replace the row collection.
    ///
    /// Passing the collection already held (the same `Arc`) changes nothing.
    /// Any other collection is a new dataset and clears the selection, even
    /// if its row identities match the old ones.
    /// Returns true if the dataset changed.
    pub fn set_rows(&mut self, rows: impl Into<Arc<[T]>>) -> bool {
        let rows = rows.into();
        if Arc::ptr_eq(&self.rows, &rows) {
            return false;
        }

        log::debug!(
            "Dataset replaced ({} -> {} rows)",
            self.rows.len(),
            rows.len()
        );
        self.rows = rows;
        let removed = self.selection.clear();
        self.notify(SelectionChange {
            added: vec![],
            removed,
        });
        self.dirty = true;
        true
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Only show rows matching `filter`. Selection is left as is.
    pub fn set_filter<F>(&mut self, filter: F)
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.filter = Some(Box::new(filter));
        self.dirty = true;
    }

    /// Show all rows again.
    pub fn clear_filter(&mut self) {
        if self.filter.take().is_some() {
            self.dirty = true;
        }
    }

    /// Whether a filter is set.
    pub fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Header click on the column `key`.
    ///
    /// Unknown and non-sortable columns are ignored. The active column
    /// toggles direction; any other sortable column becomes active,
    /// ascending. Returns the new direction when the sort changed.
    pub fn request_sort(&mut self, key: &str) -> Option<SortDirection> {
        let Some(column) = self.columns.iter().find(|column| column.key == key) else {
            log::debug!("Sort requested for unknown column '{}'", key);
            return None;
        };

        let direction = self.sort.request(column);
        match direction {
            Some(direction) => {
                log::debug!("Sorting by '{}' {:?}", key, direction);
                self.dirty = true;
            }
            None => log::debug!("Ignoring sort on unsortable column '{}'", key),
        }
        direction
    }

    /// Set sort by column key and direction.
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) -> Result<(), TableError> {
        let column = self
            .column(key)
            .ok_or_else(|| TableError::unknown_column(key))?;
        if !column.sortable {
            return Err(TableError::not_sortable(key));
        }

        self.sort.set(key, direction);
        self.dirty = true;
        Ok(())
    }

    /// Clear sort state; rows return to collection order.
    pub fn clear_sort(&mut self) {
        if self.sort.is_active() {
            self.sort.clear();
            self.dirty = true;
        }
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// Positions of the visible rows, filtered and in display order.
    pub fn visible_indices(&self) -> Vec<usize> {
        let candidates: Vec<usize> = match &self.filter {
            Some(filter) => self
                .rows
                .iter()
                .enumerate()
                .filter(|(_, row)| filter(*row))
                .map(|(index, _)| index)
                .collect(),
            None => (0..self.rows.len()).collect(),
        };
        sort_indices(&self.rows, candidates, &self.sort)
    }

    /// Visible rows in display order.
    pub fn visible_rows(&self) -> Vec<&T> {
        self.visible_indices()
            .into_iter()
            .map(|index| &self.rows[index])
            .collect()
    }

    /// Identities of the visible rows in display order.
    pub fn visible_ids(&self) -> Vec<String> {
        self.ids_of(&self.visible_indices())
    }

    fn ids_of(&self, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&index| self.row_id(&self.rows[index]))
            .collect()
    }

    /// Build the render description from the current state.
    pub fn view(&self) -> TableView<'_, T> {
        let visible = self.visible_indices();
        let ids = self.ids_of(&visible);
        render(
            &self.rows,
            &visible,
            ids,
            &self.columns,
            &self.options,
            &self.sort,
            &self.selection,
        )
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get all selected IDs (sorted).
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.selected()
    }

    /// Check if a row is selected by ID.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Selected rows in collection order.
    pub fn selected_rows(&self) -> Vec<T> {
        self.selection
            .current_selection(&self.rows, |row| self.row_id(row))
            .into_iter()
            .cloned()
            .collect()
    }

    /// Whether every visible row is selected (false when none are visible).
    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.visible_ids())
    }

    /// Whether some, but not all, visible rows are selected.
    pub fn is_partially_selected(&self) -> bool {
        self.selection.is_partially_selected(&self.visible_ids())
    }

    /// Toggle selection of a row by ID.
    ///
    /// Ignored when the table is not selectable, and for IDs that are
    /// neither selected nor present in the current rows.
    /// Returns true if the selection changed.
    pub fn toggle_row(&mut self, id: &str) -> bool {
        if !self.options.selectable {
            log::debug!("Ignoring toggle of '{}': table not selectable", id);
            return false;
        }
        if !self.selection.is_selected(id) && self.find_row(id).is_none() {
            log::debug!("Ignoring toggle of unknown row '{}'", id);
            return false;
        }

        let change = self.selection.toggle(id);
        self.notify(change)
    }

    /// Header checkbox: select every visible row, or deselect them all if
    /// they are already selected. Returns true if the selection changed.
    pub fn toggle_all(&mut self) -> bool {
        if !self.options.selectable {
            return false;
        }

        let visible = self.visible_ids();
        let change = self.selection.toggle_all(&visible);
        self.notify(change)
    }

    /// Clear all selection. Returns true if anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        let removed = self.selection.clear();
        self.notify(SelectionChange {
            added: vec![],
            removed,
        })
    }

    /// Mark dirty and tell the observer about a non-empty change.
    fn notify(&mut self, change: SelectionChange) -> bool {
        if change.is_empty() {
            return false;
        }

        log::trace!(
            "Selection changed: +{:?} -{:?}",
            change.added,
            change.removed
        );
        self.dirty = true;

        if self.on_selection_change.is_some() {
            let selected = self.selected_rows();
            if let Some(observer) = self.on_selection_change.as_mut() {
                observer(selected.as_slice());
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl<T: TableRow> Default for DataTable<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: TableRow + std::fmt::Debug> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .field("filtered", &self.filter.is_some())
            .field("dirty", &self.dirty)
            .finish()
    }
}
