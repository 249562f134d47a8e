//! Render description handed to the presentation layer.
//!
//! A [`TableView`] is plain data: header labels with sort indicators, the
//! select-all checkbox state and exactly one body mode. Renderers (terminal,
//! GUI, web) draw from it and send intents back to the
//! [`DataTable`](crate::DataTable); nothing here draws.

use std::fmt;

use crate::column::Alignment;
use crate::column::Column;
use crate::options::TableOptions;
use crate::row::TableRow;
use crate::selection::Selection;
use crate::sort::SortDirection;
use crate::sort::SortState;
use crate::value::Value;

/// Content of one body cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Raw field value.
    Value(Value),
    /// Output of the column's custom renderer.
    Rendered(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Value(value) => write!(f, "{value}"),
            Cell::Rendered(text) => f.write_str(text),
        }
    }
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    /// Set on the active sort column only.
    pub sort: Option<SortDirection>,
    /// Whether clicking requests a sort.
    pub clickable: bool,
    pub width: Option<u16>,
    pub align: Alignment,
}

/// Header checkbox of a selectable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectAllState {
    /// Every visible row is selected (and at least one is visible).
    pub checked: bool,
    /// Some, but not all, visible rows are selected.
    pub indeterminate: bool,
    /// False while loading or when no rows are visible.
    pub enabled: bool,
}

/// One body row in display order.
#[derive(Debug, Clone)]
pub struct RowView<'a, T> {
    /// Row identity.
    pub id: String,
    /// Position in the row collection.
    pub index: usize,
    pub row: &'a T,
    pub selected: bool,
    /// One cell per column, in column order.
    pub cells: Vec<Cell>,
}

/// The body display mode. Modes are exclusive and chosen in declaration order.
#[derive(Debug, Clone)]
pub enum TableBody<'a, T> {
    /// Data is loading; draw `placeholder_rows` skeleton rows.
    Loading { placeholder_rows: usize },
    /// No visible rows; draw one row spanning all columns.
    Empty { message: &'a str },
    /// Visible rows in display order.
    Rows(Vec<RowView<'a, T>>),
}

/// Complete render description of a table.
#[derive(Debug, Clone)]
pub struct TableView<'a, T> {
    pub header: Vec<HeaderCell>,
    /// Present only when the table is selectable.
    pub select_all: Option<SelectAllState>,
    /// Columns a full-width row must span, including the selection column.
    pub column_span: usize,
    pub body: TableBody<'a, T>,
}

impl<'a, T> TableView<'a, T> {
    /// Whether the body is in loading mode.
    pub fn is_loading(&self) -> bool {
        matches!(self.body, TableBody::Loading { .. })
    }

    /// The empty-state message, if the body is in empty mode.
    pub fn empty_message(&self) -> Option<&'a str> {
        match self.body {
            TableBody::Empty { message } => Some(message),
            _ => None,
        }
    }

    /// Body rows; empty unless in normal mode.
    pub fn rows(&self) -> &[RowView<'a, T>] {
        match &self.body {
            TableBody::Rows(rows) => rows.as_slice(),
            _ => &[],
        }
    }

    /// Identities of the body rows, in display order.
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows().iter().map(|row| row.id.as_str()).collect()
    }

    /// Header cell for a column key.
    pub fn header_cell(&self, key: &str) -> Option<&HeaderCell> {
        self.header.iter().find(|cell| cell.key == key)
    }
}

/// Assemble the render description.
///
/// `visible` holds positions into `rows` in display order and `ids` the
/// matching identities.
pub fn render<'a, T: TableRow>(
    rows: &'a [T],
    visible: &[usize],
    ids: Vec<String>,
    columns: &[Column<T>],
    options: &'a TableOptions,
    sort: &SortState,
    selection: &Selection,
) -> TableView<'a, T> {
    let header = columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key.clone(),
            label: column.header.clone(),
            sort: if column.sortable {
                sort.direction_for(&column.key)
            } else {
                None
            },
            clickable: column.sortable,
            width: column.width,
            align: column.align,
        })
        .collect();

    let select_all = options.selectable.then(|| {
        if options.loading {
            SelectAllState::default()
        } else {
            SelectAllState {
                checked: selection.is_all_selected(&ids),
                indeterminate: selection.is_partially_selected(&ids),
                enabled: !ids.is_empty(),
            }
        }
    });

    let column_span = columns.len() + usize::from(options.selectable);

    let body = if options.loading {
        TableBody::Loading {
            placeholder_rows: options.placeholder_rows,
        }
    } else if visible.is_empty() {
        TableBody::Empty {
            message: &options.empty_message,
        }
    } else {
        TableBody::Rows(
            visible
                .iter()
                .zip(ids)
                .map(|(&index, id)| {
                    let row = &rows[index];
                    RowView {
                        selected: selection.is_selected(&id),
                        id,
                        index,
                        row,
                        cells: columns.iter().map(|column| column.cell(row)).collect(),
                    }
                })
                .collect(),
        )
    };

    TableView {
        header,
        select_all,
        column_span,
        body,
    }
}
