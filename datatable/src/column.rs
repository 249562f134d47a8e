//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::row::TableRow;
use crate::view::Cell;

/// Horizontal alignment hint for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Custom cell renderer: turns a row into the text shown for a column.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Column configuration.
///
/// A column names the field it reads (`key`), its header label, and whether
/// clicking its header sorts the table. Width and alignment are passed
/// through untouched to the renderer.
///
/// # Examples
///
/// ```
/// use datatable::{Alignment, Column, TableRow, Value};
///
/// #[derive(Clone, Debug)]
/// struct Person {
///     id: String,
///     age: u32,
///     joined: String,
/// }
///
/// impl TableRow for Person {
///     fn id(&self) -> String {
///         self.id.clone()
///     }
///
///     fn value(&self, key: &str) -> Value {
///         match key {
///             "age" => Value::from(self.age),
///             "joined" => Value::from(&self.joined),
///             _ => Value::Null,
///         }
///     }
/// }
///
/// let columns: Vec<Column<Person>> = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("email", "Email"),
///     Column::new("age", "Age").sortable().width(16).align(Alignment::Right),
///     Column::new("joined", "Joined")
///         .sortable()
///         .render(|p: &Person| p.joined.replace('-', "/")),
/// ];
///
/// let person = Person { id: "1".into(), age: 24, joined: "2024-09-12".into() };
/// assert_eq!(columns[2].cell(&person).to_string(), "24");
/// assert_eq!(columns[3].cell(&person).to_string(), "2024/09/12");
/// assert!(!columns[1].sortable);
/// ```
pub struct Column<T> {
    /// Field identifier passed to [`TableRow::value`].
    pub key: String,
    /// Column header text.
    pub header: String,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Width hint in renderer units.
    pub width: Option<u16>,
    /// Horizontal alignment.
    pub align: Alignment,
    renderer: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a non-sortable column reading `key`.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            width: None,
            align: Alignment::Left,
            renderer: None,
        }
    }

    /// Make the column sortable.
    ///
    /// Sortable columns expose a clickable header and a sort indicator in
    /// the [`TableView`](crate::TableView).
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a width hint.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Render cells with a custom function instead of the raw field value.
    ///
    /// Sorting still uses the raw field value.
    pub fn render<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Whether a custom renderer is set.
    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }
}

impl<T: TableRow> Column<T> {
    /// Produce the cell for `row` in this column.
    pub fn cell(&self, row: &T) -> Cell {
        match &self.renderer {
            Some(render) => Cell::Rendered(render(row)),
            None => Cell::Value(row.value(&self.key)),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            width: self.width,
            align: self.align,
            renderer: self.renderer.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}
