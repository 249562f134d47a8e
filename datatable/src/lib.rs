//! Table state machine with client-side sorting and multi-row selection.
//!
//! [`DataTable`] holds the sort and selection state for one table and turns
//! rows plus [`Column`] descriptors into a [`TableView`]: header cells with
//! sort indicators, the select-all checkbox state and either loading
//! placeholders, an empty-state message or the rows in display order.
//! Drawing is left to the caller.
//!
//! # Example
//!
//! ```
//! use datatable::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! struct Person {
//!     id: String,
//!     age: u32,
//! }
//!
//! impl TableRow for Person {
//!     fn id(&self) -> String {
//!         self.id.clone()
//!     }
//!
//!     fn value(&self, key: &str) -> Value {
//!         match key {
//!             "age" => Value::from(self.age),
//!             _ => Value::Null,
//!         }
//!     }
//! }
//!
//! let people = vec![
//!     Person { id: "1".into(), age: 31 },
//!     Person { id: "2".into(), age: 24 },
//!     Person { id: "3".into(), age: 28 },
//! ];
//! let mut table = DataTable::with_rows(vec![Column::new("age", "Age").sortable()], people)
//!     .with_options(TableOptions::new().selectable(true));
//!
//! table.request_sort("age");
//! assert_eq!(table.view().row_ids(), vec!["2", "3", "1"]);
//!
//! table.toggle_row("3");
//! assert!(table.view().rows()[1].selected);
//! ```

pub mod column;
pub mod compare;
pub mod error;
pub mod options;
pub mod row;
pub mod selection;
pub mod sort;
pub mod table;
pub mod value;
pub mod view;

pub use column::{Alignment, CellRenderer, Column};
pub use error::TableError;
pub use options::TableOptions;
pub use row::TableRow;
pub use selection::{Selection, SelectionChange};
pub use sort::{SortDirection, SortState};
pub use table::DataTable;
pub use value::Value;
pub use view::{Cell, HeaderCell, RowView, SelectAllState, TableBody, TableView};

pub mod prelude {
    pub use crate::column::{Alignment, Column};
    pub use crate::error::TableError;
    pub use crate::options::TableOptions;
    pub use crate::row::TableRow;
    pub use crate::sort::SortDirection;
    pub use crate::table::DataTable;
    pub use crate::value::Value;
    pub use crate::view::{Cell, TableBody, TableView};
}
