//! Sort state and the sorted view of a row collection.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::column::Column;
use crate::compare::SortKey;
use crate::compare::compare_ranked;
use crate::row::TableRow;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply the direction to an ascending ordering.
    ///
    /// `Equal` stays `Equal`, so a stable sort keeps ties in input order in
    /// both directions.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Which column, if any, orders the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// No active sort; rows keep their original order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active sort key.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Current direction. Meaningless while no key is active.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Whether a column is active.
    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }

    /// Direction for `key` if it is the active column.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.key.as_deref() == Some(key)).then_some(self.direction)
    }

    /// Sort request from a header click.
    ///
    /// Non-sortable columns are ignored. A new column becomes active in
    /// ascending order; the active column flips direction.
    /// Returns the new direction when the state changed.
    pub fn request<T>(&mut self, column: &Column<T>) -> Option<SortDirection> {
        if !column.sortable {
            return None;
        }

        let direction = match self.direction_for(&column.key) {
            Some(current) => current.toggle(),
            None => SortDirection::Ascending,
        };
        self.set(column.key.clone(), direction);
        Some(direction)
    }

    /// Set the active key and direction.
    pub fn set(&mut self, key: impl Into<String>, direction: SortDirection) {
        self.key = Some(key.into());
        self.direction = direction;
    }

    /// Clear the active key.
    pub fn clear(&mut self) {
        self.key = None;
        self.direction = SortDirection::Ascending;
    }
}

/// Order `indices` (positions in `rows`) by `state`.
///
/// Returns `indices` unchanged when no key is active. The sort is stable.
pub fn sort_indices<T: TableRow>(rows: &[T], indices: Vec<usize>, state: &SortState) -> Vec<usize> {
    let Some(key) = state.key() else {
        return indices;
    };

    let keys: Vec<SortKey> = indices
        .iter()
        .map(|&index| SortKey::new(&rows[index].value(key)))
        .collect();
    let direction = state.direction();

    log::trace!(
        "Sorting {} rows by '{}' ({:?})",
        indices.len(),
        key,
        direction
    );

    let mut order: Vec<usize> = (0..indices.len()).collect();
    order.sort_by(|&a, &b| direction.apply(compare_ranked(&keys[a], &keys[b])));
    order.into_iter().map(|position| indices[position]).collect()
}

/// Sorted view over all of `rows`. The caller's slice is not reordered.
pub fn compute_view<'a, T: TableRow>(rows: &'a [T], state: &SortState) -> Vec<&'a T> {
    sort_indices(rows, (0..rows.len()).collect(), state)
        .into_iter()
        .map(|index| &rows[index])
        .collect()
}
