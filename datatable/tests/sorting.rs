//! Tests for sort requests and comparator ordering.

use datatable::prelude::*;

#[derive(Clone, Debug)]
struct Person {
    id: &'static str,
    name: &'static str,
    age: i64,
    joined: &'static str,
}

impl TableRow for Person {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "name" => Value::from(self.name),
            "age" => Value::from(self.age),
            "joined" => Value::from(self.joined),
            _ => Value::Null,
        }
    }
}

fn create_people() -> Vec<Person> {
    vec![
        Person { id: "1", name: "Aarav", age: 24, joined: "2024-09-12" },
        Person { id: "2", name: "Bhavna", age: 31, joined: "2023-03-05" },
        Person { id: "3", name: "chirag", age: 28, joined: "2025-01-18" },
        Person { id: "4", name: "Divya", age: 22, joined: "2022-06-20" },
    ]
}

fn create_columns() -> Vec<Column<Person>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email"),
        Column::new("age", "Age").sortable(),
        Column::new("joined", "Joined").sortable(),
    ]
}

fn ids(table: &DataTable<Person>) -> Vec<String> {
    table.visible_ids()
}

// ============================================================================
// Sort requests
// ============================================================================

#[test]
fn test_age_scenario() {
    let rows = vec![
        Person { id: "1", name: "", age: 31, joined: "" },
        Person { id: "2", name: "", age: 24, joined: "" },
        Person { id: "3", name: "", age: 28, joined: "" },
    ];
    let mut table = DataTable::with_rows(create_columns(), rows);

    assert_eq!(table.request_sort("age"), Some(SortDirection::Ascending));
    assert_eq!(ids(&table), vec!["2", "3", "1"]);

    assert_eq!(table.request_sort("age"), Some(SortDirection::Descending));
    assert_eq!(ids(&table), vec!["1", "3", "2"]);
}

#[test]
fn test_unsorted_keeps_collection_order() {
    let table = DataTable::with_rows(create_columns(), create_people());
    assert_eq!(ids(&table), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_unsortable_column_is_ignored() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    table.request_sort("age");
    table.clear_dirty();

    assert_eq!(table.request_sort("email"), None);
    assert_eq!(table.sort().key(), Some("age"));
    assert!(!table.is_dirty());
}

#[test]
fn test_unknown_column_is_ignored() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    assert_eq!(table.request_sort("salary"), None);
    assert!(!table.sort().is_active());
}

#[test]
fn test_new_column_replaces_active_and_starts_ascending() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    table.request_sort("age");
    table.request_sort("age");
    assert_eq!(table.request_sort("name"), Some(SortDirection::Ascending));

    let view = table.view();
    assert_eq!(view.header_cell("age").unwrap().sort, None);
    assert_eq!(
        view.header_cell("name").unwrap().sort,
        Some(SortDirection::Ascending)
    );
}

#[test]
fn test_same_column_twice_toggles_once() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    table.request_sort("age");
    let ascending = ids(&table);
    table.request_sort("age");
    let descending = ids(&table);

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn test_resorting_sorted_view_is_stable() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    table.set_sort("age", SortDirection::Ascending).unwrap();
    let first = ids(&table);
    table.set_sort("age", SortDirection::Ascending).unwrap();
    assert_eq!(ids(&table), first);
}

// ============================================================================
// Comparator rules
// ============================================================================

#[test]
fn test_text_sorts_case_insensitively() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    table.request_sort("name");
    assert_eq!(ids(&table), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_dates_sort_by_instant() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    table.request_sort("joined");
    assert_eq!(ids(&table), vec!["4", "2", "1", "3"]);
}

#[test]
fn test_numbers_sort_non_decreasing() {
    let rows: Vec<Person> = [5, -3, 40, 7, 7, 0, 12]
        .into_iter()
        .enumerate()
        .map(|(i, age)| Person {
            id: ["a", "b", "c", "d", "e", "f", "g"][i],
            name: "",
            age,
            joined: "",
        })
        .collect();
    let mut table = DataTable::with_rows(create_columns(), rows);

    table.request_sort("age");
    let ages: Vec<i64> = table.visible_rows().iter().map(|p| p.age).collect();
    assert!(ages.windows(2).all(|w| w[0] <= w[1]));

    table.request_sort("age");
    let ages: Vec<i64> = table.visible_rows().iter().map(|p| p.age).collect();
    assert!(ages.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_ties_keep_input_order_in_both_directions() {
    let rows = vec![
        Person { id: "a", name: "", age: 30, joined: "" },
        Person { id: "b", name: "", age: 20, joined: "" },
        Person { id: "c", name: "", age: 30, joined: "" },
        Person { id: "d", name: "", age: 20, joined: "" },
    ];
    let mut table = DataTable::with_rows(create_columns(), rows);

    table.request_sort("age");
    assert_eq!(ids(&table), vec!["b", "d", "a", "c"]);
    table.request_sort("age");
    assert_eq!(ids(&table), vec!["a", "c", "b", "d"]);
}

#[test]
fn test_sorting_does_not_reorder_rows() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    table.request_sort("age");
    let order: Vec<&str> = table.rows().iter().map(|p| p.id).collect();
    assert_eq!(order, vec!["1", "2", "3", "4"]);
}

// ============================================================================
// Programmatic sort
// ============================================================================

#[test]
fn test_set_sort_errors() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    assert_eq!(
        table.set_sort("salary", SortDirection::Ascending),
        Err(TableError::unknown_column("salary"))
    );
    assert_eq!(
        table.set_sort("email", SortDirection::Descending),
        Err(TableError::not_sortable("email"))
    );
    assert!(!table.sort().is_active());
}

#[test]
fn test_set_sort_error_display() {
    let error = TableError::not_sortable("email");
    assert_eq!(error.to_string(), "Column 'email' is not sortable");
}

#[test]
fn test_clear_sort_restores_order() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    table.set_sort("age", SortDirection::Descending).unwrap();
    table.clear_sort();
    assert_eq!(ids(&table), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_removing_sort_column_clears_sort() {
    let mut table = DataTable::with_rows(create_columns(), create_people());
    table.request_sort("age");
    table.set_columns(vec![Column::new("name", "Name").sortable()]);
    assert!(!table.sort().is_active());
}

// ============================================================================
// Mixed columns
// ============================================================================

#[derive(Clone, Debug)]
struct Entry {
    id: &'static str,
    value: Value,
}

impl TableRow for Entry {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "value" => self.value.clone(),
            _ => Value::Null,
        }
    }
}

fn entry_table(values: Vec<(&'static str, Value)>) -> DataTable<Entry> {
    let rows: Vec<Entry> = values
        .into_iter()
        .map(|(id, value)| Entry { id, value })
        .collect();
    DataTable::with_rows(vec![Column::new("value", "Value").sortable()], rows)
}

#[test]
fn test_numbers_with_text_placeholder_sort_numerically() {
    let mut table = entry_table(vec![
        ("ten", Value::Int(10)),
        ("na", Value::from("n/a")),
        ("nine", Value::Int(9)),
    ]);

    table.request_sort("value");
    assert_eq!(table.visible_ids(), vec!["nine", "ten", "na"]);

    table.request_sort("value");
    assert_eq!(table.visible_ids(), vec!["na", "ten", "nine"]);
}

#[test]
fn test_dates_with_text_placeholder_sort_by_instant() {
    let mut table = entry_table(vec![
        ("2023", Value::from("03/05/2023")),
        ("2022", Value::from("12/31/2022")),
        ("tbd", Value::from("TBD")),
    ]);

    table.request_sort("value");
    assert_eq!(table.visible_ids(), vec!["2022", "2023", "tbd"]);
}

#[test]
fn test_mixed_kinds_group_blank_number_date_text() {
    let mut table = entry_table(vec![
        ("text", Value::from("pending")),
        ("date", Value::from("2024-09-12")),
        ("blank", Value::Null),
        ("big", Value::Int(500)),
        ("small", Value::Float(1.5)),
    ]);

    table.request_sort("value");
    assert_eq!(
        table.visible_ids(),
        vec!["blank", "small", "big", "date", "text"]
    );
}
