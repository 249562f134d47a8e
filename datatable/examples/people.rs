use std::fs::File;

use datatable::prelude::*;
use datatable::view::RowView;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Clone, Debug)]
struct Person {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    age: u32,
    joined: &'static str,
}

impl TableRow for Person {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "name" => Value::from(self.name),
            "email" => Value::from(self.email),
            "age" => Value::from(self.age),
            "joined" => Value::from(self.joined),
            _ => Value::Null,
        }
    }
}

fn people() -> Vec<Person> {
    vec![
        Person { id: "1", name: "Aarav", email: "aarav@example.com", age: 24, joined: "2024-09-12" },
        Person { id: "2", name: "Bhavna", email: "bhavna@example.com", age: 31, joined: "2023-03-05" },
        Person { id: "3", name: "Chirag", email: "chirag@example.com", age: 28, joined: "2025-01-18" },
        Person { id: "4", name: "Divya", email: "divya@example.com", age: 22, joined: "2022-06-20" },
    ]
}

fn columns() -> Vec<Column<Person>> {
    vec![
        Column::new("name", "Name").sortable().width(10),
        Column::new("email", "Email").width(20),
        Column::new("age", "Age").sortable().width(5).align(Alignment::Right),
        Column::new("joined", "Joined").sortable().width(12),
    ]
}

fn pad(text: &str, width: usize, align: Alignment) -> String {
    match align {
        Alignment::Left => format!("{text:<width$}"),
        Alignment::Center => format!("{text:^width$}"),
        Alignment::Right => format!("{text:>width$}"),
    }
}

fn indicator(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

fn checkbox(checked: bool, indeterminate: bool) -> &'static str {
    match (checked, indeterminate) {
        (true, _) => "[x]",
        (false, true) => "[-]",
        (false, false) => "[ ]",
    }
}

/// Draw a view as plain text.
fn print_view(title: &str, view: &TableView<'_, Person>) {
    println!("== {title} ==");

    let widths: Vec<usize> = view
        .header
        .iter()
        .map(|cell| cell.width.map_or(12, usize::from))
        .collect();

    let mut line = String::new();
    if let Some(state) = view.select_all {
        line.push_str(checkbox(state.checked, state.indeterminate));
        line.push(' ');
    }
    for (cell, width) in view.header.iter().zip(&widths) {
        let label = match cell.sort {
            Some(direction) => format!("{} {}", cell.label, indicator(direction)),
            None => cell.label.clone(),
        };
        line.push_str(&pad(&label, *width, cell.align));
        line.push(' ');
    }
    println!("{}", line.trim_end());

    let total: usize = widths.iter().sum::<usize>() + widths.len();
    match &view.body {
        TableBody::Loading { placeholder_rows } => {
            for _ in 0..*placeholder_rows {
                println!("{}", "░".repeat(total));
            }
        }
        TableBody::Empty { message } => println!("{}", pad(message, total, Alignment::Center)),
        TableBody::Rows(rows) => {
            for row in rows {
                println!("{}", format_row(view, row, &widths));
            }
        }
    }
    println!();
}

fn format_row(view: &TableView<'_, Person>, row: &RowView<'_, Person>, widths: &[usize]) -> String {
    let mut line = String::new();
    if view.select_all.is_some() {
        line.push_str(checkbox(row.selected, false));
        line.push(' ');
    }
    for ((cell, header), width) in row.cells.iter().zip(&view.header).zip(widths) {
        line.push_str(&pad(&cell.to_string(), *width, header.align));
        line.push(' ');
    }
    line.trim_end().to_string()
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("people.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // Default: sort by age, then flip it
    let mut table = DataTable::with_rows(columns(), people());
    print_view("Default", &table.view());
    table.request_sort("age");
    print_view("Sorted by age", &table.view());
    table.request_sort("age");
    print_view("Sorted by age, descending", &table.view());

    // Selectable
    let mut table = DataTable::with_rows(columns(), people())
        .with_options(TableOptions::new().selectable(true))
        .on_selection_change(|rows: &[Person]| {
            let names: Vec<&str> = rows.iter().map(|row| row.name).collect();
            println!("selected: {names:?}");
        });
    table.toggle_row("2");
    table.toggle_row("3");
    table.request_sort("joined");
    print_view("Selectable", &table.view());
    table.toggle_all();
    print_view("Select all", &table.view());

    // Loading
    let table = DataTable::with_rows(columns(), Vec::<Person>::new())
        .with_options(TableOptions::new().loading(true));
    print_view("Loading", &table.view());

    // Empty
    let table = DataTable::with_rows(columns(), Vec::<Person>::new())
        .with_options(TableOptions::new().empty_message("No people found"));
    print_view("Empty", &table.view());

    Ok(())
}
