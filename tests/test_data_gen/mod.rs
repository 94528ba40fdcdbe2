//! Shared fixtures for integration tests.
#![allow(dead_code)]

use relq::{row, Database, Row, Table};

pub fn employees() -> Vec<Row> {
    vec![
        row! { "id" => 1, "name" => "Alice", "department_id" => 100, "salary" => 100 },
        row! { "id" => 2, "name" => "Bob", "department_id" => 2, "salary" => 150 },
        row! { "id" => 3, "name" => "Charles", "department_id" => 2, "salary" => 200 },
        row! { "id" => 4, "name" => "Dave", "department_id" => 1, "salary" => 180 },
    ]
}

pub fn departments() -> Vec<Row> {
    vec![
        row! { "id" => 1, "title" => "Accounting" },
        row! { "id" => 2, "title" => "Engineering" },
    ]
}

pub fn friends() -> Vec<Row> {
    vec![
        row! { "name" => "Dave", "state" => "Colorado" },
        row! { "name" => "Bob", "state" => "Texas" },
        row! { "name" => "Charles", "state" => "Colorado" },
        row! { "name" => "Alice", "state" => "Colorado" },
        row! { "name" => "Erin", "state" => "Utah" },
    ]
}

/// Catalog holding `employee`, `department`, and `friend`.
pub fn company_db() -> Database {
    let mut db = Database::new();
    db.create_table("employee").expect("create employee");
    db.insert_into("employee", employees()).expect("insert employee");
    db.create_table("department").expect("create department");
    db.insert_into("department", departments()).expect("insert department");
    db.create_table("friend").expect("create friend");
    db.insert_into("friend", friends()).expect("insert friend");
    db
}

/// Single-column table `name` with values `a = 1..=n`.
pub fn numbers(name: &str, n: i64) -> Table {
    Table::new(name, (1..=n).map(|i| row! { "a" => i }))
}

/// Values of `column` across all rows, in order.
pub fn column(table: &Table, column: &str) -> Vec<relq::Value> {
    table
        .iter()
        .map(|r| r.get(column).expect("column present").clone())
        .collect()
}
