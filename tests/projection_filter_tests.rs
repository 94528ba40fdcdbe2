//! SELECT, WHERE, HAVING, and UPDATE over single tables.

mod test_data_gen;

use relq::ops::{self, Aliases, Condition, Operator, Select, Update};
use relq::{row, Columns, Error, Row, Table, Value};

use test_data_gen::{column, employees};

fn employee_table() -> Table {
    Table::new("employee", employees())
}

#[test]
fn test_select_keeps_columns_in_requested_order() {
    let t = employee_table();
    let out = ops::select(&t, &["salary", "name"], &Aliases::new()).unwrap();

    assert_eq!(out.len(), t.len());
    assert_eq!(out.column_names().unwrap(), vec!["salary", "name"]);
    assert_eq!(out.rows()[0], row! { "salary" => 100, "name" => "Alice" });
}

#[test]
fn test_select_applies_aliases() {
    let t = employee_table();
    let mut aliases = Aliases::new();
    aliases.insert("name".into(), "Name".into());

    let out = ops::select(&t, &["name", "id"], &aliases).unwrap();

    assert_eq!(out.column_names().unwrap(), vec!["Name", "id"]);
    assert_eq!(
        column(&out, "Name"),
        vec![
            Value::from("Alice"),
            Value::from("Bob"),
            Value::from("Charles"),
            Value::from("Dave"),
        ]
    );
    assert!(!out.rows()[0].contains("name"));
}

#[test]
fn test_select_with_empty_column_list_keeps_row_count() {
    let t = employee_table();
    let none: [&str; 0] = [];
    let out = ops::select(&t, &none, &Aliases::new()).unwrap();

    assert_eq!(out.len(), 4);
    assert!(out.iter().all(Row::is_empty));
}

#[test]
fn test_select_missing_column_fails() {
    let t = employee_table();
    assert_eq!(
        ops::select(&t, &["name", "age"], &Aliases::new()).unwrap_err(),
        Error::MissingColumn("age".into())
    );
}

#[test]
fn test_select_operator_matches_free_function() {
    let t = employee_table();
    let op = Select::new(["name"]).alias("name", "who");
    let out = op.eval(&[&t]).unwrap();
    assert_eq!(op.name(), "select");
    assert_eq!(out.column_names().unwrap(), vec!["who"]);
}

#[test]
fn test_where_preserves_order_and_subset() {
    let t = employee_table();
    let out = ops::filter(&t, |r: &Row| Ok(r.get("salary")? > &Value::Integer(150))).unwrap();

    assert_eq!(column(&out, "id"), vec![Value::Integer(3), Value::Integer(4)]);
    assert!(out.iter().all(|r| t.rows().contains(r)));
}

#[test]
fn test_where_keeps_name_and_schema() {
    let t = employee_table();
    let out = ops::filter(&t, |_: &Row| Ok(false)).unwrap();

    assert!(out.is_empty());
    assert_eq!(out.name(), Some("employee"));
    assert_eq!(
        out.column_names().unwrap(),
        vec!["id", "name", "department_id", "salary"]
    );
}

#[test]
fn test_where_predicate_error_aborts() {
    let t = employee_table();
    let err = ops::filter(&t, |r: &Row| Ok(r.get("bogus")?.is_null())).unwrap_err();
    assert_eq!(err, Error::MissingColumn("bogus".into()));
}

#[test]
fn test_where_with_text_condition() {
    let t = employee_table();
    let cond: Condition = "department_id == 2".parse().unwrap();
    let out = ops::filter(&t, cond.into_predicate().as_ref()).unwrap();
    assert_eq!(column(&out, "name"), vec![Value::from("Bob"), Value::from("Charles")]);
}

#[test]
fn test_having_matches_where() {
    let t = employee_table();
    let pred = |r: &Row| -> relq::Result<bool> { Ok(r.get("id")? != &Value::Integer(2)) };
    assert_eq!(ops::having(&t, pred).unwrap(), ops::filter(&t, pred).unwrap());
}

#[test]
fn test_update_merges_into_matching_rows_only() {
    let t = employee_table();
    let mut changes = Columns::new();
    changes.insert("salary".into(), Value::Integer(999));
    changes.insert("bonus".into(), Value::Boolean(true));

    let out = ops::update(&t, &changes, |r: &Row| Ok(r.get("name")? == &Value::from("Bob"))).unwrap();

    assert_eq!(out.len(), t.len());
    assert_eq!(
        out.rows()[1],
        row! { "id" => 2, "name" => "Bob", "department_id" => 2, "salary" => 999, "bonus" => true }
    );
    assert_eq!(out.rows()[0], t.rows()[0]);
    assert!(!out.rows()[2].contains("bonus"));
}

#[test]
fn test_update_does_not_touch_source_table() {
    let t = employee_table();
    let before = t.fingerprint().unwrap();
    let mut changes = Columns::new();
    changes.insert("salary".into(), Value::Integer(0));

    let out = ops::update_all(&t, &changes).unwrap();

    assert_eq!(t.fingerprint().unwrap(), before);
    assert_eq!(t.rows()[0].get("salary").unwrap(), &Value::Integer(100));
    assert!(out.iter().all(|r| r.get("salary").unwrap() == &Value::Integer(0)));
}

#[test]
fn test_update_does_not_touch_catalog() {
    let db = test_data_gen::company_db();
    let employees = db.table("employee").unwrap();
    let mut changes = Columns::new();
    changes.insert("name".into(), Value::from("Zed"));

    let _ = ops::update_all(employees, &changes).unwrap();

    assert_eq!(
        db.table("employee").unwrap().rows()[0].get("name").unwrap(),
        &Value::from("Alice")
    );
}

#[test]
fn test_update_operator_without_predicate_matches_update_all() {
    let t = employee_table();
    let mut changes = Columns::new();
    changes.insert("salary".into(), Value::Integer(1));

    let op = Update {
        changes: changes.clone(),
        predicate: None,
    };

    assert_eq!(op.name(), "update");
    assert_eq!(op.eval(&[&t]).unwrap(), ops::update_all(&t, &changes).unwrap());
}

#[test]
fn test_update_operator_with_predicate() {
    let t = employee_table();
    let mut changes = Columns::new();
    changes.insert("name".into(), Value::from("Zed"));

    let everyone = Update {
        changes: changes.clone(),
        predicate: Some(ops::match_all()),
    };
    let only_dave = Update {
        changes,
        predicate: Some(ops::predicate(|r: &Row| Ok(r.get("id")? == &Value::Integer(4)))),
    };

    assert!(everyone
        .eval(&[&t])
        .unwrap()
        .iter()
        .all(|r| r.get("name").unwrap() == &Value::from("Zed")));
    assert_eq!(
        column(&only_dave.eval(&[&t]).unwrap(), "name"),
        vec![
            Value::from("Alice"),
            Value::from("Bob"),
            Value::from("Charles"),
            Value::from("Zed"),
        ]
    );
}

#[test]
fn test_match_all_keeps_every_row() {
    let t = employee_table();
    let out = ops::filter(&t, ops::match_all().as_ref()).unwrap();
    assert_eq!(out.rows(), t.rows());
}
