//! UPDATE: copy of a table with `changes` merged into matching rows.
//!
//! The source table is never touched; the result is a new table.

use relq_core::prelude::{Columns, Result, Row, Schema, Table};

use crate::traits::{unary, Operator, Predicate};

/// Rows matching `pred` become a shallow merge of their columns with
/// `changes` (changes win); other rows pass through unchanged.
pub fn update<P>(table: &Table, changes: &Columns, pred: P) -> Result<Table>
where
    P: Fn(&Row) -> Result<bool>,
{
    let mut rows = Vec::with_capacity(table.len());
    for row in table {
        if pred(row)? {
            rows.push(row.merged(changes));
        } else {
            rows.push(row.clone());
        }
    }

    let schema = table.schema().ok().map(|s| extend_schema(s, changes));
    Ok(table.derive(rows, schema))
}

/// `update` with a match-all predicate.
pub fn update_all(table: &Table, changes: &Columns) -> Result<Table> {
    update(table, changes, |_: &Row| Ok(true))
}

fn extend_schema(mut schema: Schema, changes: &Columns) -> Schema {
    for col in changes.keys() {
        if !schema.contains(col) {
            schema.columns.push(col.clone());
        }
    }
    schema
}

pub struct Update {
    pub changes: Columns,
    /// `None` matches every row.
    pub predicate: Option<Predicate>,
}

impl Operator for Update {
    fn name(&self) -> &'static str {
        "update"
    }

    fn eval(&self, inputs: &[&Table]) -> Result<Table> {
        let input = unary(self.name(), inputs)?;
        match &self.predicate {
            Some(pred) => update(input, &self.changes, pred.as_ref()),
            None => update_all(input, &self.changes),
        }
    }
}
