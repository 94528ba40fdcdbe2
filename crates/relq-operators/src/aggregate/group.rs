//! GROUP_BY: partition rows by a composite key.

use indexmap::IndexMap;
use relq_core::prelude::{Columns, Result, Row, Schema, Table, Value};

use crate::traits::{unary, Operator};

/// One grouped row per distinct key tuple over `columns`, in first-seen
/// order. Each grouped row carries the key columns plus the member rows of
/// its group, in their original order.
pub fn group_by<S: AsRef<str>>(table: &Table, columns: &[S]) -> Result<Table> {
    let mut groups: IndexMap<Vec<Value>, Vec<Row>> = IndexMap::new();
    for row in table {
        let key = columns
            .iter()
            .map(|c| row.get(c.as_ref()).cloned())
            .collect::<Result<Vec<_>>>()?;
        groups.entry(key).or_default().push(row.clone());
    }

    let rows = groups
        .into_iter()
        .map(|(key, members)| {
            let key: Columns = columns
                .iter()
                .map(|c| c.as_ref().to_string())
                .zip(key)
                .collect();
            Row::grouped(key, members)
        })
        .collect();

    let schema = Schema::new(columns.iter().map(|c| c.as_ref()));
    Ok(table.derive(rows, Some(schema)))
}

#[derive(Debug, Default, Clone)]
pub struct GroupBy {
    pub columns: Vec<String>,
}

impl Operator for GroupBy {
    fn name(&self) -> &'static str {
        "group_by"
    }

    fn eval(&self, inputs: &[&Table]) -> Result<Table> {
        let input = unary(self.name(), inputs)?;
        group_by(input, self.columns.as_slice())
    }
}
