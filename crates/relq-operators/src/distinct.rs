//! DISTINCT over a column subset.

use std::collections::HashSet;

use relq_core::prelude::{Columns, Result, Row, Schema, Table, Value};

use crate::traits::{unary, Operator};

/// One row per distinct `columns` tuple, in first-occurrence order, holding
/// exactly those columns with the first occurrence's values.
pub fn distinct<S: AsRef<str>>(table: &Table, columns: &[S]) -> Result<Table> {
    let mut seen: HashSet<Vec<Value>> = HashSet::new();
    let mut rows = Vec::new();

    for row in table {
        let key = columns
            .iter()
            .map(|c| row.get(c.as_ref()).cloned())
            .collect::<Result<Vec<_>>>()?;
        if seen.contains(&key) {
            continue;
        }
        let cols: Columns = columns
            .iter()
            .map(|c| c.as_ref().to_string())
            .zip(key.iter().cloned())
            .collect();
        rows.push(Row::Plain(cols));
        seen.insert(key);
    }

    let schema = Schema::new(columns.iter().map(|c| c.as_ref()));
    Ok(table.derive(rows, Some(schema)))
}

#[derive(Debug, Default, Clone)]
pub struct Distinct {
    pub columns: Vec<String>,
}

impl Operator for Distinct {
    fn name(&self) -> &'static str {
        "distinct"
    }

    fn eval(&self, inputs: &[&Table]) -> Result<Table> {
        let input = unary(self.name(), inputs)?;
        distinct(input, self.columns.as_slice())
    }
}
