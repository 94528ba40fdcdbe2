//! SELECT: keep the listed columns in order, optionally renamed.

use std::collections::HashMap;

use relq_core::prelude::{Columns, Result, Row, Schema, Table};

use crate::traits::{unary, Operator};

/// Column rename map: source column -> output name.
pub type Aliases = HashMap<String, String>;

/// Emit one row per input row holding exactly `columns`, in the given order,
/// each renamed through `aliases` when present.
///
/// Fails with `MissingColumn` if any row lacks a requested column. An empty
/// column list keeps the row count and empties every row.
pub fn select<S: AsRef<str>>(table: &Table, columns: &[S], aliases: &Aliases) -> Result<Table> {
    let out_names: Vec<String> = columns
        .iter()
        .map(|c| output_name(c.as_ref(), aliases))
        .collect();

    let mut rows = Vec::with_capacity(table.len());
    for row in table {
        let mut cols = Columns::with_capacity(columns.len());
        for (col, out) in columns.iter().zip(&out_names) {
            cols.insert(out.clone(), row.get(col.as_ref())?.clone());
        }
        rows.push(Row::Plain(cols));
    }

    Ok(table.derive(rows, Some(Schema::new(out_names))))
}

fn output_name(column: &str, aliases: &Aliases) -> String {
    aliases
        .get(column)
        .cloned()
        .unwrap_or_else(|| column.to_string())
}

#[derive(Debug, Default, Clone)]
pub struct Select {
    pub columns: Vec<String>,
    pub aliases: Aliases,
}

impl Select {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            aliases: Aliases::new(),
        }
    }

    pub fn alias(mut self, column: impl Into<String>, name: impl Into<String>) -> Self {
        self.aliases.insert(column.into(), name.into());
        self
    }
}

impl Operator for Select {
    fn name(&self) -> &'static str {
        "select"
    }

    fn eval(&self, inputs: &[&Table]) -> Result<Table> {
        let input = unary(self.name(), inputs)?;
        select(input, self.columns.as_slice(), &self.aliases)
    }
}
