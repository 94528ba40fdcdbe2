//! LIMIT and OFFSET.

use relq_core::prelude::{Error, Result, Table};

use crate::traits::{unary, Operator};

fn count_arg(op: &str, n: i64) -> Result<usize> {
    usize::try_from(n)
        .map_err(|_| Error::InvalidArgument(format!("{op} must not be negative, got {n}")))
}

/// The first `n` rows; all rows if `n` exceeds the length.
pub fn limit(table: &Table, n: i64) -> Result<Table> {
    let n = count_arg("LIMIT", n)?;
    let rows = table.iter().take(n).cloned().collect();
    Ok(table.derive(rows, table.schema().ok()))
}

/// Everything after the first `n` rows; empty if `n` exceeds the length.
pub fn offset(table: &Table, n: i64) -> Result<Table> {
    let n = count_arg("OFFSET", n)?;
    let rows = table.iter().skip(n).cloned().collect();
    Ok(table.derive(rows, table.schema().ok()))
}

#[derive(Debug, Clone, Copy)]
pub struct Limit(pub i64);

impl Operator for Limit {
    fn name(&self) -> &'static str {
        "limit"
    }

    fn eval(&self, inputs: &[&Table]) -> Result<Table> {
        limit(unary(self.name(), inputs)?, self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Offset(pub i64);

impl Operator for Offset {
    fn name(&self) -> &'static str {
        "offset"
    }

    fn eval(&self, inputs: &[&Table]) -> Result<Table> {
        offset(unary(self.name(), inputs)?, self.0)
    }
}
