//! ORDER_BY: stable sort under a caller-supplied comparator.

use std::cmp::Ordering;

use relq_core::prelude::{Result, Row, Table};
use serde::{Deserialize, Serialize};

use crate::traits::{comparator, unary, Comparator, Operator};

/// Stable sort of the whole row sequence: rows the comparator reports as
/// Equal keep their original relative order. The comparator sees full rows.
///
/// The first comparator error aborts the sort and is returned.
pub fn order_by<C>(table: &Table, cmp: C) -> Result<Table>
where
    C: Fn(&Row, &Row) -> Result<Ordering>,
{
    let mut rows = table.rows().to_vec();
    let mut failure = None;

    // `sort_by` is stable.
    rows.sort_by(|a, b| {
        if failure.is_some() {
            return Ordering::Equal;
        }
        cmp(a, b).unwrap_or_else(|e| {
            failure = Some(e);
            Ordering::Equal
        })
    });

    if let Some(e) = failure {
        return Err(e);
    }
    Ok(table.derive(rows, table.schema().ok()))
}

/// One column of a column-based ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: String,
    #[serde(default)]
    pub desc: bool,
}

impl SortKey {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            desc: false,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            desc: true,
        }
    }
}

/// Lexicographic comparison over `keys` using `Value::total_cmp`
/// (Nulls first in ascending order).
pub fn compare_by_keys(keys: &[SortKey], a: &Row, b: &Row) -> Result<Ordering> {
    for key in keys {
        let ord = a.get(&key.column)?.total_cmp(b.get(&key.column)?);
        let ord = if key.desc { ord.reverse() } else { ord };
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }
    Ok(Ordering::Equal)
}

/// Comparator sorting by `keys`.
pub fn by_keys(keys: Vec<SortKey>) -> Comparator {
    comparator(move |a: &Row, b: &Row| compare_by_keys(&keys, a, b))
}

pub struct OrderBy {
    pub comparator: Comparator,
}

impl Operator for OrderBy {
    fn name(&self) -> &'static str {
        "order_by"
    }

    fn eval(&self, inputs: &[&Table]) -> Result<Table> {
        let input = unary(self.name(), inputs)?;
        order_by(input, self.comparator.as_ref())
    }
}
