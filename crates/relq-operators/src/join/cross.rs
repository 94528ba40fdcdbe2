//! Cartesian product and its filtered form.

use relq_core::prelude::{Result, Row, Table};

use super::{combine, joined_schema};

/// Every row of `a` paired with every row of `b`, row-major over `a`.
///
/// Output size is `|a| * |b|`; there is no guard against large products.
pub fn cross_join(a: &Table, b: &Table) -> Table {
    let mut rows = Vec::with_capacity(a.len().saturating_mul(b.len()));
    for x in a {
        for y in b {
            rows.push(combine(a, x, b, y));
        }
    }
    Table::from_parts(None, rows, joined_schema(a, b))
}

/// The cross join filtered by `pred`, in cross-join order.
///
/// Pairs are tested as they are produced, so non-matching combinations are
/// never materialized.
pub fn inner_join<P>(a: &Table, b: &Table, pred: P) -> Result<Table>
where
    P: Fn(&Row) -> Result<bool>,
{
    let mut rows = Vec::new();
    for x in a {
        for y in b {
            let row = combine(a, x, b, y);
            if pred(&row)? {
                rows.push(row);
            }
        }
    }
    Ok(Table::from_parts(None, rows, joined_schema(a, b)))
}
