//! Left and right outer joins with Null-fill.

use relq_core::prelude::{Columns, Result, Row, Table};

use super::{combine, extend_qualified, joined_schema, null_columns};

/// Every matching combination of `a` and `b`; an `a` row with no match
/// appears exactly once, with all of `b`'s columns set to Null.
///
/// The Null-fill needs `b`'s column list. If `b` has no rows and no declared
/// schema and some `a` row goes unmatched, this fails with `MissingSchema`.
pub fn left_join<P>(a: &Table, b: &Table, pred: P) -> Result<Table>
where
    P: Fn(&Row) -> Result<bool>,
{
    let mut rows = Vec::new();
    let mut fill: Option<Columns> = None;

    for x in a {
        let mut matched = false;
        for y in b {
            let row = combine(a, x, b, y);
            if pred(&row)? {
                rows.push(row);
                matched = true;
            }
        }
        if !matched {
            // Resolved on the first unmatched row only.
            let nulls = match fill.take() {
                Some(cols) => cols,
                None => null_columns(b)?,
            };
            let mut cols = Columns::with_capacity(x.len() + nulls.len());
            extend_qualified(&mut cols, a.name(), x);
            cols.extend(nulls.iter().map(|(k, v)| (k.clone(), v.clone())));
            rows.push(Row::Plain(cols));
            fill = Some(nulls);
        }
    }

    Ok(Table::from_parts(None, rows, joined_schema(a, b)))
}

/// `left_join(b, a, pred)`: `b`'s columns come first and `b`'s rows are the
/// ones guaranteed to appear.
pub fn right_join<P>(a: &Table, b: &Table, pred: P) -> Result<Table>
where
    P: Fn(&Row) -> Result<bool>,
{
    left_join(b, a, pred)
}
