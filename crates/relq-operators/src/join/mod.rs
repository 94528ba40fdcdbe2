//! Joins: cross, inner, left, and right.
//!
//! Column namespacing: every column of a named operand is emitted as
//! `"<table>.<column>"`; an unnamed operand (e.g. the output of an earlier
//! join) contributes its column names bare. Two source columns that land on
//! the same output name are not auto-resolved: the later value overwrites
//! the earlier one in place. [`find_collision`] detects this up front.
//!
//! All joins produce unnamed tables.

pub mod cross;
pub mod outer;

use relq_core::prelude::{Columns, Result, Row, Schema, Table, Value};
use relq_core::schema::qualify;
use serde::{Deserialize, Serialize};

use crate::traits::{binary, Operator, Predicate};

pub use cross::{cross_join, inner_join};
pub use outer::{left_join, right_join};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
    Cross,
    Inner,
    Left,
    Right,
}

/// Append `row`'s visible columns to `out`, namespaced by `table`.
pub(crate) fn extend_qualified(out: &mut Columns, table: Option<&str>, row: &Row) {
    for (col, val) in row.iter() {
        out.insert(qualify(table, col), val.clone());
    }
}

pub(crate) fn combine(a: &Table, x: &Row, b: &Table, y: &Row) -> Row {
    let mut cols = Columns::with_capacity(x.len() + y.len());
    extend_qualified(&mut cols, a.name(), x);
    extend_qualified(&mut cols, b.name(), y);
    Row::Plain(cols)
}

/// Null-filled, namespaced columns of `table`. Needs a derivable column list.
pub(crate) fn null_columns(table: &Table) -> Result<Columns> {
    Ok(table
        .schema()?
        .qualified(table.name())
        .columns
        .into_iter()
        .map(|c| (c, Value::Null))
        .collect())
}

/// Output column list of joining `a` with `b`, when both sides know theirs.
pub(crate) fn joined_schema(a: &Table, b: &Table) -> Option<Schema> {
    let left = a.schema().ok()?.qualified(a.name());
    let right = b.schema().ok()?.qualified(b.name());
    let mut out = left;
    for col in right.columns {
        if !out.contains(&col) {
            out.columns.push(col);
        }
    }
    Some(out)
}

/// First output column name both operands would produce, if any.
///
/// Only checks tables whose column lists are derivable.
pub fn find_collision(a: &Table, b: &Table) -> Option<String> {
    let left = a.schema().ok()?.qualified(a.name());
    let right = b.schema().ok()?.qualified(b.name());
    right.columns.into_iter().find(|c| left.contains(c))
}

/// Binary join operator. `predicate` is ignored for `JoinType::Cross` and
/// defaults to match-all for the others.
pub struct Join {
    pub join_type: JoinType,
    pub predicate: Option<Predicate>,
}

impl Join {
    pub fn cross() -> Self {
        Self {
            join_type: JoinType::Cross,
            predicate: None,
        }
    }

    pub fn new(join_type: JoinType, predicate: Predicate) -> Self {
        Self {
            join_type,
            predicate: Some(predicate),
        }
    }
}

impl Operator for Join {
    fn name(&self) -> &'static str {
        match self.join_type {
            JoinType::Cross => "cross_join",
            JoinType::Inner => "inner_join",
            JoinType::Left => "left_join",
            JoinType::Right => "right_join",
        }
    }

    fn arity(&self) -> usize {
        2
    }

    fn eval(&self, inputs: &[&Table]) -> Result<Table> {
        let (a, b) = binary(self.name(), inputs)?;
        let pred = |row: &Row| match &self.predicate {
            Some(p) => p(row),
            None => Ok(true),
        };
        match self.join_type {
            JoinType::Cross => Ok(cross_join(a, b)),
            JoinType::Inner => inner_join(a, b, pred),
            JoinType::Left => left_join(a, b, pred),
            JoinType::Right => right_join(a, b, pred),
        }
    }
}
