//! WHERE and HAVING: keep rows matching a predicate, in order.

use relq_core::prelude::{Result, Row, Table};

use crate::traits::{unary, Operator, Predicate};

/// Keep the rows for which `pred` returns true, preserving relative order.
/// The first predicate error aborts the whole call.
pub fn filter<P>(table: &Table, pred: P) -> Result<Table>
where
    P: Fn(&Row) -> Result<bool>,
{
    let mut rows = Vec::new();
    for row in table {
        if pred(row)? {
            rows.push(row.clone());
        }
    }
    Ok(table.derive(rows, table.schema().ok()))
}

/// HAVING has the same semantics as WHERE; it is conventionally applied to
/// the output of GROUP_BY (and any aggregates).
pub fn having<P>(table: &Table, pred: P) -> Result<Table>
where
    P: Fn(&Row) -> Result<bool>,
{
    filter(table, pred)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Where,
    Having,
}

pub struct Filter {
    pub clause: Clause,
    pub predicate: Predicate,
}

impl Filter {
    pub fn where_(predicate: Predicate) -> Self {
        Self {
            clause: Clause::Where,
            predicate,
        }
    }

    pub fn having(predicate: Predicate) -> Self {
        Self {
            clause: Clause::Having,
            predicate,
        }
    }
}

impl Operator for Filter {
    fn name(&self) -> &'static str {
        match self.clause {
            Clause::Where => "where",
            Clause::Having => "having",
        }
    }

    fn eval(&self, inputs: &[&Table]) -> Result<Table> {
        let input = unary(self.name(), inputs)?;
        filter(input, self.predicate.as_ref())
    }
}
