//! Aggregation: COUNT, SUM, MAX, MIN, AVG, ungrouped or per group.
//!
//! Over an ungrouped table an aggregate produces a single row with one
//! synthesized column named `"<FN>(<column>)"`. Over the output of
//! [`group_by`] it produces one plain row per group: the key columns
//! followed by the synthesized column, which replaces the member rows.

pub mod functions;
pub mod group;

use relq_core::prelude::{Columns, Error, Result, Row, Schema, Table};
use serde::{Deserialize, Serialize};

use crate::traits::{unary, Operator};

pub use group::{group_by, GroupBy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateFn {
    Count,
    Sum,
    Max,
    Min,
    Avg,
}

impl AggregateFn {
    pub fn label(&self) -> &'static str {
        match self {
            AggregateFn::Count => "COUNT",
            AggregateFn::Sum => "SUM",
            AggregateFn::Max => "MAX",
            AggregateFn::Min => "MIN",
            AggregateFn::Avg => "AVG",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCall {
    #[serde(rename = "fn")]
    pub func: AggregateFn,
    pub column: String,
}

impl AggregateCall {
    pub fn new(func: AggregateFn, column: impl Into<String>) -> Self {
        Self {
            func,
            column: column.into(),
        }
    }

    /// Synthesized column name, e.g. `COUNT(name)`.
    pub fn output_name(&self) -> String {
        format!("{}({})", self.func.label(), self.column)
    }
}

/// Apply several aggregate calls over the same rows or groups in one pass.
/// Each call adds one column, in call order.
pub fn aggregate(table: &Table, calls: &[AggregateCall]) -> Result<Table> {
    let names: Vec<String> = calls.iter().map(AggregateCall::output_name).collect();

    if !table.is_grouped() {
        if table.iter().any(Row::is_grouped) {
            return Err(mixed_rows());
        }
        let mut cols = Columns::with_capacity(calls.len());
        for (call, name) in calls.iter().zip(&names) {
            cols.insert(name.clone(), functions::evaluate(call, table.rows())?);
        }
        return Ok(table.derive(vec![Row::Plain(cols)], Some(Schema::new(names))));
    }

    let mut rows = Vec::with_capacity(table.len());
    for row in table {
        let Row::Grouped { key, members } = row else {
            return Err(mixed_rows());
        };
        let mut cols = key.clone();
        for (call, name) in calls.iter().zip(&names) {
            cols.insert(name.clone(), functions::evaluate(call, members)?);
        }
        rows.push(Row::Plain(cols));
    }

    let schema = table.schema().ok().map(|mut s| {
        for name in &names {
            if !s.contains(name) {
                s.columns.push(name.clone());
            }
        }
        s
    });
    Ok(table.derive(rows, schema))
}

fn mixed_rows() -> Error {
    Error::InvalidArgument("aggregate input mixes grouped and plain rows".into())
}

fn single(table: &Table, func: AggregateFn, column: &str) -> Result<Table> {
    aggregate(table, &[AggregateCall::new(func, column)])
}

/// Number of rows (per group, or overall). Nulls are counted.
pub fn count(table: &Table, column: &str) -> Result<Table> {
    single(table, AggregateFn::Count, column)
}

pub fn sum(table: &Table, column: &str) -> Result<Table> {
    single(table, AggregateFn::Sum, column)
}

pub fn max(table: &Table, column: &str) -> Result<Table> {
    single(table, AggregateFn::Max, column)
}

pub fn min(table: &Table, column: &str) -> Result<Table> {
    single(table, AggregateFn::Min, column)
}

pub fn avg(table: &Table, column: &str) -> Result<Table> {
    single(table, AggregateFn::Avg, column)
}

#[derive(Debug, Default, Clone)]
pub struct Aggregate {
    pub calls: Vec<AggregateCall>,
}

impl Operator for Aggregate {
    fn name(&self) -> &'static str {
        "aggregate"
    }

    fn eval(&self, inputs: &[&Table]) -> Result<Table> {
        let input = unary(self.name(), inputs)?;
        aggregate(input, &self.calls)
    }
}
