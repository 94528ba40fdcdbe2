//! YAML → `Query` parser.
//!
//! Example:
//! ```yaml
//! from: [employee]
//! join:
//!   - { table: department, on: "employee.department_id == department.id" }
//! where:
//!   - "employee.salary > 150"
//! select: [employee.name, department.title]
//! alias: { employee.name: Name, department.title: Dept }
//! order_by: [Dept]
//! limit: 10
//! ```
//!
//! Predicates are textual conditions (see `relq_operators::expr`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use relq_core::prelude::{Error, Result};
use relq_operators::{by_keys, AggregateCall, Condition, SortKey};

use crate::query::{JoinClause, Query};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuerySpec {
    pub from: Vec<String>,
    #[serde(default)]
    pub join: Vec<JoinDef>,
    #[serde(default, rename = "where")]
    pub where_: Vec<String>,
    #[serde(default)]
    pub group_by: Vec<String>,
    #[serde(default)]
    pub aggregate: Vec<AggregateCall>,
    #[serde(default)]
    pub having: Option<String>,
    #[serde(default)]
    pub select: Option<Vec<String>>,
    #[serde(default)]
    pub alias: HashMap<String, String>,
    #[serde(default)]
    pub distinct: Option<Vec<String>>,
    #[serde(default)]
    pub order_by: Vec<OrderDef>,
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JoinDef {
    pub table: String,
    pub on: String,
}

/// `order_by` entries: a bare column name (ascending) or `{column, desc}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderDef {
    Column(String),
    Key(SortKey),
}

impl OrderDef {
    fn into_key(self) -> SortKey {
        match self {
            OrderDef::Column(c) => SortKey::asc(c),
            OrderDef::Key(k) => k,
        }
    }
}

fn condition(expr: &str) -> Result<relq_operators::Predicate> {
    Ok(Condition::parse(expr)?.into_predicate())
}

impl QuerySpec {
    pub fn into_query(self) -> Result<Query> {
        if self.select.is_none() && !self.alias.is_empty() {
            return Err(Error::Parse("'alias' needs a 'select' list".into()));
        }

        let mut q = Query::new(self.from);

        for j in self.join {
            q.joins.push(JoinClause {
                predicate: condition(&j.on)?,
                table: j.table,
            });
        }
        for expr in &self.where_ {
            q.filters.push(condition(expr)?);
        }
        q.group_by = self.group_by;
        q.aggregates = self.aggregate;
        if let Some(expr) = &self.having {
            q.having = Some(condition(expr)?);
        }
        q.select = self.select;
        q.aliases = self.alias;
        q.distinct = self.distinct;
        if !self.order_by.is_empty() {
            let keys = self.order_by.into_iter().map(OrderDef::into_key).collect();
            q.order_by = Some(by_keys(keys));
        }
        q.offset = self.offset;
        q.limit = self.limit;

        Ok(q)
    }
}

/// Parse a YAML recipe into a `Query`.
pub fn parse_yaml_query(yaml: &str) -> Result<Query> {
    let spec: QuerySpec = serde_yaml::from_str(yaml).map_err(|e| Error::Parse(e.to_string()))?;
    spec.into_query()
}
