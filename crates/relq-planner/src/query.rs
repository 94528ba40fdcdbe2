//! Declarative query recipe.
//!
//! A `Query` only records clauses; [`Query::plan`] lowers it into a
//! [`QueryPlan`](crate::plan::QueryPlan) whose step order is fixed no matter
//! in which order the builder methods were called.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use relq_core::prelude::{Result, Row};
use relq_operators::{AggregateCall, Aliases, Comparator, Predicate};

/// `INNER_JOIN` of the accumulated result with the named catalog table.
#[derive(Clone)]
pub struct JoinClause {
    pub table: String,
    pub predicate: Predicate,
}

#[derive(Clone, Default)]
pub struct Query {
    pub from: Vec<String>,
    pub joins: Vec<JoinClause>,
    /// Applied in sequence; a row must pass all of them.
    pub filters: Vec<Predicate>,
    pub group_by: Vec<String>,
    pub aggregates: Vec<AggregateCall>,
    pub having: Option<Predicate>,
    pub select: Option<Vec<String>>,
    /// Only used together with `select`.
    pub aliases: Aliases,
    pub distinct: Option<Vec<String>>,
    pub order_by: Option<Comparator>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Query {
    /// Start a query over one or more catalog tables (cross-joined left to right).
    pub fn new<I, S>(from: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from: from.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn join<F>(mut self, table: impl Into<String>, pred: F) -> Self
    where
        F: Fn(&Row) -> Result<bool> + Send + Sync + 'static,
    {
        self.joins.push(JoinClause {
            table: table.into(),
            predicate: Arc::new(pred),
        });
        self
    }

    pub fn filter<F>(mut self, pred: F) -> Self
    where
        F: Fn(&Row) -> Result<bool> + Send + Sync + 'static,
    {
        self.filters.push(Arc::new(pred));
        self
    }

    pub fn group_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn aggregate(mut self, call: AggregateCall) -> Self {
        self.aggregates.push(call);
        self
    }

    pub fn having<F>(mut self, pred: F) -> Self
    where
        F: Fn(&Row) -> Result<bool> + Send + Sync + 'static,
    {
        self.having = Some(Arc::new(pred));
        self
    }

    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Rename `column` to `name` in the SELECT output.
    pub fn alias(mut self, column: impl Into<String>, name: impl Into<String>) -> Self {
        self.aliases.insert(column.into(), name.into());
        self
    }

    pub fn distinct<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.distinct = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn order_by<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&Row, &Row) -> Result<Ordering> + Send + Sync + 'static,
    {
        self.order_by = Some(Arc::new(cmp));
        self
    }

    pub fn offset(mut self, n: i64) -> Self {
        self.offset = Some(n);
        self
    }

    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("from", &self.from)
            .field(
                "joins",
                &self.joins.iter().map(|j| j.table.as_str()).collect::<Vec<_>>(),
            )
            .field("filters", &self.filters.len())
            .field("group_by", &self.group_by)
            .field("aggregates", &self.aggregates)
            .field("having", &self.having.is_some())
            .field("select", &self.select)
            .field("aliases", &self.aliases)
            .field("distinct", &self.distinct)
            .field("order_by", &self.order_by.is_some())
            .field("offset", &self.offset)
            .field("limit", &self.limit)
            .finish()
    }
}
