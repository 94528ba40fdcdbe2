//! Lowering a `Query` into an ordered list of bound operators.
//!
//! Step order is always:
//! `FROM → JOIN* → WHERE* → GROUP_BY? → AGGREGATE? → HAVING? → SELECT? →
//! DISTINCT? → ORDER_BY? → OFFSET? → LIMIT?`
//!
//! Consequence: SELECT aliases are invisible to join, WHERE, and HAVING
//! predicates, and visible to DISTINCT and ORDER_BY.

use relq_core::prelude::{Error, Result};
use relq_operators::{
    Aggregate, Distinct, Filter, GroupBy, Join, JoinType, Limit, Offset, Operator, OrderBy, Select,
};

use crate::query::Query;

pub struct PlanStep {
    pub op: Box<dyn Operator>,
    /// For join steps: the catalog table joined against the running result.
    pub right: Option<String>,
}

impl PlanStep {
    fn unary(op: impl Operator) -> Self {
        Self {
            op: Box::new(op),
            right: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.op.name()
    }
}

pub struct QueryPlan {
    /// Tables cross-joined (left fold) to seed the pipeline.
    pub from: Vec<String>,
    pub steps: Vec<PlanStep>,
}

impl QueryPlan {
    /// Operator names in execution order, `from` first.
    pub fn describe(&self) -> Vec<&'static str> {
        std::iter::once("from")
            .chain(self.steps.iter().map(PlanStep::name))
            .collect()
    }
}

impl Query {
    pub fn plan(&self) -> Result<QueryPlan> {
        if self.from.is_empty() {
            return Err(Error::InvalidArgument(
                "query needs at least one FROM table".into(),
            ));
        }

        let mut steps = Vec::new();

        for j in &self.joins {
            steps.push(PlanStep {
                op: Box::new(Join::new(JoinType::Inner, j.predicate.clone())),
                right: Some(j.table.clone()),
            });
        }
        for pred in &self.filters {
            steps.push(PlanStep::unary(Filter::where_(pred.clone())));
        }
        if !self.group_by.is_empty() {
            steps.push(PlanStep::unary(GroupBy {
                columns: self.group_by.clone(),
            }));
        }
        if !self.aggregates.is_empty() {
            steps.push(PlanStep::unary(Aggregate {
                calls: self.aggregates.clone(),
            }));
        }
        if let Some(pred) = &self.having {
            steps.push(PlanStep::unary(Filter::having(pred.clone())));
        }
        if let Some(columns) = &self.select {
            steps.push(PlanStep::unary(Select {
                columns: columns.clone(),
                aliases: self.aliases.clone(),
            }));
        }
        if let Some(columns) = &self.distinct {
            steps.push(PlanStep::unary(Distinct {
                columns: columns.clone(),
            }));
        }
        if let Some(cmp) = &self.order_by {
            steps.push(PlanStep::unary(OrderBy {
                comparator: cmp.clone(),
            }));
        }
        if let Some(n) = self.offset {
            steps.push(PlanStep::unary(Offset(n)));
        }
        if let Some(n) = self.limit {
            steps.push(PlanStep::unary(Limit(n)));
        }

        Ok(QueryPlan {
            from: self.from.clone(),
            steps,
        })
    }
}
