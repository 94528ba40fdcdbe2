//! Runtime: walk a `QueryPlan` against a `Database`.
//!
//! Execution is synchronous and fully materialized: each step consumes the
//! running result and replaces it with the table its operator returns.

use relq_core::prelude::{Result, Table};
use relq_planner::{Query, QueryPlan};

use crate::catalog::Database;
use crate::metrics::emit_span;

/// Lower `query` and run it.
pub fn execute(db: &Database, query: &Query) -> Result<Table> {
    let plan = query.plan()?;
    run(db, &plan)
}

/// Run an already lowered plan. Any step failure aborts the whole query.
pub fn run(db: &Database, plan: &QueryPlan) -> Result<Table> {
    let mut acc = db.from(plan.from.as_slice())?;
    emit_span(
        "from",
        &[
            ("tables", plan.from.join(",")),
            ("rows", acc.len().to_string()),
        ],
    );

    for step in &plan.steps {
        let out = match &step.right {
            Some(name) => {
                let right = db.table(name)?;
                db.check_collision(&acc, right)?;
                step.op.eval(&[&acc, right])?
            }
            None => step.op.eval(&[&acc])?,
        };
        emit_span(
            step.name(),
            &[("rows_in", acc.len().to_string()), ("rows_out", out.len().to_string())],
        );
        acc = out;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(steps = plan.steps.len() + 1, rows = acc.len(), "query finished");

    Ok(acc)
}
