//! Operator trait + the closure types operators take.
//!
//! Every relational operator is available twice: as a free function over
//! borrowed tables (the direct API) and as a small struct implementing
//! [`Operator`], which is what the planner binds into a `QueryPlan`.

use std::cmp::Ordering;
use std::sync::Arc;

use relq_core::prelude::{Error, Result, Row, Table};

/// Row filter shared by WHERE/HAVING/UPDATE and join conditions.
pub type Predicate = Arc<dyn Fn(&Row) -> Result<bool> + Send + Sync>;

/// Two-row comparator for ORDER_BY. Receives whole rows so it can sort on
/// several or derived columns.
pub type Comparator = Arc<dyn Fn(&Row, &Row) -> Result<Ordering> + Send + Sync>;

pub fn predicate<F>(f: F) -> Predicate
where
    F: Fn(&Row) -> Result<bool> + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn comparator<F>(f: F) -> Comparator
where
    F: Fn(&Row, &Row) -> Result<Ordering> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Predicate that accepts every row.
pub fn match_all() -> Predicate {
    Arc::new(|_: &Row| Ok(true))
}

/// Trait that all operators must implement.
///
/// Invariants:
/// - `eval` never mutates its inputs; it returns a new table.
/// - `eval` is deterministic given the same inputs.
pub trait Operator: Send + Sync + 'static {
    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Number of input tables `eval` expects.
    fn arity(&self) -> usize {
        1
    }

    /// Unary ops read `inputs[0]`; joins read `inputs[0]` (left) and `inputs[1]` (right).
    fn eval(&self, inputs: &[&Table]) -> Result<Table>;
}

pub(crate) fn unary<'a>(op: &str, inputs: &[&'a Table]) -> Result<&'a Table> {
    match inputs {
        [t] => Ok(t),
        _ => Err(Error::InvalidArgument(format!(
            "{op} expects one input, got {}",
            inputs.len()
        ))),
    }
}

pub(crate) fn binary<'a>(op: &str, inputs: &[&'a Table]) -> Result<(&'a Table, &'a Table)> {
    match inputs {
        [a, b] => Ok((a, b)),
        _ => Err(Error::InvalidArgument(format!(
            "{op} expects two inputs, got {}",
            inputs.len()
        ))),
    }
}
