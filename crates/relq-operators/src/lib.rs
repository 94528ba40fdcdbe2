#![forbid(unsafe_code)]
//! relq-operators: relational operators over immutable tables.
//!
//! Design intent:
//! - Pure and synchronous. Every operator borrows its input table(s) and
//!   returns a new, independently owned table; inputs are never mutated.
//! - Intermediate results are fully materialized (no streaming).
//! - Each operator is exposed as a free function and as an [`Operator`]
//!   struct the planner can bind into a fixed-order plan.

pub mod traits;

pub mod aggregate;
pub mod distinct;
pub mod expr;
pub mod filter;
pub mod join;
pub mod limit;
pub mod project;
pub mod sort;
pub mod update;

pub use aggregate::{
    aggregate, avg, count, group_by, max, min, sum, Aggregate, AggregateCall, AggregateFn, GroupBy,
};
pub use distinct::{distinct, Distinct};
pub use expr::{CmpOp, Condition, Operand};
pub use filter::{filter, having, Filter};
pub use join::{cross_join, find_collision, inner_join, left_join, right_join, Join, JoinType};
pub use limit::{limit, offset, Limit, Offset};
pub use project::{select, Aliases, Select};
pub use sort::{by_keys, compare_by_keys, order_by, OrderBy, SortKey};
pub use traits::{comparator, match_all, predicate, Comparator, Operator, Predicate};
pub use update::{update, update_all, Update};
