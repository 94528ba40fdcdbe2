#![forbid(unsafe_code)]
//! relq-planner: query recipes → fixed-order operator plans.
//!
//! - `Query`: builder-style recipe (FROM, JOIN, WHERE, GROUP_BY, aggregates,
//!   HAVING, SELECT, DISTINCT, ORDER_BY, OFFSET, LIMIT).
//! - `QueryPlan`: the recipe lowered into bound operators in canonical order.
//! - `dsl::yaml`: the same recipe written as YAML with textual conditions.
//!
//! Nothing here touches a catalog; `relq-exec` runs plans.

pub mod dsl;
pub mod plan;
pub mod query;

pub use dsl::yaml::{parse_yaml_query, QuerySpec};
pub use plan::{PlanStep, QueryPlan};
pub use query::{JoinClause, Query};
