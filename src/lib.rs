#![forbid(unsafe_code)]
//! relq: an embeddable, in-process relational-algebra engine.
//!
//! Build a [`Database`], register and fill tables, then either call the
//! operators in [`ops`] directly on [`Table`] values or describe a whole
//! query with [`Query`] (or YAML via [`parse_yaml_query`]) and run it with
//! [`Database::query`].
//!
//! ```
//! use relq::prelude::*;
//! use relq::row;
//!
//! let mut db = Database::new();
//! db.create_table("friend").unwrap();
//! db.insert_into(
//!     "friend",
//!     vec![
//!         row! { "name" => "Alice", "state" => "Colorado" },
//!         row! { "name" => "Bob", "state" => "Texas" },
//!         row! { "name" => "Carla", "state" => "Colorado" },
//!     ],
//! )
//! .unwrap();
//!
//! let friends = db.from(&["friend"]).unwrap();
//! let counts = ops::count(&ops::group_by(&friends, &["state"]).unwrap(), "name").unwrap();
//! assert_eq!(counts.rows()[0].get("COUNT(name)").unwrap(), &Value::Integer(2));
//! ```

pub use relq_core::{config, row, Columns, Error, Result, Row, Schema, Table, Value};
pub use relq_exec::{execute, run, Database};
pub use relq_planner::{parse_yaml_query, Query, QueryPlan, QuerySpec};

/// Relational operators as free functions and plan-bindable structs.
pub use relq_operators as ops;

pub mod prelude {
    pub use crate::ops;
    pub use relq_core::prelude::*;
    pub use relq_exec::Database;
    pub use relq_operators::{AggregateCall, AggregateFn, Condition, SortKey};
    pub use relq_planner::{parse_yaml_query, Query};
}
