#![forbid(unsafe_code)]
//! relq-exec: the table catalog and the query runtime.
//!
//! The catalog (`Database`) owns table lifecycle: create, drop, insert, and
//! FROM resolution. The runtime executes planned queries against it
//! sequentially, step by step.

pub mod catalog;
pub mod metrics;
pub mod runtime;

pub use catalog::Database;
pub use runtime::{execute, run};
