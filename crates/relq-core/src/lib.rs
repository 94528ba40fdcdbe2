#![forbid(unsafe_code)]
//! relq-core: values, rows, tables, errors, and configuration.
//!
//! Everything here is plain data plus the lookups operators need. There is
//! no catalog and no operator logic in this crate.

pub mod config;
pub mod error;
pub mod hash;
mod macros;
pub mod prelude;
pub mod row;
pub mod schema;
pub mod table;
pub mod types;

pub use error::{Error, Result};
pub use row::{Columns, Row};
pub use schema::Schema;
pub use table::Table;
pub use types::Value;
