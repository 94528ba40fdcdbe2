//! Convenient re-exports for downstream crates.

pub use crate::config::EngineConfig;
pub use crate::error::{Error, Result};
pub use crate::hash::Hash256;
pub use crate::row::{Columns, Row};
pub use crate::schema::Schema;
pub use crate::table::Table;
pub use crate::types::Value;
