//! The catalog: a mutable registry of named tables.
//!
//! `Database` is the only mutable state in the engine. It is an explicit
//! handle (no globals), so independent catalogs never interfere. Mutating
//! methods take `&mut self` and are not internally synchronized; share a
//! `Database` across threads behind one lock (e.g. `Mutex<Database>`).

use indexmap::IndexMap;

use relq_core::prelude::{EngineConfig, Error, Result, Row, Schema, Table};
use relq_operators::{cross_join, find_collision};
use relq_planner::Query;

use crate::runtime;

#[derive(Debug, Clone, Default)]
pub struct Database {
    tables: IndexMap<String, Table>,
    config: EngineConfig,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            tables: IndexMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register an empty table without a declared schema.
    pub fn create_table(&mut self, name: impl Into<String>) -> Result<Table> {
        self.register(name.into(), None)
    }

    /// Register an empty table with a declared column list.
    pub fn create_table_with_columns<I, S>(
        &mut self,
        name: impl Into<String>,
        columns: I,
    ) -> Result<Table>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(name.into(), Some(Schema::new(columns)))
    }

    fn register(&mut self, name: String, schema: Option<Schema>) -> Result<Table> {
        if self.tables.contains_key(&name) && !self.config.replace_existing_tables {
            return Err(Error::AlreadyExists(name));
        }
        let table = Table::from_parts(Some(name.clone()), Vec::new(), schema);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            table = %name,
            columns = ?table.declared_schema().map(|s| s.len()),
            "create_table"
        );

        self.tables.insert(name, table.clone());
        Ok(table)
    }

    /// Remove a table, returning its last snapshot.
    pub fn drop_table(&mut self, name: &str) -> Result<Table> {
        let table = self
            .tables
            .shift_remove(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(table = %name, rows = table.len(), "drop_table");

        Ok(table)
    }

    /// Append rows, in the order given. Rows are not checked against the
    /// declared schema. Snapshots taken earlier keep their old rows.
    pub fn insert_into<I>(&mut self, name: &str, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = Row>,
    {
        let table = self
            .tables
            .get_mut(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        #[cfg(feature = "tracing")]
        let before = table.len();

        *table = table.appended(rows);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            table = %name,
            inserted = table.len() - before,
            total = table.len(),
            "insert_into"
        );

        Ok(())
    }

    /// Resolve one table, or cross-join several in the given order
    /// (`((t1 × t2) × t3) …`).
    pub fn from<S: AsRef<str>>(&self, names: &[S]) -> Result<Table> {
        let (first, rest) = names
            .split_first()
            .ok_or_else(|| Error::InvalidArgument("FROM needs at least one table".into()))?;

        let mut acc = self.table(first.as_ref())?.clone();
        for name in rest {
            let next = self.table(name.as_ref())?;
            self.check_collision(&acc, next)?;
            acc = cross_join(&acc, next);
        }
        Ok(acc)
    }

    /// Fails when `reject_column_collisions` is on and joining `a` with `b`
    /// would map two columns onto one name.
    pub(crate) fn check_collision(&self, a: &Table, b: &Table) -> Result<()> {
        if !self.config.reject_column_collisions {
            return Ok(());
        }
        match find_collision(a, b) {
            Some(col) => Err(Error::InvalidArgument(format!(
                "join would produce column '{col}' twice"
            ))),
            None => Ok(()),
        }
    }

    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Table names in registration order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Plan and run a query against this catalog.
    pub fn query(&self, query: &Query) -> Result<Table> {
        runtime::execute(self, query)
    }
}
