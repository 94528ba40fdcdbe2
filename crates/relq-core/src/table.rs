//! Immutable tables.
//!
//! A `Table` is a shared, read-only sequence of rows with an optional name and
//! an optional declared schema. Cloning is cheap (the rows live behind an
//! `Arc`), and nothing hands out mutable access to the rows: every operator
//! builds a fresh table.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::hash::{hash_serde, Hash256};
use crate::row::Row;
use crate::schema::Schema;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    name: Option<String>,
    rows: Arc<[Row]>,
    schema: Option<Schema>,
}

impl Table {
    /// A named table. An empty name is treated as no name.
    pub fn new(name: impl Into<String>, rows: impl IntoIterator<Item = Row>) -> Self {
        Self::from_parts(Some(name.into()), rows.into_iter().collect(), None)
    }

    /// An unnamed table, the shape every join produces.
    pub fn anonymous(rows: impl IntoIterator<Item = Row>) -> Self {
        Self::from_parts(None, rows.into_iter().collect(), None)
    }

    pub fn from_parts(name: Option<String>, rows: Vec<Row>, schema: Option<Schema>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            rows: rows.into(),
            schema: schema.filter(|s| !s.is_empty()),
        }
    }

    /// Attach a declared column list.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema).filter(|s| !s.is_empty());
        self
    }

    /// Same name, new rows, and the given schema.
    pub fn derive(&self, rows: Vec<Row>, schema: Option<Schema>) -> Table {
        Table::from_parts(self.name.clone(), rows, schema)
    }

    /// New table holding this table's rows followed by `extra`.
    pub fn appended(&self, extra: impl IntoIterator<Item = Row>) -> Table {
        let mut rows = self.rows.to_vec();
        rows.extend(extra);
        Table {
            name: self.name.clone(),
            rows: rows.into(),
            schema: self.schema.clone(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn declared_schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// True when the rows came out of `GROUP_BY` and still carry their members.
    pub fn is_grouped(&self) -> bool {
        self.rows.first().is_some_and(Row::is_grouped)
    }

    /// The definitive column list: the declared schema if present, otherwise
    /// the first row's columns. Fails with `MissingSchema` when neither exists.
    pub fn schema(&self) -> Result<Schema> {
        if let Some(schema) = &self.schema {
            return Ok(schema.clone());
        }
        match self.rows.first() {
            Some(row) => Ok(Schema::new(row.keys())),
            None => Err(Error::MissingSchema(format!(
                "table '{}' has no rows and no declared columns",
                self.name.as_deref().unwrap_or("<anonymous>")
            ))),
        }
    }

    pub fn column_names(&self) -> Result<Vec<String>> {
        Ok(self.schema()?.columns)
    }

    /// Content hash over name, rows, and declared schema.
    pub fn fingerprint(&self) -> Result<Hash256> {
        hash_serde(self)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
