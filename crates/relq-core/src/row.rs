//! Rows: ordered column-name → value records.
//!
//! A `Row` is either `Plain` or `Grouped`. Grouped rows come out of
//! `GROUP_BY` and carry the member rows of their group next to the key
//! columns; aggregates consume the member list and emit plain rows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Value;

/// Insertion-ordered column map shared by both row shapes.
pub type Columns = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Row {
    Plain(Columns),
    Grouped { key: Columns, members: Vec<Row> },
}

impl Row {
    pub fn new() -> Self {
        Row::Plain(Columns::new())
    }

    pub fn grouped(key: Columns, members: Vec<Row>) -> Self {
        Row::Grouped { key, members }
    }

    /// Visible columns: the full record for plain rows, the key for grouped rows.
    pub fn columns(&self) -> &Columns {
        match self {
            Row::Plain(cols) => cols,
            Row::Grouped { key, .. } => key,
        }
    }

    fn columns_mut(&mut self) -> &mut Columns {
        match self {
            Row::Plain(cols) => cols,
            Row::Grouped { key, .. } => key,
        }
    }

    pub fn members(&self) -> Option<&[Row]> {
        match self {
            Row::Plain(_) => None,
            Row::Grouped { members, .. } => Some(members),
        }
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, Row::Grouped { .. })
    }

    /// Look up a column, failing with `MissingColumn` if the row lacks it.
    pub fn get(&self, column: &str) -> Result<&Value> {
        self.columns()
            .get(column)
            .ok_or_else(|| Error::MissingColumn(column.to_string()))
    }

    pub fn try_get(&self, column: &str) -> Option<&Value> {
        self.columns().get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns().contains_key(column)
    }

    /// Set a column. An existing column keeps its position; a new one is appended.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns_mut().insert(column.into(), value.into());
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns().keys().map(String::as_str)
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.columns().values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.columns().iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns().len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns().is_empty()
    }

    /// Shallow merge: `changes` override matching columns, new ones are appended.
    /// Grouped rows keep their member list.
    pub fn merged(&self, changes: &Columns) -> Row {
        let mut out = self.clone();
        let cols = out.columns_mut();
        for (k, v) in changes {
            cols.insert(k.clone(), v.clone());
        }
        out
    }

    /// Drop the member list, keeping only the visible columns.
    pub fn into_plain(self) -> Row {
        match self {
            Row::Plain(cols) => Row::Plain(cols),
            Row::Grouped { key, .. } => Row::Plain(key),
        }
    }
}

impl Default for Row {
    fn default() -> Self {
        Row::new()
    }
}

impl From<Columns> for Row {
    fn from(cols: Columns) -> Self {
        Row::Plain(cols)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row::Plain(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_appends_and_overwrites_in_place() {
        let r = Row::new().with("a", 1).with("b", "x").with("a", 2);
        assert_eq!(r.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(r.get("a").unwrap(), &Value::Integer(2));
    }

    #[test]
    fn test_try_get_vs_get() {
        let r = Row::new().with("a", 1);
        assert_eq!(r.try_get("a"), Some(&Value::Integer(1)));
        assert_eq!(r.try_get("b"), None);
        assert_eq!(r.get("b"), Err(Error::MissingColumn("b".into())));
    }

    #[test]
    fn test_grouped_row_exposes_key_only() {
        let member = Row::new().with("state", "CO").with("name", "Dave");
        let key: Columns = [("state".to_string(), Value::from("CO"))].into_iter().collect();
        let g = Row::grouped(key, vec![member.clone()]);

        assert!(g.is_grouped());
        assert!(!g.contains("name"));
        assert_eq!(g.members(), Some(&[member][..]));
        assert!(!g.into_plain().is_grouped());
    }
}
