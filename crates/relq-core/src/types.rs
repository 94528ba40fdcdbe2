//! Scalar values stored in rows.
//!
//! `Value` equality and `PartialOrd` are structural per variant: values of
//! different variants are never equal and never ordered. Integers and floats
//! only meet through [`Value::compare_numeric`] and [`Value::total_cmp`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Whether two values can be ordered against each other: both numeric,
    /// or the same variant.
    pub fn comparable_with(&self, other: &Value) -> bool {
        (self.is_numeric() && other.is_numeric())
            || std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Variant name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(mismatch("boolean", other)),
        }
    }

    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(mismatch("integer", other)),
        }
    }

    /// Integers widen to f64; everything else is a mismatch.
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Integer(i) => Ok(*i as f64),
            Value::Float(f) => Ok(*f),
            other => Err(mismatch("float", other)),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(mismatch("text", other)),
        }
    }

    /// Ordering used by comparison conditions and MAX/MIN. Integers and
    /// floats compare numerically with each other; other pairs only within
    /// their own variant. `None` for incomparable pairs and NaN.
    pub fn compare_numeric(&self, other: &Value) -> Option<Ordering> {
        use Value::*;

        match (self, other) {
            (Integer(x), Float(y)) => (*x as f64).partial_cmp(y),
            (Float(x), Integer(y)) => x.partial_cmp(&(*y as f64)),
            (Float(x), Float(y)) => x.partial_cmp(y),
            _ => self.partial_cmp(other),
        }
    }

    /// Total order used for sorting.
    ///
    /// Nulls sort first, then booleans, numbers (integers and floats compared
    /// numerically), then text.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        use Value::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Boolean(x), Boolean(y)) => x.cmp(y),
            (Integer(x), Integer(y)) => x.cmp(y),
            (Float(x), Float(y)) => x.total_cmp(y),
            (Integer(x), Float(y)) => (*x as f64).total_cmp(y),
            (Float(x), Integer(y)) => x.total_cmp(&(*y as f64)),
            (Text(x), Text(y)) => x.cmp(y),
            _ => type_order(self).cmp(&type_order(other)),
        }
    }
}

fn mismatch(expected: &str, found: &Value) -> Error {
    Error::TypeMismatch(format!("expected {expected}, found {}", found.type_name()))
}

/// Rank of each variant for mixed-type ordering. Integers and floats share a rank.
fn type_order(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Boolean(_) => 1,
        Value::Integer(_) | Value::Float(_) => 2,
        Value::Text(_) => 3,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;

        match (self, other) {
            (Null, Null) => true,
            (Boolean(x), Boolean(y)) => x == y,
            (Integer(x), Integer(y)) => x == y,
            (Float(x), Float(y)) => x.total_cmp(y) == Ordering::Equal,
            (Text(x), Text(y)) => x == y,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
        }
    }
}

impl PartialOrd for Value {
    /// Same-variant pairs only, so `Some(Equal)` exactly when `==` holds.
    /// Floats use `f64::total_cmp`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Value::*;

        match (self, other) {
            (Null, Null) => Some(Ordering::Equal),
            (Boolean(x), Boolean(y)) => Some(x.cmp(y)),
            (Integer(x), Integer(y)) => Some(x.cmp(y)),
            (Float(x), Float(y)) => Some(x.total_cmp(y)),
            (Text(x), Text(y)) => Some(x.cmp(y)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_across_variants() {
        assert_eq!(
            Value::Integer(2).compare_numeric(&Value::Float(1.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::Float(0.5).compare_numeric(&Value::Integer(1)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Integer(1).compare_numeric(&Value::Float(1.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(Value::Float(f64::NAN).compare_numeric(&Value::Float(1.0)), None);
    }

    #[test]
    fn test_mixed_types_are_incomparable() {
        assert_eq!(Value::from("a").partial_cmp(&Value::Integer(1)), None);
        assert_eq!(Value::Null.partial_cmp(&Value::Integer(1)), None);
        assert_eq!(Value::Integer(1).partial_cmp(&Value::Float(1.0)), None);
        assert_eq!(Value::from("a").compare_numeric(&Value::Integer(1)), None);
        assert!(!(Value::Null > Value::Integer(1)));
    }

    #[test]
    fn test_partial_cmp_agrees_with_eq() {
        let values = [
            Value::Null,
            Value::Boolean(false),
            Value::Integer(1),
            Value::Integer(2),
            Value::Float(1.0),
            Value::Float(f64::NAN),
            Value::from("1"),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(
                    a.partial_cmp(b) == Some(Ordering::Equal),
                    a == b,
                    "{a:?} vs {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_typed_accessors() {
        assert_eq!(Value::Boolean(true).as_bool(), Ok(true));
        assert_eq!(Value::Integer(7).as_int(), Ok(7));
        assert_eq!(Value::Integer(7).as_float(), Ok(7.0));
        assert_eq!(Value::from("x").as_str(), Ok("x"));
        assert!(matches!(Value::Float(1.0).as_int(), Err(Error::TypeMismatch(_))));
        assert!(matches!(Value::Null.as_bool(), Err(Error::TypeMismatch(_))));
    }

    #[test]
    fn test_total_cmp_puts_nulls_first() {
        let mut values = vec![
            Value::from("b"),
            Value::Integer(3),
            Value::Null,
            Value::Float(1.5),
            Value::Boolean(true),
        ];
        values.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Boolean(true),
                Value::Float(1.5),
                Value::Integer(3),
                Value::from("b"),
            ]
        );
    }

    #[test]
    fn test_display_renders_null_as_empty() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from("x").to_string(), "x");
        assert_eq!(Value::Integer(-4).to_string(), "-4");
    }

    #[test]
    fn test_nan_equals_itself() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }
}
