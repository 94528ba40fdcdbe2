//! Textual comparison conditions: `"<operand> <op> <operand>"`.
//!
//! Supported operators: `==` (or `=`), `!=`, `<`, `<=`, `>`, `>=`.
//! An operand is a quoted string (`'x'` or `"x"`), an integer, a float,
//! `true`/`false`, `null`, or otherwise a column reference such as
//! `employee.salary` or `COUNT(name)`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use relq_core::prelude::{Error, Result, Row, Value};

use crate::traits::Predicate;

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Column(String),
    Literal(Value),
}

impl Operand {
    fn resolve<'a>(&'a self, row: &'a Row) -> Result<&'a Value> {
        match self {
            Operand::Column(c) => row.get(c),
            Operand::Literal(v) => Ok(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CmpOp {
    fn matches(self, ord: Ordering) -> bool {
        match self {
            CmpOp::Eq => ord == Ordering::Equal,
            CmpOp::NotEq => ord != Ordering::Equal,
            CmpOp::Lt => ord == Ordering::Less,
            CmpOp::LtEq => ord != Ordering::Greater,
            CmpOp::Gt => ord == Ordering::Greater,
            CmpOp::GtEq => ord != Ordering::Less,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::NotEq => "!=",
            CmpOp::Lt => "<",
            CmpOp::LtEq => "<=",
            CmpOp::Gt => ">",
            CmpOp::GtEq => ">=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub left: Operand,
    pub op: CmpOp,
    pub right: Operand,
}

impl Condition {
    pub fn new(left: Operand, op: CmpOp, right: Operand) -> Self {
        Self { left, op, right }
    }

    pub fn parse(expr: &str) -> Result<Self> {
        let (pos, op, len) = find_operator(expr)
            .ok_or_else(|| Error::Parse(format!("no comparison operator in '{expr}'")))?;
        let left = parse_operand(&expr[..pos], expr)?;
        let right = parse_operand(&expr[pos + len..], expr)?;
        Ok(Self { left, op, right })
    }

    /// Null operands and incomparable operands make the condition false.
    /// `==` and `!=` use structural `Value` equality, the same equality
    /// GROUP_BY and DISTINCT key on, so `1 == 1.0` is false. The ordering
    /// operators compare integers and floats numerically.
    /// A column reference missing from the row fails with `MissingColumn`.
    pub fn eval(&self, row: &Row) -> Result<bool> {
        let l = self.left.resolve(row)?;
        let r = self.right.resolve(row)?;
        if l.is_null() || r.is_null() || !l.comparable_with(r) {
            return Ok(false);
        }
        Ok(match self.op {
            CmpOp::Eq => l == r,
            CmpOp::NotEq => l != r,
            op => l.compare_numeric(r).is_some_and(|ord| op.matches(ord)),
        })
    }

    pub fn into_predicate(self) -> Predicate {
        Arc::new(move |row: &Row| self.eval(row))
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Condition::parse(s)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Column(c) => f.write_str(c),
            Operand::Literal(Value::Text(s)) => write!(f, "'{s}'"),
            Operand::Literal(Value::Null) => f.write_str("null"),
            Operand::Literal(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op.symbol(), self.right)
    }
}

/// Byte position, operator, and operator length of the first comparison
/// operator outside quotes.
fn find_operator(expr: &str) -> Option<(usize, CmpOp, usize)> {
    let bytes = expr.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        let next = bytes.get(i + 1).copied();
        let found = match (c, next) {
            (b'\'' | b'"', _) => {
                quote = Some(c);
                None
            }
            (b'=', Some(b'=')) => Some((CmpOp::Eq, 2)),
            (b'!', Some(b'=')) => Some((CmpOp::NotEq, 2)),
            (b'<', Some(b'=')) => Some((CmpOp::LtEq, 2)),
            (b'>', Some(b'=')) => Some((CmpOp::GtEq, 2)),
            (b'=', _) => Some((CmpOp::Eq, 1)),
            (b'<', _) => Some((CmpOp::Lt, 1)),
            (b'>', _) => Some((CmpOp::Gt, 1)),
            _ => None,
        };
        if let Some((op, len)) = found {
            return Some((i, op, len));
        }
        i += 1;
    }
    None
}

fn parse_operand(raw: &str, expr: &str) -> Result<Operand> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(Error::Parse(format!("missing operand in '{expr}'")));
    }

    if let Some(q) = s.chars().next().filter(|c| *c == '\'' || *c == '"') {
        let inner = &s[1..];
        return match inner.find(q) {
            Some(end) if end + 1 == inner.len() => {
                Ok(Operand::Literal(Value::Text(inner[..end].to_string())))
            }
            Some(_) => Err(Error::Parse(format!(
                "unexpected text after quoted literal in '{expr}'"
            ))),
            None => Err(Error::Parse(format!("unterminated quote in '{expr}'"))),
        };
    }

    match s.to_ascii_lowercase().as_str() {
        "null" => return Ok(Operand::Literal(Value::Null)),
        "true" => return Ok(Operand::Literal(Value::Boolean(true))),
        "false" => return Ok(Operand::Literal(Value::Boolean(false))),
        _ => {}
    }

    let numeric = s
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+' || c == '.');
    if numeric {
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Operand::Literal(Value::Integer(i)));
        }
        if let Ok(f) = s.parse::<f64>() {
            return Ok(Operand::Literal(Value::Float(f)));
        }
    }

    Ok(Operand::Column(s.to_string()))
}
