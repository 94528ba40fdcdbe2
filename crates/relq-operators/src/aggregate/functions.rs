//! Aggregate evaluation over a slice of rows.
//!
//! Nulls are skipped by every function except COUNT, which counts rows.

use std::cmp::Ordering;

use relq_core::prelude::{Error, Result, Row, Value};

use super::{AggregateCall, AggregateFn};

pub(crate) fn evaluate(call: &AggregateCall, rows: &[Row]) -> Result<Value> {
    if call.func == AggregateFn::Count {
        return Ok(Value::Integer(rows.len() as i64));
    }
    if rows.is_empty() {
        return Err(Error::EmptyAggregate(call.output_name()));
    }

    let mut values = Vec::with_capacity(rows.len());
    for row in rows {
        let v = row.get(&call.column)?;
        if !v.is_null() {
            values.push(v);
        }
    }
    if values.is_empty() {
        return Ok(Value::Null);
    }

    match call.func {
        AggregateFn::Count => Ok(Value::Integer(rows.len() as i64)),
        AggregateFn::Sum => sum(call, &values),
        AggregateFn::Avg => avg(call, &values),
        AggregateFn::Max => extreme(call, &values, Ordering::Greater),
        AggregateFn::Min => extreme(call, &values, Ordering::Less),
    }
}

fn sum(call: &AggregateCall, values: &[&Value]) -> Result<Value> {
    let mut int_total: i64 = 0;
    let mut float_total: Option<f64> = None;

    for v in values {
        match v {
            Value::Integer(i) => match float_total.as_mut() {
                Some(f) => *f += *i as f64,
                None => {
                    int_total = int_total
                        .checked_add(*i)
                        .ok_or_else(|| Error::Overflow(call.output_name()))?;
                }
            },
            Value::Float(x) => {
                let f = float_total.get_or_insert(int_total as f64);
                *f += x;
            }
            other => return Err(not_numeric(call, other)),
        }
    }

    Ok(match float_total {
        Some(f) => Value::Float(f),
        None => Value::Integer(int_total),
    })
}

fn avg(call: &AggregateCall, values: &[&Value]) -> Result<Value> {
    let mut total = 0.0;
    for v in values {
        if !v.is_numeric() {
            return Err(not_numeric(call, v));
        }
        total += v.as_float()?;
    }
    Ok(Value::Float(total / values.len() as f64))
}

/// MAX when `want` is Greater, MIN when it is Less. Ties keep the first
/// value; NaN never replaces the current pick.
fn extreme(call: &AggregateCall, values: &[&Value], want: Ordering) -> Result<Value> {
    let mut best = values[0];
    for v in &values[1..] {
        match v.compare_numeric(best) {
            Some(ord) if ord == want => best = *v,
            Some(_) => {}
            None if v.comparable_with(best) => {}
            None => {
                return Err(Error::TypeMismatch(format!(
                    "{}: cannot compare {} with {}",
                    call.output_name(),
                    v.type_name(),
                    best.type_name()
                )))
            }
        }
    }
    Ok(best.clone())
}

fn not_numeric(call: &AggregateCall, v: &Value) -> Error {
    Error::TypeMismatch(format!(
        "{}: expected numeric values, found {}",
        call.output_name(),
        v.type_name()
    ))
}
