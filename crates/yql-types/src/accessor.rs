//! Typed accessors over generic values
//!
//! Each accessor checks the value's shape and returns an owned snapshot of
//! the requested parts, or a `CapabilityMismatch` error naming the value's
//! YQL type. Optional wrappers are not looked through.

use indexmap::IndexMap;
use yql_diagnostics::{Result, ValueError};

use crate::{Decimal, Value};

/// Get the parts of a decimal value
#[track_caller]
pub fn to_decimal(value: &Value) -> Result<Decimal> {
    match value {
        Value::Decimal(decimal) => Ok(decimal.snapshot()),
        other => Err(ValueError::capability_mismatch(format!(
            "value type '{}' is not decimal type",
            other.yql()
        ))),
    }
}

/// Get the items of a list value, in order
#[track_caller]
pub fn list_items(value: &Value) -> Result<Vec<Value>> {
    match value {
        Value::List(list) => Ok(list.items().to_vec()),
        other => Err(ValueError::capability_mismatch(format!(
            "cannot get list items from '{}'",
            other.yql()
        ))),
    }
}

/// Get the items of a tuple value, in order
#[track_caller]
pub fn tuple_items(value: &Value) -> Result<Vec<Value>> {
    match value {
        Value::Tuple(tuple) => Ok(tuple.items().to_vec()),
        other => Err(ValueError::capability_mismatch(format!(
            "cannot get tuple items from '{}'",
            other.yql()
        ))),
    }
}

/// Get the fields of a struct value, keyed by name in declaration order
#[track_caller]
pub fn struct_fields(value: &Value) -> Result<IndexMap<String, Value>> {
    match value {
        Value::Struct(st) => Ok(st.fields().clone()),
        other => Err(ValueError::capability_mismatch(format!(
            "cannot get struct fields from '{}'",
            other.yql()
        ))),
    }
}

/// Get the entries of a dict value
#[track_caller]
pub fn dict_values(value: &Value) -> Result<IndexMap<Value, Value>> {
    match value {
        Value::Dict(dict) => Ok(dict.entries().clone()),
        other => Err(ValueError::capability_mismatch(format!(
            "cannot get dict values from '{}'",
            other.yql()
        ))),
    }
}
