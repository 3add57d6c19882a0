//! Coercion rules: raw text to a declared value type.
//!
//! # Design Decisions
//! - One function per value type, collected into a dispatch table when a
//!   registry is built; adding a type is a single table entry
//! - A rule returns `None` on mismatch; the registry turns that into the
//!   empty sentinel and a warning, never into an error

use std::collections::HashMap;

use crate::registry::region::Region;
use crate::registry::value::{PropertyValue, ValueType};

/// Converts raw text to a value of one declared type, `None` on mismatch.
pub type Coercer = fn(&str) -> Option<PropertyValue>;

/// Dispatch table from declared type to its coercion rule.
pub type CoercionTable = HashMap<ValueType, Coercer>;

/// Rules for every built-in value type.
pub fn builtin_table() -> CoercionTable {
    let mut table = CoercionTable::new();
    table.insert(ValueType::Text, coerce_text as Coercer);
    table.insert(ValueType::Boolean, coerce_boolean as Coercer);
    table.insert(ValueType::Integer32, coerce_integer32 as Coercer);
    table.insert(ValueType::Integer64, coerce_integer64 as Coercer);
    table.insert(ValueType::Float64, coerce_float64 as Coercer);
    table.insert(ValueType::Region, coerce_region as Coercer);
    table
}

fn coerce_text(raw: &str) -> Option<PropertyValue> {
    Some(PropertyValue::text(raw))
}

/// Only the exact literals `true` and `false` are accepted.
fn coerce_boolean(raw: &str) -> Option<PropertyValue> {
    match raw {
        "true" => Some(PropertyValue::Boolean(true)),
        "false" => Some(PropertyValue::Boolean(false)),
        _ => None,
    }
}

fn coerce_integer32(raw: &str) -> Option<PropertyValue> {
    raw.parse().ok().map(PropertyValue::Integer32)
}

fn coerce_integer64(raw: &str) -> Option<PropertyValue> {
    raw.parse().ok().map(PropertyValue::Integer64)
}

// NaN and the infinities parse, but have no stable equality and no JSON form.
fn coerce_float64(raw: &str) -> Option<PropertyValue> {
    raw.trim()
        .parse()
        .ok()
        .filter(|x: &f64| x.is_finite())
        .map(PropertyValue::Float64)
}

fn coerce_region(raw: &str) -> Option<PropertyValue> {
    Region::from_id(raw).map(PropertyValue::Region)
}
