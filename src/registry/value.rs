//! Declared value types, resolved property values and raw decoder output.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::registry::region::Region;

/// Declared type of a property key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueType {
    Text,
    Boolean,
    Integer32,
    Integer64,
    Float64,
    Region,
    /// A type name the built-in set does not know. Coercing it needs a
    /// coercer registered under the same name.
    Named(String),
}

impl ValueType {
    /// Parse a type name as written in registry tables. Unknown names become
    /// [`ValueType::Named`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Text" => ValueType::Text,
            "Boolean" => ValueType::Boolean,
            "Integer32" => ValueType::Integer32,
            "Integer64" => ValueType::Integer64,
            "Float64" => ValueType::Float64,
            "Region" => ValueType::Region,
            other => ValueType::Named(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ValueType::Text => "Text",
            ValueType::Boolean => "Boolean",
            ValueType::Integer32 => "Integer32",
            ValueType::Integer64 => "Integer64",
            ValueType::Float64 => "Float64",
            ValueType::Region => "Region",
            ValueType::Named(name) => name,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved property value, or the empty sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Unset or unresolved. A known key may hold this value.
    Empty,
    Text(String),
    Boolean(bool),
    Integer32(i32),
    Integer64(i64),
    Float64(f64),
    Region(Region),
}

impl PropertyValue {
    /// Text value. The empty string is the empty sentinel.
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            PropertyValue::Empty
        } else {
            PropertyValue::Text(s)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PropertyValue::Empty)
    }

    /// Type carried by this value; `None` for the empty sentinel.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            PropertyValue::Empty => None,
            PropertyValue::Text(_) => Some(ValueType::Text),
            PropertyValue::Boolean(_) => Some(ValueType::Boolean),
            PropertyValue::Integer32(_) => Some(ValueType::Integer32),
            PropertyValue::Integer64(_) => Some(ValueType::Integer64),
            PropertyValue::Float64(_) => Some(ValueType::Float64),
            PropertyValue::Region(_) => Some(ValueType::Region),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Empty => Ok(()),
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Integer32(n) => write!(f, "{}", n),
            PropertyValue::Integer64(n) => write!(f, "{}", n),
            // Debug keeps the decimal point on whole numbers (3.0, not 3)
            PropertyValue::Float64(x) => write!(f, "{:?}", x),
            PropertyValue::Region(r) => write!(f, "{}", r),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Empty => serializer.serialize_none(),
            PropertyValue::Text(s) => serializer.serialize_str(s),
            PropertyValue::Boolean(b) => serializer.serialize_bool(*b),
            PropertyValue::Integer32(n) => serializer.serialize_i32(*n),
            PropertyValue::Integer64(n) => serializer.serialize_i64(*n),
            PropertyValue::Float64(x) => serializer.serialize_f64(*x),
            PropertyValue::Region(r) => serializer.serialize_str(r.name()),
        }
    }
}

/// A value as emitted by a format decoder, before resolution against the
/// registry. Line-oriented decoders only emit `Text`; JSON emits native
/// scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Null,
}

impl RawValue {
    /// The value type this raw value already has, if any. Non-finite floats
    /// have none and go through coercion.
    pub fn native_type(&self) -> Option<ValueType> {
        match self {
            RawValue::Text(_) => Some(ValueType::Text),
            RawValue::Boolean(_) => Some(ValueType::Boolean),
            RawValue::Integer(_) => Some(ValueType::Integer64),
            RawValue::Float(x) if x.is_finite() => Some(ValueType::Float64),
            RawValue::Float(_) | RawValue::Null => None,
        }
    }

    /// Use the raw value as a resolved value without re-parsing.
    pub fn into_value(self) -> PropertyValue {
        match self {
            RawValue::Text(s) => PropertyValue::text(s),
            RawValue::Boolean(b) => PropertyValue::Boolean(b),
            RawValue::Integer(n) => PropertyValue::Integer64(n),
            RawValue::Float(x) => PropertyValue::Float64(x),
            RawValue::Null => PropertyValue::Empty,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(s) => f.write_str(s),
            RawValue::Boolean(b) => write!(f, "{}", b),
            RawValue::Integer(n) => write!(f, "{}", n),
            RawValue::Float(x) => write!(f, "{:?}", x),
            RawValue::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Boolean(b)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Integer(n)
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Float(x)
    }
}
