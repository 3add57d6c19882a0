//! A single resolved property.

use std::fmt;

use crate::properties::key::PropertyKey;
use crate::registry::{PropertyValue, ValueType};

/// An immutable key/value pair, tagged with the key's declared type for
/// display.
#[derive(Debug, Clone)]
pub struct Property {
    key: PropertyKey,
    value_type: ValueType,
    value: PropertyValue,
}

impl Property {
    pub fn new(key: impl Into<PropertyKey>, value_type: ValueType, value: PropertyValue) -> Self {
        Self {
            key: key.into(),
            value_type,
            value,
        }
    }

    /// The empty-sentinel property for `key`.
    pub fn empty(key: impl Into<PropertyKey>, value_type: ValueType) -> Self {
        Self::new(key, value_type, PropertyValue::Empty)
    }

    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Properties are equal when key and value are; the type tag follows from
/// the key.
impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

/// `key, declared-type, value`
impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.key, self.value_type, self.value)
    }
}
