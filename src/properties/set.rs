//! Ordered container of resolved properties.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::properties::key::PropertyKey;
use crate::properties::property::Property;
use crate::registry::{PropertyValue, Region};

/// Properties resolved by a load, ordered case-insensitively by key.
///
/// A key is *known* once it is present, whatever its value; it is *missing*
/// when its value is the empty sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet {
    properties: BTreeMap<PropertyKey, Property>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Property registered under `key`, `None` if the key is not known.
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.properties.get(&PropertyKey::new(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(&PropertyKey::new(key))
    }

    /// Resolved value of `key`; the empty sentinel is returned as such.
    pub fn value(&self, key: &str) -> Option<&PropertyValue> {
        self.get(key).map(Property::value)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.value(key)? {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.value(key)? {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer value of either width.
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.value(key)? {
            PropertyValue::Integer32(n) => Some(i64::from(*n)),
            PropertyValue::Integer64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        match self.value(key)? {
            PropertyValue::Float64(x) => Some(*x),
            _ => None,
        }
    }

    pub fn region(&self, key: &str) -> Option<Region> {
        match self.value(key)? {
            PropertyValue::Region(r) => Some(*r),
            _ => None,
        }
    }

    /// All known keys, sorted case-insensitively.
    pub fn known_keys(&self) -> Vec<&PropertyKey> {
        self.properties.keys().collect()
    }

    /// Known keys whose value is the empty sentinel.
    pub fn missing_keys(&self) -> Vec<&PropertyKey> {
        self.properties
            .iter()
            .filter(|(_, p)| p.is_empty())
            .map(|(k, _)| k)
            .collect()
    }

    /// True when no known key is missing.
    pub fn is_valid(&self) -> bool {
        self.properties.values().all(|p| !p.is_empty())
    }

    /// Reset every known key to the empty sentinel. Keys stay known.
    pub fn clear(&mut self) {
        for (key, property) in self.properties.iter_mut() {
            *property = Property::empty(key.clone(), property.value_type().clone());
        }
    }

    /// Properties in key order, for display.
    pub fn render(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &Property)> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Insert `property` unless its key is already known. Returns whether it
    /// was inserted.
    pub(crate) fn insert_if_absent(&mut self, property: Property) -> bool {
        if self.properties.contains_key(property.key()) {
            return false;
        }
        self.properties.insert(property.key().clone(), property);
        true
    }

    /// Insert or overwrite the entry for the property's key. An existing
    /// entry keeps the key spelling it was first registered with.
    pub(crate) fn upsert(&mut self, property: Property) -> Option<Property> {
        match self.properties.get_mut(property.key()) {
            Some(slot) => Some(std::mem::replace(slot, property)),
            None => {
                self.properties.insert(property.key().clone(), property);
                None
            }
        }
    }
}

/// Serializes as a map of key to value, with `null` for missing keys.
impl Serialize for PropertySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (key, property) in &self.properties {
            map.serialize_entry(key.as_str(), property.value())?;
        }
        map.end()
    }
}
