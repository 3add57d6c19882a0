//! The type/closure registry.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::observability::metrics;
use crate::properties::PropertyKey;
use crate::registry::builtin::{BUILTIN_KEYS, BUILTIN_TYPES};
use crate::registry::coerce::{builtin_table, Coercer, CoercionTable};
use crate::registry::value::{PropertyValue, ValueType};

static DEFAULT_TYPE: ValueType = ValueType::Text;

/// Keys that must co-exist in a property set once any one of them is
/// registered. Members are sorted case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClosureClass(BTreeSet<PropertyKey>);

impl ClosureClass {
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(&PropertyKey::new(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyKey> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClosureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "]")
    }
}

/// Read-only key → type and key → closure lookup, plus value coercion.
///
/// Built once from parallel tables of key groups and type groups, then shared
/// (typically as `Arc<TypeRegistry>`) by every registration and load.
#[derive(Debug)]
pub struct TypeRegistry {
    closures: Vec<ClosureClass>,
    closure_index: HashMap<PropertyKey, usize>,
    types: HashMap<PropertyKey, ValueType>,
    coercions: CoercionTable,
}

impl TypeRegistry {
    /// Start building a registry with the built-in coercion rules.
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    /// Build a registry from parallel key and type tables, using the built-in
    /// coercion rules.
    pub fn from_tables<G, S>(key_groups: &[G], type_groups: &[G]) -> Result<Self>
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        Self::builder().build(key_groups, type_groups)
    }

    /// The process-wide default registry, built on first use.
    pub fn builtin() -> Arc<TypeRegistry> {
        static BUILTIN: OnceLock<Arc<TypeRegistry>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                let registry = TypeRegistry::from_tables(BUILTIN_KEYS, BUILTIN_TYPES)
                    .expect("built-in registry tables are well-formed");
                Arc::new(registry)
            })
            .clone()
    }

    /// Declared type of `key`, `Text` if the key is not registered.
    pub fn type_of(&self, key: &str) -> &ValueType {
        self.types
            .get(&PropertyKey::new(key))
            .unwrap_or(&DEFAULT_TYPE)
    }

    /// Closure containing `key`, or `None` when the key belongs to no
    /// declared group.
    pub fn closure_of(&self, key: &str) -> Option<&ClosureClass> {
        self.closure_index
            .get(&PropertyKey::new(key))
            .map(|&i| &self.closures[i])
    }

    /// Registered keys, sorted case-insensitively.
    pub fn keys(&self) -> Vec<&PropertyKey> {
        let mut keys: Vec<&PropertyKey> = self.types.keys().collect();
        keys.sort();
        keys
    }

    /// Convert `raw` to the declared type of `key`.
    ///
    /// A value that does not parse yields [`PropertyValue::Empty`] and a
    /// warning. A declared type without a coercion rule is an
    /// [`Error::UnsupportedType`].
    pub fn coerce(&self, key: &str, raw: &str) -> Result<PropertyValue> {
        let value_type = self.type_of(key);
        let rule = self
            .coercions
            .get(value_type)
            .ok_or_else(|| Error::UnsupportedType {
                key: key.to_string(),
                type_name: value_type.to_string(),
            })?;

        match rule(raw) {
            Some(value) => {
                tracing::debug!(key, value_type = %value_type, value = %value, "Value coerced");
                Ok(value)
            }
            None => {
                tracing::warn!(
                    key,
                    value_type = %value_type,
                    raw,
                    "Value does not match declared type, storing empty value"
                );
                metrics::record_coercion_failure(value_type.name());
                Ok(PropertyValue::Empty)
            }
        }
    }
}

impl fmt::Display for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.keys() {
            write!(f, "{}:", key)?;
            if let Some(closure) = self.closure_of(key.as_str()) {
                for member in closure.iter() {
                    write!(f, "({},{})", member, self.type_of(member.as_str()))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builder for [`TypeRegistry`] that allows extra coercion rules.
#[derive(Debug)]
pub struct TypeRegistryBuilder {
    coercions: CoercionTable,
}

impl Default for TypeRegistryBuilder {
    fn default() -> Self {
        Self {
            coercions: builtin_table(),
        }
    }
}

impl TypeRegistryBuilder {
    /// Register (or replace) the coercion rule for a type name.
    pub fn with_coercion(mut self, type_name: &str, coercer: Coercer) -> Self {
        self.coercions.insert(ValueType::from_name(type_name), coercer);
        self
    }

    /// Validate the tables and build the registry.
    ///
    /// Fails with [`Error::Configuration`] when the outer lengths differ, when
    /// a group has a different number of keys and types, or when a key is
    /// empty.
    pub fn build<G, S>(self, key_groups: &[G], type_groups: &[G]) -> Result<TypeRegistry>
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        if key_groups.len() != type_groups.len() {
            return Err(Error::Configuration(format!(
                "incompatible lengths of key groups ({}) and type groups ({})",
                key_groups.len(),
                type_groups.len()
            )));
        }
        let mut seen = HashSet::new();
        for (i, (keys, types)) in key_groups.iter().zip(type_groups).enumerate() {
            let (keys, types) = (keys.as_ref(), types.as_ref());
            if keys.len() != types.len() {
                return Err(Error::Configuration(format!(
                    "group {} declares {} keys but {} types",
                    i,
                    keys.len(),
                    types.len()
                )));
            }
            if keys.iter().any(|k| k.as_ref().is_empty()) {
                return Err(Error::Configuration(format!("empty key in group {}", i)));
            }
            // each key belongs to exactly one closure
            for key in keys {
                if !seen.insert(PropertyKey::new(key.as_ref())) {
                    return Err(Error::Configuration(format!(
                        "key [{}] in group {} is already declared",
                        key.as_ref(),
                        i
                    )));
                }
            }
        }

        let mut registry = TypeRegistry {
            closures: Vec::with_capacity(key_groups.len()),
            closure_index: HashMap::new(),
            types: HashMap::new(),
            coercions: self.coercions,
        };

        for (keys, types) in key_groups.iter().zip(type_groups) {
            let group = registry.closures.len();
            let closure: BTreeSet<PropertyKey> = keys
                .as_ref()
                .iter()
                .map(|k| PropertyKey::new(k.as_ref()))
                .collect();
            registry.closures.push(ClosureClass(closure));

            for (key, type_name) in keys.as_ref().iter().zip(types.as_ref()) {
                let key = PropertyKey::new(key.as_ref());
                registry.closure_index.insert(key.clone(), group);
                registry.types.insert(key, ValueType::from_name(type_name.as_ref()));
            }
        }

        tracing::debug!(
            groups = registry.closures.len(),
            keys = registry.types.len(),
            "Type registry built"
        );
        Ok(registry)
    }
}
