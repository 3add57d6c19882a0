//! Registration: closure expansion and override merge.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::observability::metrics;
use crate::properties::{Property, PropertySet};
use crate::registry::{RawValue, TypeRegistry};

/// Merges observed key/value pairs into a [`PropertySet`] against a shared
/// registry.
#[derive(Debug, Clone)]
pub struct RegistrationEngine {
    registry: Arc<TypeRegistry>,
}

impl RegistrationEngine {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Register `key` with `raw` in `set`.
    ///
    /// A raw value that already has the declared type is used as-is; anything
    /// else is coerced from its text form. The first registration of a key
    /// makes every member of its closure known (empty unless set). The key
    /// then ends with the new value, overriding any earlier one.
    pub fn add_property(&self, set: &mut PropertySet, key: &str, raw: RawValue) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidArgument("property key is empty".to_string()));
        }
        if raw == RawValue::Null {
            return Err(Error::InvalidArgument(format!(
                "value of property [{}] is null",
                key
            )));
        }

        let declared = self.registry.type_of(key);
        let value = if raw.native_type().as_ref() == Some(declared) {
            tracing::debug!(key, value_type = %declared, "Value already has declared type");
            raw.into_value()
        } else {
            self.registry.coerce(key, &raw.to_string())?
        };
        let property = Property::new(key, declared.clone(), value);

        if !set.contains(key) {
            if let Some(closure) = self.registry.closure_of(key) {
                for member in closure.iter() {
                    let placeholder = Property::empty(
                        member.clone(),
                        self.registry.type_of(member.as_str()).clone(),
                    );
                    if set.insert_if_absent(placeholder) {
                        tracing::debug!(key = %member, trigger = key, "Closure property registered");
                    }
                }
            }
        }

        tracing::debug!(property = %property, "Property registered");
        set.upsert(property);
        metrics::record_property_registered();
        Ok(())
    }
}
