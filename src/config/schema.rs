//! Configuration schema definitions.
//!
//! This module defines the configuration of the loader itself: transports,
//! logging and the registry tables. All types derive Serde traits for
//! deserialization from a TOML file.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::registry::TypeRegistry;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PropsConfig {
    /// HTTP transport settings.
    pub http: HttpConfig,

    /// Bundled resource settings.
    pub resources: ResourceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Registry tables; the built-in registry when empty.
    pub registry: RegistryConfig,
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("typed-props/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Bundled resource configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ResourceConfig {
    /// Directory that backs `resource:` locations.
    pub root: Option<PathBuf>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Registry declaration: one entry per closure.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    pub group: Vec<GroupConfig>,
}

/// One closure: its keys and, position by position, their types.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GroupConfig {
    pub keys: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
}

impl RegistryConfig {
    /// Build the declared registry, or hand out the built-in one when no
    /// group is declared.
    pub fn build(&self) -> Result<Arc<TypeRegistry>> {
        if self.group.is_empty() {
            return Ok(TypeRegistry::builtin());
        }

        let mut key_groups = Vec::with_capacity(self.group.len());
        let mut type_groups = Vec::with_capacity(self.group.len());
        for (i, group) in self.group.iter().enumerate() {
            let keys = group
                .keys
                .as_ref()
                .ok_or_else(|| Error::Configuration(format!("registry group {} has no keys", i)))?;
            let types = group
                .types
                .as_ref()
                .ok_or_else(|| Error::Configuration(format!("registry group {} has no types", i)))?;
            key_groups.push(keys.clone());
            type_groups.push(types.clone());
        }

        Ok(Arc::new(TypeRegistry::from_tables(&key_groups, &type_groups)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ValueType;

    #[test]
    fn test_defaults() {
        let config = PropsConfig::default();
        assert_eq!(config.http.timeout_secs, 30);
        assert!(config.http.user_agent.starts_with("typed-props/"));
        assert!(config.resources.root.is_none());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_empty_registry_is_builtin() {
        let registry = RegistryConfig::default().build().unwrap();
        assert!(Arc::ptr_eq(&registry, &TypeRegistry::builtin()));
    }

    #[test]
    fn test_declared_registry() {
        let config: PropsConfig = toml::from_str(
            r#"
            [[registry.group]]
            keys = ["db.url", "db.pool_size"]
            types = ["Text", "Integer32"]
            "#,
        )
        .unwrap();
        let registry = config.registry.build().unwrap();
        assert_eq!(registry.type_of("db.pool_size"), &ValueType::Integer32);
        assert_eq!(registry.closure_of("DB.URL").unwrap().len(), 2);
    }

    #[test]
    fn test_group_without_types() {
        let config: PropsConfig = toml::from_str(
            r#"
            [[registry.group]]
            keys = ["db.url"]
            "#,
        )
        .unwrap();
        let err = config.registry.build().unwrap_err();
        assert!(matches!(err, Error::Configuration(ref m) if m.contains("no types")));
    }
}
