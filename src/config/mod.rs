//! Configuration of the loader itself.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PropsConfig (validated, immutable)
//!     → RegistryConfig::build → Arc<TypeRegistry>
//!     → PropertiesLoader::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - No registry groups means the built-in registry

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::PropsConfig;
pub use schema::{GroupConfig, HttpConfig, ObservabilityConfig, RegistryConfig, ResourceConfig};
