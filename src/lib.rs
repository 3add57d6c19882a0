//! Typed configuration properties.
//!
//! Loads configuration values from files, HTTP endpoints and bundled
//! resources into a validated, queryable [`PropertySet`]. A
//! [`TypeRegistry`] declares each key's value type and the closure of keys
//! that must co-exist with it; the [`RegistrationEngine`] merges observed
//! pairs into the set, and the [`PropertiesLoader`] sequences sources.

pub mod config;
pub mod error;
pub mod loading;
pub mod observability;
pub mod properties;
pub mod registry;
pub mod sink;
pub mod sources;

pub use error::{Error, Result};
pub use loading::{PropertiesLoader, RegistrationEngine};
pub use properties::{Property, PropertyKey, PropertySet};
pub use registry::{PropertyValue, RawValue, TypeRegistry, ValueType};
