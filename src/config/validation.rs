//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0, known log level)
//! - Check registry groups are complete and shaped alike
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PropsConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::PropsConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("http.timeout_secs must be greater than 0")]
    ZeroTimeout,

    #[error("http.user_agent must not be empty")]
    EmptyUserAgent,

    #[error("unknown log level [{0}]")]
    UnknownLogLevel(String),

    #[error("registry group {0} has no keys")]
    MissingKeys(usize),

    #[error("registry group {0} has no types")]
    MissingTypes(usize),

    #[error("registry group {group} declares {keys} keys but {types} types")]
    ShapeMismatch { group: usize, keys: usize, types: usize },

    #[error("registry group {0} contains an empty key")]
    EmptyKey(usize),
}

/// Check `config` and collect every problem found.
pub fn validate_config(config: &PropsConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.http.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.http.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }
    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    for (i, group) in config.registry.group.iter().enumerate() {
        match (&group.keys, &group.types) {
            (None, _) => errors.push(ValidationError::MissingKeys(i)),
            (_, None) => errors.push(ValidationError::MissingTypes(i)),
            (Some(keys), Some(types)) => {
                if keys.len() != types.len() {
                    errors.push(ValidationError::ShapeMismatch {
                        group: i,
                        keys: keys.len(),
                        types: types.len(),
                    });
                }
                if keys.iter().any(|k| k.is_empty()) {
                    errors.push(ValidationError::EmptyKey(i));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
