//! Error taxonomy for registry construction, registration and loading.
//!
//! # Design Decisions
//! - Two lanes: everything in [`Error`] aborts the enclosing call, while a
//!   value that does not parse as its declared type is absorbed by the
//!   registry (empty sentinel + warning) and never shows up here
//! - Transport and parse failures keep the underlying cause as `source`

use thiserror::Error;

/// Errors surfaced by the registry, the registration engine and the loader.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed registry tables or an unrecognized source location.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A declared value type has no coercion rule.
    #[error("property type [{type_name}] of key [{key}] is not supported")]
    UnsupportedType { key: String, type_name: String },

    /// A required argument of a public operation is absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A source could not be opened or read.
    #[error("cannot read source [{location}]: {source}")]
    Transport {
        location: String,
        #[source]
        source: TransportError,
    },

    /// A source was read but its content could not be decoded.
    #[error("cannot decode source [{location}]: {source}")]
    Parse {
        location: String,
        #[source]
        source: ParseError,
    },
}

/// Result type for property operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to acquire a byte stream for a source location.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("resource [{0}] can not be accessed")]
    ResourceNotFound(String),
}

/// Malformed content in a decoded source.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level JSON value must be an object, found {0}")]
    NotAnObject(&'static str),

    #[error("content is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedType {
            key: "JDBC_URL".into(),
            type_name: "Url".into(),
        };
        assert_eq!(
            err.to_string(),
            "property type [Url] of key [JDBC_URL] is not supported"
        );

        let err = Error::Transport {
            location: "resource:missing.json".into(),
            source: TransportError::ResourceNotFound("missing.json".into()),
        };
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_transport_error_keeps_cause() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::Transport {
            location: "file:///nope".into(),
            source: TransportError::from(io),
        };
        let cause = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert_eq!(cause, "I/O error: gone");
    }
}
