//! Source location parsing: scheme by prefix, format by suffix.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

pub const FILE_PREFIX: &str = "file://";
pub const HTTP_PREFIX: &str = "http://";
pub const HTTPS_PREFIX: &str = "https://";
pub const RESOURCE_PREFIX: &str = "resource:";

/// Where a source is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    /// Local file path.
    File(PathBuf),
    /// HTTP or HTTPS endpoint.
    Http(Url),
    /// Bundled resource name.
    Resource(String),
}

impl Scheme {
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::File(_) => "file",
            Scheme::Http(_) => "http",
            Scheme::Resource(_) => "resource",
        }
    }
}

/// How a source's content is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Line-oriented `key=value` text (`.properties`).
    Properties,
    /// A JSON object (`.json`).
    Json,
}

impl Format {
    fn from_path(path: &str) -> Option<Format> {
        if path.ends_with(".properties") {
            Some(Format::Properties)
        } else if path.ends_with(".json") {
            Some(Format::Json)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Properties => "properties",
            Format::Json => "json",
        }
    }
}

/// A parsed source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    raw: String,
    scheme: Scheme,
    format: Format,
}

impl SourceLocation {
    /// Parse a location string such as `file:///etc/app/jdbc.properties`,
    /// `https://config/app.json` or `resource:aws.json`.
    ///
    /// An unrecognized scheme or suffix is an [`Error::Configuration`].
    pub fn parse(location: &str) -> Result<Self> {
        let (scheme, path) = if let Some(path) = location.strip_prefix(FILE_PREFIX) {
            (Scheme::File(PathBuf::from(path)), path.to_string())
        } else if location.starts_with(HTTP_PREFIX) || location.starts_with(HTTPS_PREFIX) {
            let url = Url::parse(location).map_err(|e| {
                Error::Configuration(format!("invalid URL [{}]: {}", location, e))
            })?;
            let path = url.path().to_string();
            (Scheme::Http(url), path)
        } else if let Some(name) = location.strip_prefix(RESOURCE_PREFIX) {
            (Scheme::Resource(name.to_string()), name.to_string())
        } else {
            return Err(Error::Configuration(format!(
                "unsupported source scheme of [{}]",
                location
            )));
        };

        let format = Format::from_path(&path).ok_or_else(|| {
            Error::Configuration(format!("unsupported property file type of [{}]", location))
        })?;

        Ok(Self {
            raw: location.to_string(),
            scheme,
            format,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
