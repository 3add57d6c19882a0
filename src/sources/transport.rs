//! Byte-stream acquisition for source locations.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use crate::config::schema::{HttpConfig, ResourceConfig};
use crate::error::TransportError;
use crate::sources::location::{Scheme, SourceLocation};

/// A readable byte stream. Dropping it releases the underlying handle.
pub type ByteStream = Box<dyn Read + Send>;

/// Opens a byte stream for a source location.
pub trait Transport: Send + Sync {
    fn open(&self, location: &SourceLocation) -> Result<ByteStream, TransportError>;
}

/// Reads `file://` locations from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileTransport;

impl Transport for FileTransport {
    fn open(&self, location: &SourceLocation) -> Result<ByteStream, TransportError> {
        match location.scheme() {
            Scheme::File(path) => Ok(Box::new(File::open(path)?)),
            other => Err(wrong_scheme(other)),
        }
    }
}

/// Fetches `http://` and `https://` locations with a blocking GET.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    timeout: Duration,
    user_agent: String,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl Transport for HttpTransport {
    fn open(&self, location: &SourceLocation) -> Result<ByteStream, TransportError> {
        let url = match location.scheme() {
            Scheme::Http(url) => url.clone(),
            other => return Err(wrong_scheme(other)),
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()?;
        let response = client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        tracing::debug!(location = %location, status = status.as_u16(), "HTTP source fetched");
        Ok(Box::new(response))
    }
}

/// Serves `resource:` locations from an in-memory table, then from a root
/// directory.
#[derive(Debug, Clone, Default)]
pub struct ResourceTransport {
    bundled: HashMap<String, Vec<u8>>,
    root: Option<PathBuf>,
}

impl ResourceTransport {
    pub fn new(config: &ResourceConfig) -> Self {
        Self {
            bundled: HashMap::new(),
            root: config.root.clone(),
        }
    }

    /// Bundle `content` under `name`, shadowing any file of that name.
    pub fn with_resource(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.bundled.insert(name.into(), content.into());
        self
    }
}

impl Transport for ResourceTransport {
    fn open(&self, location: &SourceLocation) -> Result<ByteStream, TransportError> {
        let name = match location.scheme() {
            Scheme::Resource(name) => name,
            other => return Err(wrong_scheme(other)),
        };

        if let Some(content) = self.bundled.get(name) {
            return Ok(Box::new(Cursor::new(content.clone())));
        }
        let root = self
            .root
            .as_ref()
            .filter(|_| stays_below_root(name))
            .ok_or_else(|| TransportError::ResourceNotFound(name.clone()))?;
        match File::open(root.join(name)) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(TransportError::ResourceNotFound(name.clone()))
            }
            Err(e) => Err(TransportError::Io(e)),
        }
    }
}

/// Resource names are relative paths without `..`, so they resolve inside
/// the root directory.
fn stays_below_root(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Dispatches each location to the transport for its scheme.
#[derive(Debug, Clone, Default)]
pub struct SchemeTransport {
    file: FileTransport,
    http: HttpTransport,
    resource: ResourceTransport,
}

impl SchemeTransport {
    pub fn new(http: HttpTransport, resource: ResourceTransport) -> Self {
        Self {
            file: FileTransport,
            http,
            resource,
        }
    }
}

impl Transport for SchemeTransport {
    fn open(&self, location: &SourceLocation) -> Result<ByteStream, TransportError> {
        match location.scheme() {
            Scheme::File(_) => self.file.open(location),
            Scheme::Http(_) => self.http.open(location),
            Scheme::Resource(_) => self.resource.open(location),
        }
    }
}

fn wrong_scheme(scheme: &Scheme) -> TransportError {
    TransportError::Io(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("transport cannot open {} locations", scheme.name()),
    ))
}
