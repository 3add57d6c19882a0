//! Load orchestration: ordered sources into one property set.

use std::io::Read;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::schema::PropsConfig;
use crate::error::{Error, Result, TransportError};
use crate::loading::engine::RegistrationEngine;
use crate::observability::metrics;
use crate::properties::PropertySet;
use crate::registry::TypeRegistry;
use crate::sources::{
    decoder_for, HttpTransport, ResourceTransport, SchemeTransport, SourceLocation, Transport,
};

/// Loads an ordered list of sources into a fresh [`PropertySet`].
///
/// Later sources override earlier ones key by key. Any failure aborts the
/// whole load. A loader is `Send + Sync`; each call builds its own set, so
/// concurrent loads do not interfere.
pub struct PropertiesLoader {
    engine: RegistrationEngine,
    transport: Box<dyn Transport>,
}

impl PropertiesLoader {
    /// Loader over `registry` with default file, HTTP and resource transports.
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self {
            engine: RegistrationEngine::new(registry),
            transport: Box::new(SchemeTransport::default()),
        }
    }

    /// Loader built from tool configuration: registry tables, HTTP settings
    /// and resource root.
    pub fn from_config(config: &PropsConfig) -> Result<Self> {
        let registry = config.registry.build()?;
        let transport = SchemeTransport::new(
            HttpTransport::new(&config.http),
            ResourceTransport::new(&config.resources),
        );
        Ok(Self::new(registry).with_transport(transport))
    }

    /// Replace the transport used to open every source.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    pub fn engine(&self) -> &RegistrationEngine {
        &self.engine
    }

    /// Load `sources` in order.
    ///
    /// Every location is parsed before any is read, so an unsupported scheme
    /// or suffix fails without touching the others.
    pub fn load<S: AsRef<str>>(&self, sources: &[S]) -> Result<PropertySet> {
        let load_id = Uuid::new_v4();
        let span = tracing::info_span!("load", %load_id, sources = sources.len());
        let _enter = span.enter();

        let locations = sources
            .iter()
            .map(|s| SourceLocation::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|_| metrics::record_load_failure())?;

        let mut set = PropertySet::new();
        for location in &locations {
            if let Err(e) = self.load_source(&mut set, location) {
                tracing::error!(location = %location, error = %e, "Load aborted");
                metrics::record_load_failure();
                return Err(e);
            }
        }

        tracing::info!(
            known = set.len(),
            missing = set.missing_keys().len(),
            "Properties loaded"
        );
        Ok(set)
    }

    fn load_source(&self, set: &mut PropertySet, location: &SourceLocation) -> Result<()> {
        tracing::info!(
            location = %location,
            scheme = location.scheme().name(),
            format = location.format().name(),
            "Loading source"
        );

        let content = {
            let mut stream = self
                .transport
                .open(location)
                .map_err(|source| transport_error(location, source))?;
            let mut content = Vec::new();
            stream
                .read_to_end(&mut content)
                .map_err(|e| transport_error(location, TransportError::Io(e)))?;
            content
        };

        let entries = decoder_for(location.format())
            .decode(&content)
            .map_err(|source| Error::Parse {
                location: location.to_string(),
                source,
            })?;

        let count = entries.len();
        for (key, raw) in entries {
            tracing::debug!(key = %key, raw = %raw, "Property to be added");
            self.engine.add_property(set, &key, raw)?;
        }

        metrics::record_source_loaded(location.scheme().name(), location.format().name());
        tracing::info!(location = %location, entries = count, "Source loaded");
        Ok(())
    }
}

fn transport_error(location: &SourceLocation, source: TransportError) -> Error {
    Error::Transport {
        location: location.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> PropertiesLoader {
        let resources = ResourceTransport::default()
            .with_resource("jdbc.properties", "JDBC_URL=jdbc:mysql://localhost/test\nJDBC_DRIVER=com.mysql.jdbc.Driver\n")
            .with_resource("override.json", r#"{"JDBC_URL": "jdbc:h2:mem", "job.timeout": 60}"#)
            .with_resource("broken.json", "{ nope");
        PropertiesLoader::new(TypeRegistry::builtin())
            .with_transport(SchemeTransport::new(HttpTransport::default(), resources))
    }

    #[test]
    fn test_later_source_overrides() {
        let set = loader()
            .load(&["resource:jdbc.properties", "resource:override.json"])
            .unwrap();
        assert_eq!(set.text("JDBC_URL"), Some("jdbc:h2:mem"));
        assert_eq!(set.text("JDBC_DRIVER"), Some("com.mysql.jdbc.Driver"));
        assert_eq!(set.integer("job.timeout"), Some(60));
        assert_eq!(set.missing_keys(), ["JDBC_PASSWORD", "JDBC_USERNAME"]);
    }

    #[test]
    fn test_empty_source_list() {
        let sources: [&str; 0] = [];
        let set = loader().load(&sources).unwrap();
        assert!(set.is_empty());
        assert!(set.is_valid());
    }

    #[test]
    fn test_parse_failure_aborts() {
        let err = loader()
            .load(&["resource:jdbc.properties", "resource:broken.json"])
            .unwrap_err();
        assert!(matches!(err, Error::Parse { ref location, .. } if location == "resource:broken.json"));
    }

    #[test]
    fn test_transport_failure_aborts() {
        let err = loader().load(&["resource:absent.properties"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Transport {
                source: TransportError::ResourceNotFound(_),
                ..
            }
        ));
    }

    #[test]
    fn test_unsupported_location_fails_first() {
        let err = loader()
            .load(&["resource:jdbc.properties", "resource:app.yaml"])
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_loader_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PropertiesLoader>();
        assert_send_sync::<TypeRegistry>();

        let loader = Arc::new(loader());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let loader = Arc::clone(&loader);
                std::thread::spawn(move || loader.load(&["resource:jdbc.properties"]).unwrap())
            })
            .collect();
        for handle in handles {
            let set = handle.join().unwrap();
            assert_eq!(set.len(), 4);
        }
    }
}
