//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use typed_props::config::{PropsConfig, ResourceConfig};
use typed_props::{PropertiesLoader, PropertySet};

/// Directory holding the fixture sources.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// `file://` location of a fixture.
#[allow(dead_code)]
pub fn fixture_url(name: &str) -> String {
    format!("file://{}", fixtures_dir().join(name).display())
}

/// Loader over the built-in registry whose `resource:` locations resolve to
/// the fixtures directory.
pub fn fixture_loader() -> PropertiesLoader {
    let config = PropsConfig {
        resources: ResourceConfig {
            root: Some(fixtures_dir()),
        },
        ..PropsConfig::default()
    };
    PropertiesLoader::from_config(&config).unwrap()
}

/// Render a set the way a sink prints it, `;`-terminated on one line.
#[allow(dead_code)]
pub fn render(set: &PropertySet) -> String {
    set.render().map(|p| format!("{};", p)).collect()
}

/// Start a mock backend serving fixed `(path, status, body)` routes; any
/// other path gets a 404. Returns the bound address.
#[allow(dead_code)]
pub async fn start_mock_backend(routes: Vec<(&'static str, u16, String)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let routes = routes.clone();
                    tokio::spawn(async move {
                        let mut request = Vec::new();
                        let mut buf = [0u8; 1024];
                        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                            match socket.read(&mut buf).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => request.extend_from_slice(&buf[..n]),
                            }
                        }

                        let head = String::from_utf8_lossy(&request);
                        let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                        let (status, body) = routes
                            .iter()
                            .find(|(p, _, _)| *p == path)
                            .map(|(_, status, body)| (*status, body.clone()))
                            .unwrap_or((404, "Not Found".to_string()));
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
