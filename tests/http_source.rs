//! Loads over HTTP against a mock backend.

use std::fs;

use typed_props::error::TransportError;
use typed_props::{Error, PropertySet};

mod common;

async fn load(sources: Vec<String>) -> Result<PropertySet, Error> {
    // the HTTP transport blocks, keep it off the async workers
    tokio::task::spawn_blocking(move || common::fixture_loader().load(&sources))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_http_json_source() {
    let body = fs::read_to_string(common::fixtures_dir().join("config.json")).unwrap();
    let addr = common::start_mock_backend(vec![("/app/config.json", 200, body)]).await;

    let set = load(vec![format!("http://{}/app/config.json", addr)])
        .await
        .unwrap();
    assert_eq!(set.integer("job.timeout"), Some(3600));
    assert_eq!(set.float("score.factor"), Some(2.4));
    assert!(set.is_valid());
}

#[tokio::test]
async fn test_http_overrides_file() {
    let addr = common::start_mock_backend(vec![(
        "/override.properties",
        200,
        "JDBC_PASSWORD=rotated\n".to_string(),
    )])
    .await;

    let set = load(vec![
        common::fixture_url("jdbc.properties"),
        format!("http://{}/override.properties", addr),
    ])
    .await
    .unwrap();
    assert_eq!(set.text("JDBC_PASSWORD"), Some("rotated"));
    assert_eq!(set.text("JDBC_USERNAME"), Some("username123"));
}

#[tokio::test]
async fn test_http_error_status_aborts() {
    let addr = common::start_mock_backend(vec![(
        "/down.json",
        503,
        "Service Unavailable".to_string(),
    )])
    .await;

    let err = load(vec![
        "resource:aws.json".to_string(),
        format!("http://{}/down.json", addr),
    ])
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Transport {
            source: TransportError::Status(503),
            ..
        }
    ));
}

#[tokio::test]
async fn test_http_malformed_body_is_parse_error() {
    let addr = common::start_mock_backend(vec![("/bad.json", 200, "{\"a\":".to_string())]).await;

    let err = load(vec![format!("http://{}/bad.json", addr)])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}
