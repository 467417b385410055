//! HTTP parameter source against a mock store.

use url::Url;

use prometheus_config_reloader::source::{HttpParameterSource, ParameterError, ParameterSource};

mod common;

#[tokio::test]
async fn returns_body_on_success() {
    let addr = common::start_mock_store(200, "ns1,ns2").await;
    let source = HttpParameterSource::new(Url::parse(&format!("http://{}", addr)).unwrap());

    let value = source.get("ECS-ServiceDiscovery-Namespaces").await.unwrap();

    assert_eq!(value, "ns1,ns2");
}

#[tokio::test]
async fn non_success_status_is_not_available() {
    let addr = common::start_mock_store(404, "no such parameter").await;
    let source = HttpParameterSource::new(Url::parse(&format!("http://{}", addr)).unwrap());

    let err = source.get("Missing-Parameter").await.unwrap_err();

    match err {
        ParameterError::NotAvailable { name, status } => {
            assert_eq!(name, "Missing-Parameter");
            assert_eq!(status, 404);
        }
        other => panic!("expected NotAvailable, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_store_is_a_transport_error() {
    // Nothing listens on this port.
    let source = HttpParameterSource::new(Url::parse("http://127.0.0.1:1/").unwrap());

    let err = source.get("X").await.unwrap_err();

    assert!(matches!(err, ParameterError::Transport(_)));
}
