//! Integration tests for the SPDX registry client
//!
//! Tests cover:
//! - License list parsing and detail lookup
//! - Exact identifier matching
//! - Registry and detail endpoint failures
//! - License file generation end to end

mod common;

use camino::Utf8Path;
use common::*;
use kickoff_core::config::NetworkConfig;
use kickoff_core::license::{self, LicenseLookup, SpdxRegistry, LICENSE_FILE};
use kickoff_core::Error;
use tempfile::TempDir;
use wiremock::MockServer;

fn registry(server: &MockServer) -> SpdxRegistry {
    SpdxRegistry::new(list_url(server), &NetworkConfig::default()).unwrap()
}

#[tokio::test]
async fn test_list_returns_entries() {
    let server = MockServer::start().await;
    mock_license_list(&server, &["Apache-2.0", "MIT", "ISC"]).await;

    let entries = registry(&server).list().await.unwrap();

    let ids: Vec<&str> = entries.iter().map(|e| e.license_id.as_str()).collect();
    assert_eq!(ids, ["Apache-2.0", "MIT", "ISC"]);
}

#[tokio::test]
async fn test_lookup_fetches_license_text() {
    let server = MockServer::start().await;
    mock_license_list(&server, &["MIT"]).await;
    mock_license_details(&server, "MIT", MIT_TEMPLATE).await;

    let text = registry(&server).lookup("MIT").await.unwrap();
    assert_eq!(text, MIT_TEMPLATE);
}

#[tokio::test]
async fn test_lookup_is_case_sensitive() {
    let server = MockServer::start().await;
    mock_license_list(&server, &["MIT"]).await;

    let result = registry(&server).lookup("mit").await;
    assert!(matches!(result, Err(Error::LicenseNotFound { id }) if id == "mit"));
}

#[tokio::test]
async fn test_unknown_license() {
    let server = MockServer::start().await;
    mock_license_list(&server, &["MIT", "ISC"]).await;

    let result = registry(&server).lookup("NOT-A-REAL-LICENSE").await;
    assert!(matches!(result, Err(Error::LicenseNotFound { .. })));
}

#[tokio::test]
async fn test_registry_server_error() {
    let server = MockServer::start().await;
    mock_failing_route(&server, LIST_PATH, 500).await;

    let result = registry(&server).lookup("MIT").await;
    assert!(matches!(result, Err(Error::RegistryUnavailable { .. })));
}

#[tokio::test]
async fn test_details_not_found() {
    let server = MockServer::start().await;
    mock_license_list(&server, &["MIT"]).await;
    mock_failing_route(&server, "/MIT.json", 404).await;

    let result = registry(&server).lookup("MIT").await;
    assert!(matches!(result, Err(Error::RegistryUnavailable { .. })));
}

#[tokio::test]
async fn test_registry_unreachable() {
    // Nothing listens on the discard port
    let registry = SpdxRegistry::new(
        "http://127.0.0.1:9/licenses.json",
        &NetworkConfig::default(),
    )
    .unwrap();

    let result = registry.lookup("MIT").await;
    assert!(matches!(result, Err(Error::RegistryUnavailable { .. })));
}

#[tokio::test]
async fn test_resolve_license_writes_rendered_text() {
    let server = MockServer::start().await;
    mock_license_list(&server, &["MIT"]).await;
    mock_license_details(&server, "MIT", MIT_TEMPLATE).await;

    let temp = TempDir::new().unwrap();
    let dir = Utf8Path::from_path(temp.path()).unwrap();

    license::resolve_license(&registry(&server), "MIT", "Jane Doe", dir)
        .await
        .unwrap();

    let text = read(dir, LICENSE_FILE);
    let year = license::current_year().to_string();
    assert!(text.contains(&format!("Copyright (c) {} Jane Doe", year)));
    assert!(!text.contains("<year>"));
    assert!(!text.contains("<copyright holders>"));
}

#[tokio::test]
async fn test_resolve_license_failure_removes_template_license() {
    let server = MockServer::start().await;
    mock_failing_route(&server, LIST_PATH, 503).await;

    let temp = TempDir::new().unwrap();
    let dir = Utf8Path::from_path(temp.path()).unwrap();
    std::fs::write(dir.join(LICENSE_FILE), "MIT License\n").unwrap();

    let result = license::resolve_license(&registry(&server), "MIT", "Jane Doe", dir).await;

    assert!(result.is_err());
    assert!(!dir.join(LICENSE_FILE).exists());
}
