//! Mock SPDX registry helpers

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the license list on the mock registry
pub const LIST_PATH: &str = "/licenses.json";

/// SPDX-style MIT template text
pub const MIT_TEMPLATE: &str = "MIT License\n\nCopyright (c) <year> <copyright holders>\n\nPermission is hereby granted, free of charge, to any person obtaining a copy\nof this software...\n";

/// URL of the license list on `server`
pub fn list_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), LIST_PATH)
}

/// Serve a wrapped license list naming `ids`, each with a detail document at `/<id>.json`
pub async fn mock_license_list(server: &MockServer, ids: &[&str]) {
    let licenses: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "reference": format!("https://spdx.org/licenses/{}.html", id),
                "isDeprecatedLicenseId": false,
                "detailsUrl": format!("{}/{}.json", server.uri(), id),
                "name": id,
                "licenseId": id,
                "isOsiApproved": true
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "licenseListVersion": "3.24",
            "licenses": licenses
        })))
        .mount(server)
        .await;
}

/// Serve the detail document for `id`
pub async fn mock_license_details(server: &MockServer, id: &str, text: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{}.json", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "isDeprecatedLicenseId": false,
            "licenseText": text,
            "name": id,
            "licenseId": id
        })))
        .mount(server)
        .await;
}

/// Make every request for `route` fail with `status`
pub async fn mock_failing_route(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
