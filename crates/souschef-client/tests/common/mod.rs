//! Shared helpers for the Kitchen API integration tests.

#![allow(dead_code)]

use souschef_client::{ClientConfig, KitchenClient};
use wiremock::MockServer;

pub const TEST_EMAIL: &str = "chef@example.org";
pub const TEST_KEY: &str = "test-api-key";

/// Base URL for the mock Kitchen, with the `/api/` prefix the real service uses.
pub fn api_base(server: &MockServer) -> String {
    format!("{}/api/", server.uri())
}

/// Client with no credentials pointed at the mock server.
pub fn anonymous_client(server: &MockServer) -> KitchenClient {
    let config = ClientConfig::default().with_base_url(api_base(server));
    KitchenClient::new(config).expect("Failed to create client")
}

/// Client carrying the test credentials.
pub fn authenticated_client(server: &MockServer) -> KitchenClient {
    let config = ClientConfig::default()
        .with_base_url(api_base(server))
        .with_credentials(TEST_EMAIL, TEST_KEY);
    KitchenClient::new(config).expect("Failed to create client")
}
