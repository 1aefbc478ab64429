/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for wallex-adapter tests

use serde_json::{Value, json};
use wallex_adapter::{ClientConfig, WallexClient};
use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, without an api key
#[allow(dead_code)]
pub fn public_client(server: &MockServer) -> WallexClient {
    WallexClient::with_config(ClientConfig::default().with_base_url(server.uri()))
        .expect("client init")
}

/// Client pointed at the mock server, carrying [`TEST_API_KEY`]
#[allow(dead_code)]
pub fn signed_client(server: &MockServer, detailed: bool) -> WallexClient {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_api_key(TEST_API_KEY)
        .with_detailed_errors(detailed);
    WallexClient::with_config(config).expect("client init")
}

/// Standard success envelope
#[allow(dead_code)]
pub fn envelope(result: Value) -> Value {
    json!({
        "status": true,
        "code": 200,
        "message": "The operation was successful",
        "result": result
    })
}

#[allow(dead_code)]
pub fn balances_json() -> Value {
    envelope(json!({
        "balances": {
            "USDT": {
                "asset": "USDT",
                "faName": "تتر",
                "fiat": false,
                "value": "120.50",
                "locked": "20.50"
            },
            "TMN": {
                "asset": "TMN",
                "faName": "تومان",
                "fiat": true,
                "value": "1000000",
                "locked": "0"
            }
        }
    }))
}
