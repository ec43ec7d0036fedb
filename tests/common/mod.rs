//! Shared helpers for the HTTP integration tests.

use kavenegar::{ApiKey, KavenegarClient, Sender};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const API_KEY: &str = "TEST-KEY";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at `server` with a default sender line.
pub fn client_for(server: &MockServer) -> KavenegarClient {
    KavenegarClient::builder(ApiKey::new(API_KEY).unwrap())
        .endpoint(format!("{}/v1/", server.uri()))
        .sender(Sender::new("10004346").unwrap())
        .build()
        .unwrap()
}

/// `/v1/{API_KEY}/{base}/{method}.json/`
pub fn method_path(base: &str, method: &str) -> String {
    format!("/v1/{API_KEY}/{base}/{method}.json/")
}

pub fn envelope(status: i32, message: &str, entries: Value) -> Value {
    json!({
        "return": { "status": status, "message": message },
        "entries": entries,
    })
}

#[allow(dead_code)]
pub fn message_entry(message_id: u64, receptor: &str) -> Value {
    json!({
        "messageid": message_id,
        "message": "hello",
        "status": 1,
        "statustext": "در صف ارسال",
        "sender": "10004346",
        "receptor": receptor,
        "date": 1356619709,
        "cost": 120,
    })
}
