mod common;

use common::{client_for, envelope, message_entry, method_path, setup_mock_server};
use kavenegar::{
    AccountConfigUpdate, ApiKey, BulkSend, BulkSendOptions, KavenegarClient, KavenegarError,
    MessageId, MessageIds, MessageText, OneOrMany, Receptor, SendMessage, TemplateName,
    VerifyLookup, VerifyToken,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn receptor(raw: &str) -> Receptor {
    Receptor::new(raw).unwrap()
}

#[tokio::test]
async fn send_posts_form_to_method_url_and_returns_entries() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(method_path("sms", "send")))
        .and(header("accept", "application/json"))
        .and(header("charset", "utf-8"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("receptor=09123456789"))
        .and(body_string_contains("sender=10004346"))
        .and(body_string_contains("message=hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            "تایید شد",
            json!([message_entry(8792343, "09123456789")]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = client
        .send(SendMessage::to(
            receptor("09123456789"),
            MessageText::new("hello").unwrap(),
        ))
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message_id, MessageId::new(8_792_343));
    assert_eq!(entries[0].receptor.as_deref(), Some("09123456789"));
}

#[tokio::test]
async fn send_omits_unset_options_from_the_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(method_path("sms", "send")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            "ok",
            json!([message_entry(1, "09123456789")]),
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .send(SendMessage::to(
            receptor("09123456789"),
            MessageText::new("hello").unwrap(),
        ))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(!body.contains("date="), "body: {body}");
    assert!(!body.contains("type="), "body: {body}");
    assert!(!body.contains("localid="), "body: {body}");
}

#[tokio::test]
async fn bulk_send_pads_scalars_to_receptor_count() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(method_path("sms", "sendarray")))
        // ["10004346","10004346"]
        .and(body_string_contains(
            "sender=%5B%2210004346%22%2C%2210004346%22%5D",
        ))
        // ["hi","hi"]
        .and(body_string_contains("message=%5B%22hi%22%2C%22hi%22%5D"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            "ok",
            json!([
                message_entry(1, "09120000001"),
                message_entry(2, "09120000002"),
            ]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = BulkSend::new(
        vec![receptor("09120000001"), receptor("09120000002")],
        OneOrMany::One(MessageText::new("hi").unwrap()),
        BulkSendOptions::default(),
    )
    .unwrap();

    let entries = client.bulk_send(request).await.unwrap();
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn api_key_is_escaped_in_the_path() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/a%2Fb/account/info.json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            "ok",
            json!({ "remaincredit": 1000, "expiredate": 1893456000, "type": "Master" }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = KavenegarClient::builder(ApiKey::new("a/b").unwrap())
        .endpoint(format!("{}/v1/", server.uri()))
        .build()
        .unwrap();

    let info = client.account_info().await.unwrap();
    assert_eq!(info.remain_credit, Some(1000));
}

#[tokio::test]
async fn envelope_failure_is_an_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(method_path("sms", "status")))
        .respond_with(ResponseTemplate::new(400).set_body_json(envelope(
            411,
            "دریافت کننده نامعتبر است",
            serde_json::Value::Null,
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .message_status(MessageIds::one(MessageId::new(1)))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "[411] دریافت کننده نامعتبر است");
    assert!(matches!(err, KavenegarError::Api { .. }));
}

#[tokio::test]
async fn non_json_error_is_an_http_status_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(method_path("account", "info")))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.account_info().await.unwrap_err();

    assert_eq!(err.to_string(), "[500] api call has failed");
    assert!(matches!(err, KavenegarError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let client = KavenegarClient::builder(ApiKey::new("k").unwrap())
        .endpoint("http://127.0.0.1:1/v1/")
        .build()
        .unwrap();
    let err = client.account_info().await.unwrap_err();

    assert!(matches!(err, KavenegarError::Transport(_)));
    assert!(err.to_string().starts_with("request failed: "));
}

#[tokio::test]
async fn account_config_round_trip() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(method_path("account", "config")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            "ok",
            json!({
                "apilogs": "justfaults",
                "dailyreport": "enabled",
                "debugmode": "disabled",
                "defaultsender": "10004346",
                "mincreditalarm": 1000,
                "resendfailed": "enabled"
            }),
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let config = client
        .account_config(AccountConfigUpdate::default())
        .await
        .unwrap();

    assert_eq!(config.default_sender.as_deref(), Some("10004346"));
    assert_eq!(config.min_credit_alarm, Some(1000));
}

#[tokio::test]
async fn verify_lookup_sends_template_and_token() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(method_path("verify", "lookup")))
        .and(body_string_contains("receptor=09123456789"))
        .and(body_string_contains("token=852596"))
        .and(body_string_contains("template=registerverify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            "ok",
            json!([message_entry(42, "09123456789")]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = client
        .send_verification_code(VerifyLookup::new(
            receptor("09123456789"),
            VerifyToken::new("852596").unwrap(),
            TemplateName::new("registerverify").unwrap(),
        ))
        .await
        .unwrap();

    assert_eq!(entries[0].message_id, MessageId::new(42));
}
