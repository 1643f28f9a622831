//! Integration tests for the TechPoa site client

use serde_json::json;
use techpoa_client::SiteClient;
use techpoa_client::error::ClientError;
use techpoa_client::types::{ContactMessage, QuoteRequest};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_base_url_trailing_slash_is_trimmed() {
    let client = SiteClient::new("http://localhost:8080/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_subscribe_newsletter_posts_the_address() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/newsletter/subscribe"))
        .and(body_json(json!({ "email": "amina@techpoa.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Subscribed"
        })))
        .mount(&mock_server)
        .await;

    let client = SiteClient::new(mock_server.uri()).unwrap();
    let ack = client
        .subscribe_newsletter("amina@techpoa.com")
        .await
        .unwrap();

    assert!(ack.success);
    assert_eq!(ack.message.as_deref(), Some("Subscribed"));
}

#[tokio::test]
async fn test_submit_contact_posts_the_full_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contact"))
        .and(body_json(json!({
            "name": "Brian Mwangi",
            "email": "brian@techpoa.com",
            "subject": "Partnership",
            "message": "Let's talk."
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&mock_server)
        .await;

    let client = SiteClient::new(mock_server.uri()).unwrap();
    let ack = client
        .submit_contact(&ContactMessage {
            name: "Brian Mwangi".to_string(),
            email: "brian@techpoa.com".to_string(),
            subject: "Partnership".to_string(),
            message: "Let's talk.".to_string(),
        })
        .await
        .unwrap();

    assert!(ack.success);
}

#[tokio::test]
async fn test_submit_quote_omits_an_absent_budget() {
    let mock_server = MockServer::start().await;

    // No "budget" key at all when the field is None
    Mock::given(method("POST"))
        .and(path("/quotes"))
        .and(body_json(json!({
            "name": "Wanjiru Kamau",
            "email": "wanjiru@techpoa.com",
            "service": "web-development",
            "details": "Booking site for a safari lodge."
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&mock_server)
        .await;

    let client = SiteClient::new(mock_server.uri()).unwrap();
    let ack = client
        .submit_quote(&QuoteRequest {
            name: "Wanjiru Kamau".to_string(),
            email: "wanjiru@techpoa.com".to_string(),
            service: "web-development".to_string(),
            budget: None,
            details: "Booking site for a safari lodge.".to_string(),
        })
        .await
        .unwrap();

    assert!(ack.success);
}

#[tokio::test]
async fn test_admin_stats_sends_the_code_as_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .and(query_param("code", "tp-admin-2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subscribers": 1200,
            "quotes": 34,
            "messages": 87,
            "visitors": 56000
        })))
        .mount(&mock_server)
        .await;

    let client = SiteClient::new(mock_server.uri()).unwrap();
    let stats = client.admin_stats("tp-admin-2024").await.unwrap();

    assert_eq!(stats.subscribers, 1200);
    assert_eq!(stats.visitors, 56000);
}

#[tokio::test]
async fn test_admin_subscribers_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/subscribers"))
        .and(query_param("code", "tp-admin-2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "email": "amina@techpoa.com", "subscribedAt": "2024-05-14T08:30:00Z" },
            { "email": "brian@techpoa.com", "subscribedAt": "2024-06-02T17:05:00Z" }
        ])))
        .mount(&mock_server)
        .await;

    let client = SiteClient::new(mock_server.uri()).unwrap();
    let subscribers = client.admin_subscribers("tp-admin-2024").await.unwrap();

    assert_eq!(subscribers.len(), 2);
    assert_eq!(subscribers[0].email, "amina@techpoa.com");
}

#[tokio::test]
async fn test_rejected_admin_code_maps_to_authentication_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/verify"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad code"))
        .mount(&mock_server)
        .await;

    let client = SiteClient::new(mock_server.uri()).unwrap();
    let result = client.verify_admin_code("wrong").await;

    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn test_server_error_keeps_the_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/launch"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = SiteClient::new(mock_server.uri()).unwrap();
    let result = client.launch_info().await;

    assert!(matches!(
        result,
        Err(ClientError::Server { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_launch_info_parses_the_timestamp() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/launch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "launchAt": "2026-01-01T00:00:00Z",
            "message": "We are live soon"
        })))
        .mount(&mock_server)
        .await;

    let client = SiteClient::new(mock_server.uri()).unwrap();
    let info = client.launch_info().await.unwrap();

    assert_eq!(info.launch_at.to_rfc3339(), "2026-01-01T00:00:00+00:00");
    assert_eq!(info.message.as_deref(), Some("We are live soon"));
}

#[tokio::test]
async fn test_unreachable_server_is_a_request_error() {
    // Nothing listens on this port
    let client = SiteClient::new("http://127.0.0.1:9").unwrap();
    let result = client.subscribe_newsletter("amina@techpoa.com").await;

    assert!(matches!(result, Err(ClientError::Request(_))));
}
