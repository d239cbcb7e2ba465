use std::time::Duration;

use perth_containers::{Catalog, ChatGateway, GatewayConfig, Role};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1/chat/completions";

fn gateway_for(server: &MockServer) -> ChatGateway {
    let config = GatewayConfig {
        api_url: format!("{}{}", server.uri(), ENDPOINT),
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
        temperature: 0.7,
        max_tokens: 500,
        timeout: Some(Duration::from_secs(5)),
    };
    ChatGateway::new(config, Catalog::perth()).expect("gateway should build")
}

fn reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    }))
}

async fn request_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording is on by default")
        .iter()
        .map(|r| r.body_json::<Value>().expect("request body is JSON"))
        .collect()
}

#[test_log::test(tokio::test)]
async fn test_successful_reply_is_recorded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "temperature": 0.7,
            "max_tokens": 500
        })))
        .respond_with(reply("Check the pavilion after sunset! 💰"))
        .expect(1)
        .mount(&server)
        .await;

    let mut gateway = gateway_for(&server);
    let answer = gateway.send("hello").await;

    assert_eq!(answer, "Check the pavilion after sunset! 💰");
    let roles: Vec<Role> = gateway.transcript().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
    assert_eq!(gateway.transcript()[1].content, "hello");
    assert_eq!(gateway.transcript()[2].content, answer);
}

#[tokio::test]
async fn test_location_data_is_attached_to_user_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(reply("ok"))
        .mount(&server)
        .await;

    let mut gateway = gateway_for(&server);
    gateway.send("Where can I find cans at Cottesloe Beach?").await;

    let bodies = request_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    let messages = bodies[0]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");

    let content = messages[1]["content"].as_str().unwrap();
    assert!(content.starts_with("Where can I find cans at Cottesloe Beach?\n\n[LOCATION DATA:\n"));
    assert!(content.contains("📍 LOCATION FOUND: Cottesloe Beach"));
    assert!(content.contains("Litter Density: 10/10"));
    assert!(content.contains("1. Return-It Shenton Park Drive-Thru (drive_thru) - 7am-6pm daily"));
    assert!(content.contains("2. Garden City Shopping Centre RVM (rvm) - Mall hours"));
    assert!(content.contains("3. Westfield Innaloo RVM (rvm) - Mall hours"));
    assert!(content.ends_with("]"));
}

#[tokio::test]
async fn test_server_error_is_reported_and_question_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let mut gateway = gateway_for(&server);
    let answer = gateway.send("hello").await;

    assert_eq!(answer, "❌ API Error: 500 - upstream exploded");
    assert_eq!(gateway.transcript().len(), 2);
    let last = gateway.transcript().last().unwrap();
    assert_eq!(last.role, Role::User);
    assert_eq!(last.content, "hello");
}

#[tokio::test]
async fn test_non_json_body_is_a_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway timeout</html>"))
        .mount(&server)
        .await;

    let mut gateway = gateway_for(&server);
    let answer = gateway.send("hello").await;

    assert!(answer.starts_with("❌ Error: malformed response"), "got: {}", answer);
    assert_eq!(gateway.transcript().len(), 2);
}

#[tokio::test]
async fn test_empty_choices_is_a_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let mut gateway = gateway_for(&server);
    let answer = gateway.send("hello").await;

    assert_eq!(answer, "❌ Error: malformed response: response has no choices");
    assert_eq!(gateway.transcript().last().unwrap().role, Role::User);
}

#[tokio::test]
async fn test_non_200_success_status_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .mount(&server)
        .await;

    let mut gateway = gateway_for(&server);
    assert_eq!(gateway.send("hello").await, "❌ API Error: 201 - created");
}

#[tokio::test]
async fn test_whole_transcript_is_sent_each_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(reply("first answer"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(reply("second answer"))
        .mount(&server)
        .await;

    let mut gateway = gateway_for(&server);
    assert_eq!(gateway.send("hello").await, "❌ API Error: 503 - busy");
    assert_eq!(gateway.send("hello again").await, "first answer");
    assert_eq!(gateway.send("and once more").await, "second answer");

    let bodies = request_bodies(&server).await;
    let sent: Vec<usize> = bodies
        .iter()
        .map(|b| b["messages"].as_array().unwrap().len())
        .collect();
    // system + unanswered user, then + user, then + assistant + user
    assert_eq!(sent, vec![2, 3, 5]);

    let roles: Vec<Role> = gateway.transcript().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![Role::System, Role::User, Role::User, Role::Assistant, Role::User, Role::Assistant]
    );
}

#[tokio::test]
async fn test_independent_gateways_keep_separate_transcripts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(reply("ok"))
        .mount(&server)
        .await;

    let mut first = gateway_for(&server);
    let second = gateway_for(&server);
    first.send("hello").await;

    assert_eq!(first.transcript().len(), 3);
    assert_eq!(second.transcript().len(), 1);
}
