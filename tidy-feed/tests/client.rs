//! Feed client tests against a local wiremock server.

use serde_json::json;
use tidy_core::{FeedSummary, FeedTable};
use tidy_feed::{FeedClient, FeedState, FetchError, RemoteTodoView, TodoFeed};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample(n: u64) -> serde_json::Value {
    let todos: Vec<_> = (1..=n)
        .map(|i| {
            json!({
                "id": i,
                "todo": format!("Task {i}"),
                "userId": 100 + i,
                "completed": i % 3 == 0,
            })
        })
        .collect();
    json!(todos)
}

#[tokio::test]
async fn fetches_envelope_with_limit_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "todos": sample(20),
            "total": 254,
            "skip": 0,
            "limit": 20,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri()).unwrap();
    let todos = client.fetch(20).await.unwrap();

    assert_eq!(todos.len(), 20);
    assert_eq!(todos[0].id, 1);
    assert_eq!(todos[19].id, 20);
    assert_eq!(todos[0].user_id, 101);
}

#[tokio::test]
async fn accepts_bare_array_and_truncates_to_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample(30)))
        .mount(&server)
        .await;

    let client = FeedClient::new(format!("{}/", server.uri())).unwrap();
    let todos = client.fetch(20).await.unwrap();

    assert_eq!(todos.len(), 20);
    assert_eq!(todos.last().map(|t| t.id), Some(20));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri()).unwrap();
    let err = client.fetch(20).await.unwrap_err();

    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri()).unwrap();
    let err = client.fetch(5).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    let source = std::error::Error::source(&err).expect("decode error keeps its cause");
    assert!(source.is::<serde_json::Error>());
}

#[tokio::test]
async fn unreachable_feed_is_a_transport_error() {
    // Grab a free port, then release it so nothing is listening there.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let client = FeedClient::new(uri).unwrap();
    let err = client.fetch(20).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err}");
}

#[tokio::test]
async fn view_loads_and_summarizes_from_http() {
    let server = MockServer::start().await;
    let body = json!({
        "todos": [
            { "id": 1, "todo": "Task 1", "userId": 5, "completed": false },
            { "id": 2, "todo": "Task 2", "userId": 10, "completed": true },
            { "id": 3, "todo": "Task 3", "userId": 5, "completed": true },
            { "id": 4, "todo": "Task 4", "userId": 7, "completed": false },
        ],
        "total": 4,
        "skip": 0,
        "limit": 20,
    });
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let mut view = RemoteTodoView::new(FeedClient::new(server.uri()).unwrap());
    let summary = view.load(20).await.unwrap();

    assert_eq!(summary, FeedSummary { shown: 4, completed: 2, pending: 2 });
    assert!(matches!(view.state(), FeedState::Loaded(r) if r.len() == 4));
    match view.table() {
        FeedTable::Rows(rows) => assert!(rows.iter().all(|r| r.cells().len() == 4)),
        other => panic!("unexpected table: {other:?}"),
    }
}

#[tokio::test]
async fn view_keeps_failure_state_after_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut view = RemoteTodoView::new(FeedClient::new(server.uri()).unwrap());
    assert!(view.load(20).await.is_err());
    assert!(matches!(view.state(), FeedState::Failed(msg) if msg.contains("404")));
}
