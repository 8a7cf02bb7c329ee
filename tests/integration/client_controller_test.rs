// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use foxseek::client::{
    ClientError, RouteBody, RouteResponse, SearchController, SearchRoute, SearchState,
};
use foxseek::domain::models::search_result::SearchResult;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone)]
enum Reply {
    Status(u16, RouteBody),
    Transport(&'static str),
}

struct StubRoute {
    name: &'static str,
    reply: Reply,
    calls: Arc<AtomicUsize>,
    seen_states: Arc<Mutex<Vec<SearchState>>>,
    observer: Option<watch::Receiver<SearchState>>,
}

impl StubRoute {
    fn new(name: &'static str, reply: Reply) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                name,
                reply,
                calls: calls.clone(),
                seen_states: Arc::new(Mutex::new(Vec::new())),
                observer: None,
            },
            calls,
        )
    }
}

#[async_trait]
impl SearchRoute for StubRoute {
    async fn fetch(&self, _query: &str) -> Result<RouteResponse, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(observer) = &self.observer {
            self.seen_states
                .lock()
                .unwrap()
                .push(observer.borrow().clone());
        }
        match &self.reply {
            Reply::Status(status, body) => Ok(RouteResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Transport(msg) => Err(ClientError::Transport(msg.to_string())),
        }
    }

    fn describe(&self) -> String {
        self.name.to_string()
    }
}

fn ok_body(count: usize) -> RouteBody {
    RouteBody {
        results: Some(
            (1..=count as u32)
                .map(|rank| {
                    SearchResult::new(
                        format!("https://r{}.com", rank),
                        format!("Result {}", rank),
                        "snippet",
                        format!("r{}.com", rank),
                        rank,
                        "2024-01-01",
                    )
                })
                .collect(),
        ),
        error: None,
    }
}

fn error_body(message: Option<&str>) -> RouteBody {
    RouteBody {
        results: Some(vec![]),
        error: message.map(str::to_string),
    }
}

#[tokio::test]
async fn test_primary_rejection_triggers_single_fallback() {
    let (primary, primary_calls) = StubRoute::new("primary", Reply::Transport("Failed to fetch"));
    let (alternative, alternative_calls) = StubRoute::new("alt", Reply::Status(200, ok_body(5)));

    let controller = SearchController::new(vec![Box::new(primary), Box::new(alternative)]);
    let state = controller.submit("cyberpunk").await;

    assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
    assert_eq!(alternative_calls.load(Ordering::SeqCst), 1);
    match state {
        SearchState::Success(results) => assert_eq!(results.len(), 5),
        other => panic!("unexpected state {:?}", other),
    }
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn test_primary_error_status_triggers_fallback() {
    let (primary, _) = StubRoute::new(
        "primary",
        Reply::Status(500, error_body(Some("AI search service not configured"))),
    );
    let (alternative, alternative_calls) = StubRoute::new("alt", Reply::Status(200, ok_body(2)));

    let controller = SearchController::new(vec![Box::new(primary), Box::new(alternative)]);
    let state = controller.submit("neon").await;

    assert_eq!(alternative_calls.load(Ordering::SeqCst), 1);
    assert!(matches!(state, SearchState::Success(ref r) if r.len() == 2));
}

#[tokio::test]
async fn test_failed_fallback_reports_server_error_without_third_call() {
    let (primary, primary_calls) = StubRoute::new("primary", Reply::Transport("down"));
    let (alternative, alternative_calls) = StubRoute::new(
        "alt",
        Reply::Status(500, error_body(Some("Failed to perform search"))),
    );
    let controller = SearchController::new(vec![Box::new(primary), Box::new(alternative)]);
    let state = controller.submit("neon").await;

    assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
    assert_eq!(alternative_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        state,
        SearchState::Failed("Failed to perform search".to_string())
    );
    assert_eq!(controller.state(), state);
}

#[tokio::test]
async fn test_generic_failure_message() {
    let (primary, _) = StubRoute::new("primary", Reply::Status(500, RouteBody::default()));
    let (alternative, _) = StubRoute::new("alt", Reply::Status(502, RouteBody::default()));

    let controller = SearchController::new(vec![Box::new(primary), Box::new(alternative)]);
    let state = controller.submit("neon").await;

    assert_eq!(state, SearchState::Failed("Search failed".to_string()));
}

#[tokio::test]
async fn test_transport_failure_on_last_route_uses_error_message() {
    let (primary, _) = StubRoute::new("primary", Reply::Transport("down"));
    let (alternative, _) = StubRoute::new("alt", Reply::Transport("connection refused"));

    let controller = SearchController::new(vec![Box::new(primary), Box::new(alternative)]);
    let state = controller.submit("neon").await;

    assert_eq!(
        state,
        SearchState::Failed("Request failed: connection refused".to_string())
    );
}

#[tokio::test]
async fn test_primary_success_skips_fallback() {
    let (primary, _) = StubRoute::new("primary", Reply::Status(200, ok_body(3)));
    let (alternative, alternative_calls) = StubRoute::new("alt", Reply::Status(200, ok_body(5)));

    let controller = SearchController::new(vec![Box::new(primary), Box::new(alternative)]);
    let state = controller.submit("neon").await;

    assert_eq!(alternative_calls.load(Ordering::SeqCst), 0);
    assert!(matches!(state, SearchState::Success(ref r) if r.len() == 3));
}

#[tokio::test]
async fn test_success_with_missing_results_is_empty() {
    let (primary, _) = StubRoute::new("primary", Reply::Status(200, RouteBody::default()));

    let controller = SearchController::new(vec![Box::new(primary)]);
    assert_eq!(controller.submit("neon").await, SearchState::Success(vec![]));
}

#[tokio::test]
async fn test_blank_query_is_ignored() {
    let (primary, primary_calls) = StubRoute::new("primary", Reply::Status(200, ok_body(1)));

    let controller = SearchController::new(vec![Box::new(primary)]);
    let state = controller.submit("   ").await;

    assert_eq!(state, SearchState::Idle);
    assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_loading_state_while_routes_run() {
    let (mut primary, _) = StubRoute::new("primary", Reply::Transport("down"));
    let (mut alternative, _) = StubRoute::new("alt", Reply::Status(200, ok_body(1)));

    let seen_primary = primary.seen_states.clone();
    let seen_alternative = alternative.seen_states.clone();

    // Routes observe the controller's state channel while they run
    let controller = SearchController::new(vec![]);
    primary.observer = Some(controller.subscribe());
    alternative.observer = Some(controller.subscribe());
    let controller = controller.with_routes(vec![Box::new(primary), Box::new(alternative)]);

    controller.submit("neon").await;

    assert_eq!(*seen_primary.lock().unwrap(), vec![SearchState::Searching]);
    assert_eq!(*seen_alternative.lock().unwrap(), vec![SearchState::Searching]);
    assert!(matches!(controller.state(), SearchState::Success(_)));

    controller.reset();
    assert_eq!(controller.state(), SearchState::Idle);
}

#[tokio::test]
async fn test_default_chain_over_http() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "neon"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "AI search service not configured",
            "results": [],
            "suggestion": "Try fallback search method"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/alternatives"))
        .and(query_param("q", "neon"))
        .and(query_param("method", "google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "url": "https://example.com/cyberpunk-tech",
                "name": "Cyberpunk Technology Trends 2024 (Mock - No Google API)",
                "snippet": "Mock result for: neon. Explore",
                "host_name": "example.com",
                "rank": 1,
                "date": "2024-01-15",
                "favicon": ""
            }],
            "query": "neon",
            "method": "google",
            "totalResults": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = SearchController::for_server(&mock_server.uri()).unwrap();
    let state = controller.submit(" neon ").await;

    match state {
        SearchState::Success(results) => {
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].host_name, "example.com");
        }
        other => panic!("unexpected state {:?}", other),
    }
}
