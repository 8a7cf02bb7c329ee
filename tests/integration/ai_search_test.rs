// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use foxseek::config::settings::AiSearchSettings;
use foxseek::domain::search::engine::{SearchEngine, SearchError};
use foxseek::infrastructure::search::ai_search::AiSearchEngine;
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ai_settings(mock_server: &MockServer) -> AiSearchSettings {
    AiSearchSettings {
        base_url: Some(mock_server.uri()),
        api_key: Some("secret-token".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_invokes_web_search_function() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/invoke"))
        .and(header("authorization", "Bearer secret-token"))
        .and(body_json(json!({
            "function_name": "web_search",
            "arguments": {"query": "quantum computing", "num": 10}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "url": "https://quantum.example/intro",
                "name": "Quantum Intro",
                "snippet": "Qubits explained",
                "host_name": "quantum.example",
                "rank": 1,
                "date": "2024-02-02",
                "favicon": "https://quantum.example/favicon.ico"
            },
            {"name": "No link"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let engine = AiSearchEngine::new(Client::new(), ai_settings(&mock_server));
    let results = engine.search(" quantum computing ").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].date, "2024-02-02");
    assert_eq!(results[0].favicon, "https://quantum.example/favicon.ico");
    assert_eq!(results[1].url, "");
    assert_eq!(results[1].host_name, "Unknown");
    assert_eq!(results[1].rank, 2);
}

#[tokio::test]
async fn test_result_envelope_is_accepted() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/invoke"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": [{"url": "https://a.io", "rank": 4}]})),
        )
        .mount(&mock_server)
        .await;

    let engine = AiSearchEngine::new(Client::new(), ai_settings(&mock_server));
    let results = engine.search("a").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].rank, 1);
}

#[tokio::test]
async fn test_error_status_is_surfaced() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let engine = AiSearchEngine::new(Client::new(), ai_settings(&mock_server));
    let err = engine.search("a").await.unwrap_err();

    assert_eq!(err, SearchError::Status(502));
}

#[tokio::test]
async fn test_non_json_body_is_invalid_format() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("oops", "text/plain"))
        .mount(&mock_server)
        .await;

    let engine = AiSearchEngine::new(Client::new(), ai_settings(&mock_server));
    let err = engine.search("a").await.unwrap_err();

    assert_eq!(
        err,
        SearchError::InvalidResponse("Invalid search response format".to_string())
    );
}
