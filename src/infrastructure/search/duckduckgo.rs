// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::settings::DuckDuckGoSettings;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::domain::search::normalizer::{normalize_all, RawSearchItem};
use crate::infrastructure::search::mock::{substitute, Substitution};

const RESULT_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
struct InstantAnswerResponse {
    #[serde(rename = "RelatedTopics")]
    related_topics: Option<Vec<RelatedTopic>>,
}

/// 相关主题条目；分组条目没有 `FirstURL`/`Text`，按缺失字段处理
#[derive(Debug, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "FirstURL")]
    first_url: Option<String>,
    #[serde(rename = "Text")]
    text: Option<String>,
}

impl From<RelatedTopic> for RawSearchItem {
    fn from(topic: RelatedTopic) -> Self {
        // The API has no separate title; Text serves as both
        RawSearchItem {
            url: topic.first_url,
            name: topic.text.clone(),
            snippet: topic.text,
            favicon: Some(String::new()),
            ..Default::default()
        }
    }
}

/// DuckDuckGo instant answer 引擎，无需凭据
pub struct DuckDuckGoSearchEngine {
    client: Client,
    settings: DuckDuckGoSettings,
}

impl DuckDuckGoSearchEngine {
    pub fn new(client: Client, settings: DuckDuckGoSettings) -> Self {
        Self { client, settings }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response = self
            .client
            .get(&self.settings.endpoint)
            .query(&[("q", query), ("format", "json")])
            .send()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        // Served as application/x-javascript, so parse the text ourselves
        let text = response
            .text()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;
        let body: InstantAnswerResponse = serde_json::from_str(&text)
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        let topics = body.related_topics.ok_or_else(|| {
            SearchError::InvalidResponse("response has no RelatedTopics".to_string())
        })?;

        Ok(normalize_all(
            topics
                .into_iter()
                .take(RESULT_LIMIT)
                .map(RawSearchItem::from),
        ))
    }
}

#[async_trait]
impl SearchEngine for DuckDuckGoSearchEngine {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        match self.fetch(query).await {
            Ok(results) => {
                info!("Engine duckduckgo returned {} results", results.len());
                Ok(results)
            }
            Err(e) => {
                warn!("DuckDuckGo search error: {}", e);
                metrics::counter!("search_provider_failures_total", "engine" => "duckduckgo")
                    .increment(1);
                metrics::counter!(
                    "search_provider_substitutions_total",
                    "engine" => "duckduckgo",
                    "reason" => Substitution::DuckDuckGoFallback.reason()
                )
                .increment(1);
                Ok(substitute(query, Substitution::DuckDuckGoFallback))
            }
        }
    }

    fn name(&self) -> &'static str {
        "duckduckgo"
    }
}
