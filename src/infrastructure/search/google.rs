// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::settings::GoogleSearchSettings;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::domain::search::normalizer::{normalize_all, RawSearchItem};
use crate::infrastructure::search::mock::{substitute, Substitution};

/// 单次请求的结果上限
const RESULT_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
struct GoogleSearchResponse {
    items: Option<Vec<GoogleSearchItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleSearchItem {
    link: Option<String>,
    title: Option<String>,
    snippet: Option<String>,
    #[serde(rename = "displayLink")]
    display_link: Option<String>,
}

/// Google Custom Search 引擎
///
/// 凭据缺失时直接返回标注为 “No Google API” 的 mock 数据，不发出请求；
/// 请求失败或响应中没有 `items` 时返回标注为 “Google Fallback” 的 mock 数据
pub struct GoogleSearchEngine {
    client: Client,
    settings: GoogleSearchSettings,
}

impl GoogleSearchEngine {
    pub fn new(client: Client, settings: GoogleSearchSettings) -> Self {
        Self { client, settings }
    }

    fn favicon_for(&self, display_link: Option<&str>) -> String {
        format!(
            "{}?domain={}",
            self.settings.favicon_endpoint,
            urlencoding::encode(display_link.unwrap_or(""))
        )
    }

    async fn fetch(
        &self,
        api_key: &str,
        cx: &str,
        query: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let num = RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(&self.settings.endpoint)
            .query(&[
                ("key", api_key),
                ("cx", cx),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        let body: GoogleSearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        let items = body
            .items
            .ok_or_else(|| SearchError::InvalidResponse("response has no items".to_string()))?;

        let raw = items.into_iter().map(|item| {
            let favicon = self.favicon_for(item.display_link.as_deref());
            RawSearchItem {
                url: item.link,
                name: item.title,
                snippet: item.snippet,
                host_name: item.display_link,
                favicon: Some(favicon),
                ..Default::default()
            }
        });

        Ok(normalize_all(raw))
    }
}

#[async_trait]
impl SearchEngine for GoogleSearchEngine {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let Some((api_key, cx)) = self.settings.credentials() else {
            info!("Google API credentials not found, using mock data");
            metrics::counter!(
                "search_provider_substitutions_total",
                "engine" => "google",
                "reason" => Substitution::NoCredentials.reason()
            )
            .increment(1);
            return Ok(substitute(query, Substitution::NoCredentials));
        };

        match self.fetch(api_key, cx, query).await {
            Ok(results) => {
                info!("Engine google returned {} results", results.len());
                Ok(results)
            }
            Err(e) => {
                warn!("Google search error: {}", e);
                metrics::counter!("search_provider_failures_total", "engine" => "google")
                    .increment(1);
                metrics::counter!(
                    "search_provider_substitutions_total",
                    "engine" => "google",
                    "reason" => Substitution::GoogleFallback.reason()
                )
                .increment(1);
                Ok(substitute(query, Substitution::GoogleFallback))
            }
        }
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
