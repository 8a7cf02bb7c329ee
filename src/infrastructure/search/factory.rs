// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::config::settings::{HttpSettings, Settings};
use crate::domain::search::engine::SearchEngine;
use crate::domain::services::search_service::SearchService;
use crate::infrastructure::search::ai_search::AiSearchEngine;
use crate::infrastructure::search::duckduckgo::DuckDuckGoSearchEngine;
use crate::infrastructure::search::google::GoogleSearchEngine;
use crate::infrastructure::search::mock::MockSearchEngine;

/// 搜索引擎工厂
///
/// 根据配置创建所有搜索引擎，并注册到 [`SearchService`]
pub struct SearchEngineFactory;

impl SearchEngineFactory {
    /// 创建出站 HTTP 客户端
    ///
    /// 未配置超时时使用 reqwest 默认行为
    pub fn build_http_client(settings: &HttpSettings) -> Result<Client, reqwest::Error> {
        let mut builder = Client::builder().user_agent(settings.user_agent.clone());
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// 创建全部引擎
    pub fn create_all_engines(
        settings: &Settings,
        client: Client,
    ) -> Vec<Arc<dyn SearchEngine>> {
        vec![
            Arc::new(AiSearchEngine::new(
                client.clone(),
                settings.ai_search.clone(),
            )),
            Arc::new(MockSearchEngine::new()),
            Arc::new(GoogleSearchEngine::new(
                client.clone(),
                settings.google_search.clone(),
            )),
            Arc::new(DuckDuckGoSearchEngine::new(
                client,
                settings.duckduckgo.clone(),
            )),
        ]
    }

    /// 根据配置创建搜索服务
    pub fn create_service(settings: &Settings) -> Result<SearchService, reqwest::Error> {
        let client = Self::build_http_client(&settings.http)?;
        let engines = Self::create_all_engines(settings, client);
        info!(
            "Registered search engines: {}",
            engines
                .iter()
                .map(|e| e.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(SearchService::new(engines))
    }
}
