// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::settings::AiSearchSettings;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::domain::search::normalizer::{normalize_all, RawSearchItem};
use crate::utils::url_utils::join_path;

const INVOKE_PATH: &str = "functions/invoke";

/// AI 搜索引擎
///
/// 通过外部函数调用服务执行 `web_search`。与其他适配器不同，
/// 失败不会替换为 mock 数据，而是返回错误，由客户端改走备选路由
///
/// # 配置
///
/// - `ai_search.base_url` - 函数调用服务地址，未设置时每次调用都返回 `NotConfigured`
/// - `ai_search.api_key` - 可选的 Bearer 令牌
pub struct AiSearchEngine {
    client: Client,
    settings: AiSearchSettings,
}

impl AiSearchEngine {
    pub fn new(client: Client, settings: AiSearchSettings) -> Self {
        Self { client, settings }
    }

    /// 取出结果数组：响应体本身，或对象中的 `result` 字段
    fn extract_payload(body: Value) -> Result<Vec<Value>, SearchError> {
        match body {
            Value::Array(items) => Ok(items),
            Value::Object(mut map) => match map.remove("result") {
                Some(Value::Array(items)) => Ok(items),
                _ => Err(invalid_format()),
            },
            _ => Err(invalid_format()),
        }
    }
}

fn invalid_format() -> SearchError {
    SearchError::InvalidResponse("Invalid search response format".to_string())
}

#[async_trait]
impl SearchEngine for AiSearchEngine {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let base_url = self
            .settings
            .base_url
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| SearchError::NotConfigured("AI search service".to_string()))?;

        let url = join_path(base_url, INVOKE_PATH)
            .map_err(|e| SearchError::NotConfigured(format!("invalid AI search base_url: {}", e)))?;

        let request_body = json!({
            "function_name": self.settings.function_name,
            "arguments": {
                "query": query.trim(),
                "num": self.settings.result_count,
            }
        });

        debug!("Invoking {} at {}", self.settings.function_name, url);

        let mut request = self.client.post(url).json(&request_body);
        if let Some(api_key) = self.settings.api_key.as_deref().filter(|v| !v.is_empty()) {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| invalid_format())?;

        let items = Self::extract_payload(body)?;
        let results = normalize_all(items.iter().map(RawSearchItem::from_value));

        info!("Engine auto returned {} results", results.len());
        Ok(results)
    }

    fn name(&self) -> &'static str {
        "auto"
    }
}
