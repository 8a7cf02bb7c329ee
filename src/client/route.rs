// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::domain::models::search_result::SearchResult;
use crate::utils::url_utils::join_path;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// 服务端 JSON 响应中客户端关心的部分
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RouteBody {
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    pub status: u16,
    pub body: RouteBody,
}

impl RouteResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 一条可调用的搜索路由
#[async_trait]
pub trait SearchRoute: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<RouteResponse, ClientError>;

    /// 用于日志的描述
    fn describe(&self) -> String;
}

/// 基于 HTTP 的搜索路由
pub struct HttpSearchRoute {
    client: Client,
    url: Url,
    params: Vec<(String, String)>,
}

impl HttpSearchRoute {
    pub fn new(client: Client, base_url: &str, path: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client,
            url: join_path(base_url, path)?,
            params: Vec::new(),
        })
    }

    /// 附加固定的查询参数，例如 `method=google`
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

#[async_trait]
impl SearchRoute for HttpSearchRoute {
    async fn fetch(&self, query: &str) -> Result<RouteResponse, ClientError> {
        let response = self
            .client
            .get(self.url.clone())
            .query(&[("q", query)])
            .query(&self.params)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let body = serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(RouteResponse { status, body })
    }

    fn describe(&self) -> String {
        if self.params.is_empty() {
            return self.url.to_string();
        }
        let params = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.url, params)
    }
}
