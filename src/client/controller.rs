// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use reqwest::Client;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::client::route::{ClientError, HttpSearchRoute, SearchRoute};
use crate::domain::models::search_result::SearchResult;

const GENERIC_FAILURE: &str = "Search failed";

/// 客户端搜索状态
///
/// Idle → Searching → (Success | Failed)，下一次提交重新进入 Searching
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Searching,
    Success(Vec<SearchResult>),
    Failed(String),
}

/// 客户端搜索控制器
///
/// 按顺序尝试路由，第一个成功的响应生效。某条路由出错或返回非 2xx
/// 时改用下一条；最后一条路由的结果决定成功或失败
pub struct SearchController {
    routes: Vec<Box<dyn SearchRoute>>,
    state: watch::Sender<SearchState>,
}

impl SearchController {
    pub fn new(routes: Vec<Box<dyn SearchRoute>>) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self { routes, state }
    }

    /// 替换路由链，状态通道保持不变
    pub fn with_routes(mut self, routes: Vec<Box<dyn SearchRoute>>) -> Self {
        self.routes = routes;
        self
    }

    /// 默认路由链：先走 AI 主路由，失败后改走 Google 备选路由
    pub fn for_server(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::new();
        let primary = HttpSearchRoute::new(client.clone(), base_url, "/search")?;
        let alternative = HttpSearchRoute::new(client, base_url, "/search/alternatives")?
            .with_param("method", "google");

        Ok(Self::new(vec![Box::new(primary), Box::new(alternative)]))
    }

    /// 订阅状态变化
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// 加载指示与 Searching 状态一一对应
    pub fn is_loading(&self) -> bool {
        matches!(*self.state.borrow(), SearchState::Searching)
    }

    pub fn reset(&self) {
        self.state.send_replace(SearchState::Idle);
    }

    /// 提交查询
    ///
    /// 去除空白后为空的查询被忽略，状态不变、不发出请求
    pub async fn submit(&self, query: &str) -> SearchState {
        let query = query.trim();
        if query.is_empty() {
            return self.state();
        }

        // Clears any previous results or error
        self.state.send_replace(SearchState::Searching);
        let outcome = self.run(query).await;
        self.state.send_replace(outcome.clone());
        outcome
    }

    async fn run(&self, query: &str) -> SearchState {
        let Some(last) = self.routes.len().checked_sub(1) else {
            return SearchState::Failed("No search routes configured".to_string());
        };

        for (index, route) in self.routes.iter().enumerate() {
            match route.fetch(query).await {
                Ok(response) if response.is_ok() => {
                    let results = response.body.results.unwrap_or_default();
                    info!("{} returned {} results", route.describe(), results.len());
                    return SearchState::Success(results);
                }
                Ok(response) if index == last => {
                    return SearchState::Failed(
                        response
                            .body
                            .error
                            .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                    );
                }
                Err(e) if index == last => return SearchState::Failed(e.to_string()),
                Ok(response) => {
                    warn!(
                        "{} returned status {}, trying next route",
                        route.describe(),
                        response.status
                    );
                }
                Err(e) => warn!("{} failed: {}, trying next route", route.describe(), e),
            }
        }

        SearchState::Failed(GENERIC_FAILURE.to_string())
    }
}
