// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("Search engine not configured: {0}")]
    NotConfigured(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Search engine returned status {0}")]
    Status(u16),
    #[error("{0}")]
    InvalidResponse(String),
}

/// 搜索提供方
///
/// 接收查询，返回按排名排序的结果集合。mock、Google、DuckDuckGo
/// 三个适配器在内部用 mock 数据替代失败，因此总是返回 `Ok`；
/// 只有 AI 搜索会把失败交给调用方处理
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Perform a search query
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;

    /// Get the name of the search engine
    fn name(&self) -> &'static str;
}
