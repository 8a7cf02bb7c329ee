// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::domain::search::method::SearchMethod;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchServiceError {
    #[error("Search query is required")]
    EmptyQuery,
    #[error("No search engine registered for method: {0}")]
    UnknownEngine(String),
    #[error("{0}")]
    SearchEngine(#[from] SearchError),
}

/// 一次搜索的结果及元数据
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// 去除首尾空白后的查询
    pub query: String,
    /// 实际使用的方式
    pub method: SearchMethod,
    pub results: Vec<SearchResult>,
}

impl SearchOutcome {
    pub fn total_results(&self) -> usize {
        self.results.len()
    }
}

/// 搜索网关
///
/// 按方式令牌选择唯一一个引擎执行搜索。服务端不在引擎之间级联，
/// 替换逻辑只存在于各适配器内部
pub struct SearchService {
    engines: HashMap<&'static str, Arc<dyn SearchEngine>>,
}

impl SearchService {
    pub fn new(engines: Vec<Arc<dyn SearchEngine>>) -> Self {
        let engines = engines
            .into_iter()
            .map(|engine| (engine.name(), engine))
            .collect();
        Self { engines }
    }

    /// 校验查询：去除首尾空白后不能为空
    pub fn validate_query(query: Option<&str>) -> Result<&str, SearchServiceError> {
        match query.map(str::trim) {
            Some(q) if !q.is_empty() => Ok(q),
            _ => Err(SearchServiceError::EmptyQuery),
        }
    }

    /// 使用指定方式执行搜索
    ///
    /// # 错误
    ///
    /// - 查询为空时返回 `EmptyQuery`
    /// - 未注册对应引擎时返回 `UnknownEngine`
    /// - 引擎失败时返回 `SearchEngine`（只有 AI 搜索会失败）
    pub async fn search(
        &self,
        query: &str,
        method: SearchMethod,
    ) -> Result<SearchOutcome, SearchServiceError> {
        let query = Self::validate_query(Some(query))?;
        let engine = self
            .engines
            .get(method.name())
            .ok_or_else(|| SearchServiceError::UnknownEngine(method.name().to_string()))?;

        metrics::counter!("search_requests_total", "engine" => method.name()).increment(1);

        match engine.search(query).await {
            Ok(results) => {
                info!(
                    engine = method.name(),
                    count = results.len(),
                    "Search completed"
                );
                Ok(SearchOutcome {
                    query: query.to_string(),
                    method,
                    results,
                })
            }
            Err(e) => {
                warn!(engine = method.name(), error = %e, "Search engine failed");
                metrics::counter!("search_provider_failures_total", "engine" => method.name())
                    .increment(1);
                Err(e.into())
            }
        }
    }
}
