// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::search_result::SearchResult;

/// 主路由成功响应
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseDto {
    pub results: Vec<SearchResult>,
    pub query: String,
    pub total_results: usize,
}

/// 备选路由成功响应
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeSearchResponseDto {
    pub results: Vec<SearchResult>,
    pub query: String,
    pub method: String,
    pub total_results: usize,
}

/// 错误响应
///
/// 校验错误只有 `error`；搜索失败时附带空的 `results`，
/// 主路由失败还会附带 `suggestion`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorResponseDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            results: None,
            suggestion: None,
        }
    }

    pub fn with_empty_results(mut self) -> Self {
        self.results = Some(Vec::new());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// 凭据诊断响应
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsReportDto {
    pub has_api_key: bool,
    pub has_search_engine_id: bool,
    pub api_key_preview: String,
    pub search_engine_id_preview: String,
}
