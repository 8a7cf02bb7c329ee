// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 规范化后的搜索结果
///
/// 与具体搜索提供方无关的统一结构，字段名与对外 JSON 保持一致
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// 结果链接，提供方缺失时为空字符串
    pub url: String,
    /// 标题
    pub name: String,
    /// 摘要
    pub snippet: String,
    /// 主机名
    pub host_name: String,
    /// 从 1 开始的排名
    pub rank: u32,
    /// 日期，格式为 YYYY-MM-DD
    pub date: String,
    /// 图标链接，可为空
    pub favicon: String,
}

impl SearchResult {
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        snippet: impl Into<String>,
        host_name: impl Into<String>,
        rank: u32,
        date: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            snippet: snippet.into(),
            host_name: host_name.into(),
            rank,
            date: date.into(),
            favicon: String::new(),
        }
    }
}

/// 按位置重新分配排名（1..=n）
///
/// 结果集合中 rank 必须与数组位置一致
pub fn rerank(results: &mut [SearchResult]) {
    for (index, result) in results.iter_mut().enumerate() {
        result.rank = index as u32 + 1;
    }
}
