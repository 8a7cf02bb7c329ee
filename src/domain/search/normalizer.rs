// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::domain::models::search_result::SearchResult;
use crate::utils::url_utils::host_of;

pub const DEFAULT_NAME: &str = "Untitled";
pub const DEFAULT_SNIPPET: &str = "No description available";
pub const UNKNOWN_HOST: &str = "Unknown";

/// 提供方原始条目
///
/// 各适配器把自己的响应结构映射到这里，缺失字段保持 `None`，
/// 由 [`normalize`] 统一补齐默认值
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSearchItem {
    pub url: Option<String>,
    pub name: Option<String>,
    pub snippet: Option<String>,
    pub host_name: Option<String>,
    pub rank: Option<u32>,
    pub date: Option<String>,
    pub favicon: Option<String>,
}

impl RawSearchItem {
    /// 从松散的 JSON 记录中读取字段
    ///
    /// 类型不符的字段按缺失处理，从不报错
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            url: text("url"),
            name: text("name"),
            snippet: text("snippet"),
            host_name: text("host_name"),
            rank: value
                .get("rank")
                .and_then(Value::as_u64)
                .and_then(|r| u32::try_from(r).ok()),
            date: text("date"),
            favicon: text("favicon"),
        }
    }
}

/// 规范化单个条目，日期缺省为今天（UTC）
pub fn normalize(raw: RawSearchItem, index: usize) -> SearchResult {
    normalize_with_date(raw, index, Utc::now().date_naive())
}

/// 规范化单个条目
///
/// 空字符串与 0 排名视为缺失。`host_name` 缺失时取自 `url` 的主机部分，
/// 两者都不可用时为 `"Unknown"`
pub fn normalize_with_date(raw: RawSearchItem, index: usize, today: NaiveDate) -> SearchResult {
    let url = present(raw.url).unwrap_or_default();
    let host_name = present(raw.host_name)
        .or_else(|| host_of(&url))
        .unwrap_or_else(|| UNKNOWN_HOST.to_string());

    SearchResult {
        name: present(raw.name).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        snippet: present(raw.snippet).unwrap_or_else(|| DEFAULT_SNIPPET.to_string()),
        host_name,
        rank: raw.rank.filter(|r| *r > 0).unwrap_or(index as u32 + 1),
        date: present(raw.date).unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
        favicon: present(raw.favicon).unwrap_or_default(),
        url,
    }
}

/// 规范化整个结果集合，排名按位置重新分配
pub fn normalize_all<I>(items: I) -> Vec<SearchResult>
where
    I: IntoIterator<Item = RawSearchItem>,
{
    let mut results: Vec<SearchResult> = items
        .into_iter()
        .enumerate()
        .map(|(index, raw)| normalize(raw, index))
        .collect();
    crate::domain::models::search_result::rerank(&mut results);
    results
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
