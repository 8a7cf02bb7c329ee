// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::models::search_result::{rerank, SearchResult};
use crate::domain::search::engine::{SearchEngine, SearchError};

/// 摘要中可高亮的关键词（不区分大小写）
static HIGHLIGHT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)cyberpunk|technology|ai").expect("Failed to compile highlight regex")
});

/// (url, name, snippet, host_name, date)
const CATALOGUE: [(&str, &str, &str, &str, &str); 5] = [
    (
        "https://example.com/cyberpunk-tech",
        "Cyberpunk Technology Trends 2024",
        "Explore the latest cyberpunk technology trends including neural interfaces, holographic displays, and AI-powered cybernetics.",
        "example.com",
        "2024-01-15",
    ),
    (
        "https://technews.com/neon-cities",
        "Neon Cities: The Future of Urban Lighting",
        "Discover how neon lighting is transforming modern cities into cyberpunk metropolises with smart lighting systems.",
        "technews.com",
        "2024-01-12",
    ),
    (
        "https://airesearch.com/ai-cyberpunk",
        "AI and Cyberpunk: From Fiction to Reality",
        "How artificial intelligence is bringing cyberpunk concepts to life in the real world.",
        "airesearch.com",
        "2024-01-10",
    ),
    (
        "https://futuretech.com/vr-gaming",
        "Virtual Reality Gaming: The Next Frontier",
        "Dive into the world of VR gaming and explore how it's shaping the future of entertainment.",
        "futuretech.com",
        "2024-01-08",
    ),
    (
        "https://digitalart.com/cyberpunk-art",
        "Digital Art in the Cyberpunk Era",
        "Explore the evolution of digital art and its influence on cyberpunk aesthetics and culture.",
        "digitalart.com",
        "2024-01-05",
    ),
];

/// 固定的 mock 结果，排名 1..5
pub fn catalogue() -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = CATALOGUE
        .iter()
        .map(|(url, name, snippet, host, date)| {
            SearchResult::new(*url, *name, *snippet, *host, 0, *date)
        })
        .collect();
    rerank(&mut results);
    results
}

/// 用 `<strong>` 包裹摘要中匹配到的关键词
///
/// 摘要一侧按子串匹配，关键词必须作为完整单词出现在查询中
pub fn highlight(snippet: &str, query: &str) -> String {
    let keywords: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

    HIGHLIGHT_PATTERN
        .replace_all(snippet, |caps: &Captures| {
            let matched = &caps[0];
            if keywords.iter().any(|k| *k == matched.to_lowercase()) {
                format!("<strong>{}</strong>", matched)
            } else {
                matched.to_string()
            }
        })
        .into_owned()
}

/// 带高亮的 mock 结果
pub fn highlighted(query: &str) -> Vec<SearchResult> {
    catalogue()
        .into_iter()
        .map(|mut result| {
            result.snippet = highlight(&result.snippet, query);
            result
        })
        .collect()
}

/// mock 数据替代真实结果的原因
///
/// 不同原因带不同标注，调用方可以区分“未尝试”和“尝试后失败”
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// Google 凭据缺失，未发出请求
    NoCredentials,
    /// Google 请求失败
    GoogleFallback,
    /// DuckDuckGo 请求失败
    DuckDuckGoFallback,
}

impl Substitution {
    pub fn name_suffix(&self) -> &'static str {
        match self {
            Self::NoCredentials => " (Mock - No Google API)",
            Self::GoogleFallback => " (Google Fallback)",
            Self::DuckDuckGoFallback => " (DuckDuckGo)",
        }
    }

    pub fn snippet_prefix(&self, query: &str) -> String {
        match self {
            Self::NoCredentials => format!("Mock result for: {}. ", query),
            Self::GoogleFallback => format!("Fallback result for: {}. ", query),
            Self::DuckDuckGoFallback => format!("DuckDuckGo search result for: {}. ", query),
        }
    }

    /// 指标标签
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NoCredentials => "no_credentials",
            Self::GoogleFallback | Self::DuckDuckGoFallback => "provider_failure",
        }
    }
}

/// 带标注的替代结果
pub fn substitute(query: &str, substitution: Substitution) -> Vec<SearchResult> {
    let prefix = substitution.snippet_prefix(query);
    catalogue()
        .into_iter()
        .map(|mut result| {
            result.name.push_str(substitution.name_suffix());
            result.snippet = format!("{}{}", prefix, result.snippet);
            result
        })
        .collect()
}

/// Mock 搜索引擎
///
/// 从不失败
#[derive(Debug, Default, Clone)]
pub struct MockSearchEngine;

impl MockSearchEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SearchEngine for MockSearchEngine {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        Ok(highlighted(query))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
