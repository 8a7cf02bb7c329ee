// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索方式
///
/// 每个请求只按令牌选择一种方式，服务端不会跨提供方级联
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchMethod {
    /// AI 搜索（主路由）
    Auto,
    /// 内置 mock 数据
    #[default]
    Mock,
    /// Google Custom Search
    Google,
    /// DuckDuckGo instant answer
    DuckDuckGo,
}

impl SearchMethod {
    /// 获取方式名称，与引擎的 `name()` 一致
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Mock => "mock",
            Self::Google => "google",
            Self::DuckDuckGo => "duckduckgo",
        }
    }

    /// 从字符串解析方式，令牌区分大小写且不做别名
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "mock" => Some(Self::Mock),
            "google" => Some(Self::Google),
            "duckduckgo" => Some(Self::DuckDuckGo),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
