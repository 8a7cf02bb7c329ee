// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::form_urlencoded;
use validator::Validate;

use crate::domain::search::method::SearchMethod;

/// 主路由查询参数 `?q=`
#[derive(Debug, Default, Validate)]
pub struct SearchQueryDto {
    #[validate(
        required(message = "Search query is required"),
        length(min = 1, message = "Search query is required")
    )]
    pub q: Option<String>,
}

/// 备选路由查询参数 `?q=&method=`
#[derive(Debug, Default, Validate)]
pub struct AlternativeSearchQueryDto {
    #[validate(
        required(message = "Search query is required"),
        length(min = 1, message = "Search query is required")
    )]
    pub q: Option<String>,
    /// 缺省为 `mock`
    pub method: Option<String>,
}

fn trim_query(q: Option<String>) -> Option<String> {
    q.map(|v| v.trim().to_string())
}

/// 取查询串中某个参数的第一个值
///
/// 重复参数不会导致解析失败，后出现的值被忽略
fn first_param(raw: Option<&str>, key: &str) -> Option<String> {
    form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.into_owned())
}

impl SearchQueryDto {
    /// 从原始查询串构造
    pub fn from_query(raw: Option<&str>) -> Self {
        Self {
            q: first_param(raw, "q"),
        }
    }

    /// 去除查询首尾空白，校验前调用
    pub fn trimmed(self) -> Self {
        Self { q: trim_query(self.q) }
    }

    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

impl AlternativeSearchQueryDto {
    pub fn from_query(raw: Option<&str>) -> Self {
        Self {
            q: first_param(raw, "q"),
            method: first_param(raw, "method"),
        }
    }

    pub fn trimmed(self) -> Self {
        Self {
            q: trim_query(self.q),
            method: self.method,
        }
    }

    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    /// 方式令牌，缺失或为空时为 `mock`；其余值原样返回
    pub fn method_token(&self) -> &str {
        match self.method.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => SearchMethod::default().name(),
        }
    }
}
