// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 提取 URL 的主机部分，无法解析或没有主机时返回 `None`
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

/// 在基础地址之后拼接路径
///
/// 基础地址缺少结尾的 `/` 时会补上，保证 `http://h/api` + `search`
/// 得到 `http://h/api/search` 而不是 `http://h/search`
pub fn join_path(base_url: &str, path: &str) -> Result<Url, ParseError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path.trim_start_matches('/'))
}
