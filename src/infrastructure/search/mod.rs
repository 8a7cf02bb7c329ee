// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索提供方模块
///
/// 包括 mock 数据、Google Custom Search、DuckDuckGo instant answer
/// 和 AI 函数调用搜索，以及按配置创建它们的工厂
pub mod ai_search;
pub mod duckduckgo;
pub mod factory;
pub mod google;
pub mod mock;

pub use factory::SearchEngineFactory;
