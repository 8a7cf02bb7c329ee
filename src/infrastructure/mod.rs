// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 外部搜索服务集成与指标导出
pub mod metrics;
pub mod search;
