// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心逻辑，包括：
/// - 领域模型（models）：统一的搜索结果结构
/// - 搜索（search）：引擎接口、方式令牌和结果规范化
/// - 服务（services）：按令牌分发请求的搜索网关
pub mod models;
pub mod search;
pub mod services;
