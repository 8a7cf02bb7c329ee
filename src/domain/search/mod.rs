// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义搜索引擎接口、搜索方式令牌，以及把提供方原始条目
/// 转换为统一结果结构的规范化逻辑
pub mod engine;
pub mod method;
pub mod normalizer;
