// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含 HTTP 边界使用的数据传输对象
pub mod application;

/// 客户端模块
///
/// 调用搜索路由并在主路由失败时切换到备选路由
pub mod client;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含搜索结果模型、引擎接口、规范化和搜索网关
pub mod domain;

/// 基础设施模块
///
/// 提供外部搜索服务集成和指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和错误映射
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
