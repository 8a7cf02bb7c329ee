// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义 HTTP 查询参数与响应体，用于在 API 和领域模型之间传输数据
pub mod search_request;
pub mod search_response;
