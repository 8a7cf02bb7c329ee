// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 客户端模块
///
/// 调用服务端搜索路由的控制器，带一次客户端侧的备选路由切换
pub mod controller;
pub mod route;

pub use controller::{SearchController, SearchState};
pub use route::{ClientError, HttpSearchRoute, RouteBody, RouteResponse, SearchRoute};
