// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::settings::Settings;
use crate::domain::services::search_service::SearchService;
use crate::presentation::errors::handle_panic;
use crate::presentation::handlers::{diagnostics_handler, search_handler};

/// 创建应用路由
///
/// # 返回值
///
/// 返回未挂载状态的路由，依赖通过 `Extension` 注入
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/search", get(search_handler::search))
        .route("/search/alternatives", get(search_handler::search_alternatives))
        .route(
            "/diagnostics/credentials",
            get(diagnostics_handler::credentials),
        )
}

/// 创建完整应用
///
/// 注入搜索服务与配置，并挂载请求追踪和 panic 兜底
pub fn app(service: Arc<SearchService>, settings: Arc<Settings>) -> Router {
    routes()
        .layer(Extension(service))
        .layer(Extension(settings))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// 健康检查端点
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
