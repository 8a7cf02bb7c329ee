// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, RawQuery},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

use crate::{
    application::dto::{
        search_request::{AlternativeSearchQueryDto, SearchQueryDto},
        search_response::{AlternativeSearchResponseDto, ErrorResponseDto, SearchResponseDto},
    },
    domain::{
        search::method::SearchMethod,
        services::search_service::{SearchService, SearchServiceError},
    },
    infrastructure::search::mock,
    presentation::errors::AppError,
};

const FALLBACK_SUGGESTION: &str = "Try fallback search method";

fn bad_request() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponseDto::new(SearchServiceError::EmptyQuery.to_string())),
    )
        .into_response()
}

/// 主搜索路由 `GET /search?q=`
///
/// 调用 AI 搜索。失败时返回 500 和 `suggestion`，由客户端改走备选路由，
/// 这里不会替换为 mock 数据
pub async fn search(
    Extension(service): Extension<Arc<SearchService>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let params = SearchQueryDto::from_query(raw.as_deref()).trimmed();
    if params.validate().is_err() {
        return bad_request();
    }

    match service.search(params.query(), SearchMethod::Auto).await {
        Ok(outcome) => {
            let total_results = outcome.total_results();
            (
                StatusCode::OK,
                Json(SearchResponseDto {
                    results: outcome.results,
                    query: outcome.query,
                    total_results,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Search API Error: {}", e);
            info!("AI search failed. Client should fall back to an alternative search method.");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(
                    ErrorResponseDto::new(e.to_string())
                        .with_empty_results()
                        .with_suggestion(FALLBACK_SUGGESTION),
                ),
            )
                .into_response()
        }
    }
}

/// 备选搜索路由 `GET /search/alternatives?q=&method=`
///
/// `method` 缺省为 `mock`；无法识别的方式（令牌区分大小写）返回未高亮的
/// mock 数据，并原样回显该方式
pub async fn search_alternatives(
    Extension(service): Extension<Arc<SearchService>>,
    RawQuery(raw): RawQuery,
) -> Result<Response, AppError> {
    let params = AlternativeSearchQueryDto::from_query(raw.as_deref()).trimmed();
    if params.validate().is_err() {
        return Ok(bad_request());
    }

    let token = params.method_token();
    let (method, results, query) = match SearchMethod::parse(token) {
        Some(method) if method != SearchMethod::Auto => {
            let outcome = service.search(params.query(), method).await?;
            (method.name().to_string(), outcome.results, outcome.query)
        }
        _ => {
            warn!("Unknown search method '{}', returning default results", token);
            (
                token.to_string(),
                mock::catalogue(),
                params.query().to_string(),
            )
        }
    };

    let total_results = results.len();
    Ok((
        StatusCode::OK,
        Json(AlternativeSearchResponseDto {
            results,
            query,
            method,
            total_results,
        }),
    )
        .into_response())
}
