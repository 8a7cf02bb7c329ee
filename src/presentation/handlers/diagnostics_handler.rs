// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use std::sync::Arc;

use crate::{application::dto::search_response::CredentialsReportDto, config::settings::Settings};

const PREVIEW_CHARS: usize = 10;

/// 凭据预览：前 10 个字符加 `...`，缺失时为 `Not found`
fn preview(value: Option<&str>) -> String {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => format!("{}...", v.chars().take(PREVIEW_CHARS).collect::<String>()),
        None => "Not found".to_string(),
    }
}

/// 凭据诊断 `GET /diagnostics/credentials`
pub async fn credentials(
    Extension(settings): Extension<Arc<Settings>>,
) -> Json<CredentialsReportDto> {
    let google = &settings.google_search;
    let api_key = google.api_key.as_deref();
    let engine_id = google.search_engine_id.as_deref();

    Json(CredentialsReportDto {
        has_api_key: api_key.is_some_and(|v| !v.is_empty()),
        has_search_engine_id: engine_id.is_some_and(|v| !v.is_empty()),
        api_key_preview: preview(api_key),
        search_engine_id_preview: preview(engine_id),
    })
}
