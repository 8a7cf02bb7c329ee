// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use foxseek::config::settings::Settings;
use foxseek::infrastructure::metrics::init_metrics;
use foxseek::infrastructure::search::SearchEngineFactory;
use foxseek::presentation::routes;
use foxseek::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Arc::new(Settings::new()?);

    // 2. Initialize logging and metrics
    telemetry::init_telemetry(&settings.logging);
    info!("Starting foxseek...");
    init_metrics(&settings.metrics);

    if settings.google_search.credentials().is_none() {
        info!("Google API credentials not configured; google method will serve mock data");
    }
    if settings.ai_search.base_url.is_none() {
        info!("AI search service not configured; /search will ask clients to fall back");
    }

    // 3. Initialize search engines
    let service = Arc::new(SearchEngineFactory::create_service(&settings)?);

    // 4. Start HTTP server
    let app = routes::app(service, settings.clone());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
