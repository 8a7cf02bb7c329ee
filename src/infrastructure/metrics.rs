// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::{Ipv4Addr, SocketAddr};
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

/// 初始化指标系统
///
/// 未启用时不安装记录器，各处的 `counter!` 调用为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        return;
    }

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, settings.port));

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!("search_requests_total", "Total number of searches per engine");
    describe_counter!(
        "search_provider_failures_total",
        "Total number of failed calls to an external search provider"
    );
    describe_counter!(
        "search_provider_substitutions_total",
        "Total number of result sets replaced by mock data"
    );

    info!("Metrics exporter listening on {}", addr);
}
