// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 启动 Prometheus 指标导出
///
/// 地址无效或端口被占用时只记录警告，服务继续运行。
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counters();
    info!("Metrics exporter listening on {}", addr);
}

fn describe_counters() {
    describe_counter!(
        "crawler_configs_saved_total",
        "Crawler configs written by full replacements"
    );
    describe_counter!("crawler_configs_deleted_total", "Crawler configs deleted by id");
    describe_counter!(
        "crawled_data_purged_total",
        "Crawled records removed by cascade deletes"
    );
}
