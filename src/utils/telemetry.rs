// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 默认日志过滤规则，`RUST_LOG` 存在时被覆盖
pub const DEFAULT_LOG_FILTER: &str = "info,crawlkeeper=debug";

/// 构造日志过滤器
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

/// 初始化全局日志订阅器
///
/// 重复调用时只有第一次生效。
pub fn init_telemetry() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
