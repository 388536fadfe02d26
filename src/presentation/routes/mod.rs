// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::unit_of_work::UnitOfWork;
use crate::presentation::handlers::crawler_config_handler;
use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 配置服务 `Arc<CrawlerConfigService<U>>` 需要由调用方以 `Extension` 层注入。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<U: UnitOfWork + 'static>() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let config_routes = Router::new()
        .route(
            "/crawler/configs",
            get(crawler_config_handler::get_configs::<U>)
                .post(crawler_config_handler::save_configs::<U>),
        )
        .route(
            "/crawler/configs/{id}",
            delete(crawler_config_handler::delete_config::<U>),
        );

    Router::new()
        .merge(public_routes)
        .merge(config_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
