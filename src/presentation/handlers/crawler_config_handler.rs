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

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    application::dto::crawler_config_request::CrawlerConfigRequestDto,
    domain::{
        models::crawler_config::CrawlerConfig, repositories::unit_of_work::UnitOfWork,
        services::crawler_config_service::CrawlerConfigService,
    },
    presentation::errors::AppError,
};

/// 查询全部爬虫配置
pub async fn get_configs<U>(
    Extension(service): Extension<Arc<CrawlerConfigService<U>>>,
) -> Result<Json<Vec<CrawlerConfig>>, AppError>
where
    U: UnitOfWork + 'static,
{
    let configs = service.gets().await?;
    Ok(Json(configs))
}

/// 用提交的列表整体替换爬虫配置
///
/// 任何一项校验失败时返回 400，存储不受影响。
pub async fn save_configs<U>(
    Extension(service): Extension<Arc<CrawlerConfigService<U>>>,
    Json(payload): Json<Vec<CrawlerConfigRequestDto>>,
) -> Result<StatusCode, AppError>
where
    U: UnitOfWork + 'static,
{
    let forms = CrawlerConfigRequestDto::validate_all(payload)?;
    service.save(&forms).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 删除爬虫配置并清理其已爬取数据
pub async fn delete_config<U>(
    Extension(service): Extension<Arc<CrawlerConfigService<U>>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError>
where
    U: UnitOfWork + 'static,
{
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
