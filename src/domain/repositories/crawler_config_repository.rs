// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawler_config::CrawlerConfig;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
///
/// 存储层的任何故障都以此类型原样传递给调用方。
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 非数据库存储后端的错误
    #[error("Storage error: {0}")]
    Storage(String),
}

/// 爬虫配置仓库特质
///
/// 定义配置记录的数据访问接口。实现可以是关系型数据库，也可以是内存存储。
#[async_trait]
pub trait CrawlerConfigRepository: Send + Sync {
    /// 查询全部配置，顺序由存储决定
    async fn find_all(&self) -> Result<Vec<CrawlerConfig>, RepositoryError>;

    /// 根据ID查找配置
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(CrawlerConfig))` - 找到配置
    /// * `Ok(None)` - 配置不存在
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, id: i32) -> Result<Option<CrawlerConfig>, RepositoryError>;

    /// 删除全部配置，返回删除的行数
    async fn delete_all(&self) -> Result<u64, RepositoryError>;

    /// 批量插入新配置并立即写入存储
    ///
    /// 传入记录的 `id` 被忽略，返回的记录带有存储分配的ID，顺序与输入一致。
    async fn save_all_and_flush(
        &self,
        configs: Vec<CrawlerConfig>,
    ) -> Result<Vec<CrawlerConfig>, RepositoryError>;

    /// 删除单条配置
    async fn delete(&self, config: &CrawlerConfig) -> Result<(), RepositoryError>;
}
