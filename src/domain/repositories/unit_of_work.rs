// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::crawled_data_repository::CrawledDataRepository;
use super::crawler_config_repository::{CrawlerConfigRepository, RepositoryError};
use async_trait::async_trait;

/// 工作单元特质
///
/// `begin` 打开一个同时提供两个仓库的事务作用域。只有 `commit` 之后其中的
/// 写入才对外可见；未提交就被丢弃的作用域会回滚。
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// 事务作用域
    type Scope: CrawlerConfigRepository + CrawledDataRepository + Send + Sync;

    /// 开始事务
    async fn begin(&self) -> Result<Self::Scope, RepositoryError>;

    /// 提交事务
    async fn commit(&self, scope: Self::Scope) -> Result<(), RepositoryError>;
}
