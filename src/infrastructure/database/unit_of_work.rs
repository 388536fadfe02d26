// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawler_config::CrawlerConfig;
use crate::domain::repositories::crawled_data_repository::CrawledDataRepository;
use crate::domain::repositories::crawler_config_repository::{
    CrawlerConfigRepository, RepositoryError,
};
use crate::domain::repositories::unit_of_work::UnitOfWork;
use crate::infrastructure::repositories::crawled_data_repo_impl::CrawledDataRepositoryImpl;
use crate::infrastructure::repositories::crawler_config_repo_impl::CrawlerConfigRepositoryImpl;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;

/// 基于数据库事务的工作单元
#[derive(Clone)]
pub struct SeaOrmUnitOfWork {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUnitOfWork {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// 打开的数据库事务
///
/// 未提交就被丢弃时由 SeaORM 回滚。
pub struct SeaOrmTransaction {
    txn: DatabaseTransaction,
}

impl SeaOrmTransaction {
    fn configs(&self) -> CrawlerConfigRepositoryImpl<'_, DatabaseTransaction> {
        CrawlerConfigRepositoryImpl::new(&self.txn)
    }

    fn crawled_data(&self) -> CrawledDataRepositoryImpl<'_, DatabaseTransaction> {
        CrawledDataRepositoryImpl::new(&self.txn)
    }
}

#[async_trait]
impl UnitOfWork for SeaOrmUnitOfWork {
    type Scope = SeaOrmTransaction;

    async fn begin(&self) -> Result<Self::Scope, RepositoryError> {
        let txn = self.db.begin().await?;
        Ok(SeaOrmTransaction { txn })
    }

    async fn commit(&self, scope: Self::Scope) -> Result<(), RepositoryError> {
        scope.txn.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl CrawlerConfigRepository for SeaOrmTransaction {
    async fn find_all(&self) -> Result<Vec<CrawlerConfig>, RepositoryError> {
        self.configs().find_all().await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CrawlerConfig>, RepositoryError> {
        self.configs().find_by_id(id).await
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        self.configs().delete_all().await
    }

    async fn save_all_and_flush(
        &self,
        configs: Vec<CrawlerConfig>,
    ) -> Result<Vec<CrawlerConfig>, RepositoryError> {
        self.configs().save_all_and_flush(configs).await
    }

    async fn delete(&self, config: &CrawlerConfig) -> Result<(), RepositoryError> {
        self.configs().delete(config).await
    }
}

#[async_trait]
impl CrawledDataRepository for SeaOrmTransaction {
    async fn delete_by_link_starting_with(&self, prefix: &str) -> Result<u64, RepositoryError> {
        self.crawled_data().delete_by_link_starting_with(prefix).await
    }
}
