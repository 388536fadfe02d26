// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawled_data::CrawledData;
use crate::domain::models::crawler_config::CrawlerConfig;
use crate::domain::repositories::crawled_data_repository::CrawledDataRepository;
use crate::domain::repositories::crawler_config_repository::{
    CrawlerConfigRepository, RepositoryError,
};
use crate::domain::repositories::unit_of_work::UnitOfWork;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

#[derive(Debug, Clone)]
struct MemoryState {
    configs: BTreeMap<i32, CrawlerConfig>,
    crawled_data: BTreeMap<i32, CrawledData>,
    next_config_id: i32,
    next_data_id: i32,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            configs: BTreeMap::new(),
            crawled_data: BTreeMap::new(),
            next_config_id: 1,
            next_data_id: 1,
        }
    }
}

/// 内存存储
///
/// 事务持有整个状态的独占锁，并在副本上暂存写入，提交时整体替换。
/// 因此事务之间是串行化的。
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<AsyncMutex<MemoryState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入一条已爬取数据，模拟外部爬虫
    pub async fn insert_crawled_data(&self, mut data: CrawledData) -> CrawledData {
        let mut state = self.state.lock().await;
        let id = state.next_data_id;
        state.next_data_id += 1;
        data.id = Some(id);
        state.crawled_data.insert(id, data.clone());
        data
    }

    /// 当前全部已爬取数据，按ID排序
    pub async fn crawled_data(&self) -> Vec<CrawledData> {
        self.state.lock().await.crawled_data.values().cloned().collect()
    }
}

/// 内存存储的事务作用域
pub struct InMemoryTransaction {
    guard: OwnedMutexGuard<MemoryState>,
    staged: Mutex<MemoryState>,
}

#[async_trait]
impl UnitOfWork for InMemoryStore {
    type Scope = InMemoryTransaction;

    async fn begin(&self) -> Result<Self::Scope, RepositoryError> {
        let guard = self.state.clone().lock_owned().await;
        let staged = Mutex::new(guard.clone());
        Ok(InMemoryTransaction { guard, staged })
    }

    async fn commit(&self, scope: Self::Scope) -> Result<(), RepositoryError> {
        let InMemoryTransaction { mut guard, staged } = scope;
        *guard = staged.into_inner();
        Ok(())
    }
}

#[async_trait]
impl CrawlerConfigRepository for InMemoryTransaction {
    async fn find_all(&self) -> Result<Vec<CrawlerConfig>, RepositoryError> {
        Ok(self.staged.lock().configs.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CrawlerConfig>, RepositoryError> {
        Ok(self.staged.lock().configs.get(&id).cloned())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let mut staged = self.staged.lock();
        let removed = staged.configs.len() as u64;
        staged.configs.clear();
        Ok(removed)
    }

    async fn save_all_and_flush(
        &self,
        configs: Vec<CrawlerConfig>,
    ) -> Result<Vec<CrawlerConfig>, RepositoryError> {
        let mut staged = self.staged.lock();
        let mut saved = Vec::with_capacity(configs.len());
        for mut config in configs {
            let id = staged.next_config_id;
            staged.next_config_id += 1;
            config.id = Some(id);
            staged.configs.insert(id, config.clone());
            saved.push(config);
        }
        Ok(saved)
    }

    async fn delete(&self, config: &CrawlerConfig) -> Result<(), RepositoryError> {
        if let Some(id) = config.id {
            self.staged.lock().configs.remove(&id);
        }
        Ok(())
    }
}

#[async_trait]
impl CrawledDataRepository for InMemoryTransaction {
    async fn delete_by_link_starting_with(&self, prefix: &str) -> Result<u64, RepositoryError> {
        let mut staged = self.staged.lock();
        let before = staged.crawled_data.len();
        staged
            .crawled_data
            .retain(|_, data| !data.link.starts_with(prefix));
        Ok((before - staged.crawled_data.len()) as u64)
    }
}
