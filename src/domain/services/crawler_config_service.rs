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

use crate::domain::models::crawler_config::{CrawlerConfig, CrawlerConfigForm};
use crate::domain::repositories::crawled_data_repository::CrawledDataRepository;
use crate::domain::repositories::crawler_config_repository::{
    CrawlerConfigRepository, RepositoryError,
};
use crate::domain::repositories::unit_of_work::UnitOfWork;
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, info};

/// 爬虫配置服务
///
/// 负责整体替换配置集合，以及删除配置时级联清理其已爬取数据。
/// 每个操作都在一个工作单元内完成，两步写入要么一起提交，要么一起回滚。
pub struct CrawlerConfigService<U: UnitOfWork> {
    /// 存储工作单元
    store: Arc<U>,
}

impl<U: UnitOfWork> CrawlerConfigService<U> {
    /// 创建新的配置服务实例
    ///
    /// # 参数
    ///
    /// * `store` - 提供事务作用域的存储
    pub fn new(store: Arc<U>) -> Self {
        Self { store }
    }

    /// 用提交的表单整体替换配置集合
    ///
    /// 先删除全部已有配置，再插入由表单构造的新配置，提交后返回。
    /// 空表单列表会得到空的配置集合。
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 替换完成
    /// * `Err(RepositoryError)` - 存储故障，事务未提交
    pub async fn save(&self, forms: &[CrawlerConfigForm]) -> Result<(), RepositoryError> {
        let items: Vec<CrawlerConfig> = forms.iter().map(CrawlerConfig::from_form).collect();

        let scope = self.store.begin().await?;
        let removed = scope.delete_all().await?;
        let saved = scope.save_all_and_flush(items).await?;
        self.store.commit(scope).await?;

        counter!("crawler_configs_saved_total").increment(saved.len() as u64);
        info!(
            removed = removed,
            saved = saved.len(),
            "Replaced crawler configuration set"
        );
        Ok(())
    }

    /// 查询全部配置
    pub async fn gets(&self) -> Result<Vec<CrawlerConfig>, RepositoryError> {
        let scope = self.store.begin().await?;
        let configs = scope.find_all().await?;
        self.store.commit(scope).await?;
        Ok(configs)
    }

    /// 删除配置并级联清理已爬取数据
    ///
    /// ID不存在时什么也不做。级联键优先使用 `url_prefix`，其次 `url`；
    /// 两者都缺失时跳过级联删除。
    pub async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let scope = self.store.begin().await?;

        let Some(config) = scope.find_by_id(id).await? else {
            self.store.commit(scope).await?;
            debug!(id = id, "Crawler config not found, nothing to delete");
            return Ok(());
        };

        scope.delete(&config).await?;

        let purged = match config.cascade_prefix() {
            Some(prefix) => scope.delete_by_link_starting_with(prefix).await?,
            None => {
                debug!(id = id, "Crawler config has neither url_prefix nor url, skipping cascade");
                0
            }
        };

        self.store.commit(scope).await?;

        counter!("crawler_configs_deleted_total").increment(1);
        counter!("crawled_data_purged_total").increment(purged);
        info!(id = id, purged = purged, "Deleted crawler config");
        Ok(())
    }
}
