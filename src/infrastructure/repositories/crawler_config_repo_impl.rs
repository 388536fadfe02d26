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

use crate::domain::models::crawler_config::CrawlerConfig;
use crate::domain::repositories::crawler_config_repository::{
    CrawlerConfigRepository, RepositoryError,
};
use crate::infrastructure::database::entities::crawler_config as config_entity;
use async_trait::async_trait;
use sea_orm::*;

/// 爬虫配置仓库实现
///
/// 对任意连接生效：既可以是连接池，也可以是一个打开的事务。
pub struct CrawlerConfigRepositoryImpl<'a, C> {
    /// 数据库连接
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CrawlerConfigRepositoryImpl<'a, C> {
    /// 创建新的配置仓库实例
    ///
    /// # 参数
    ///
    /// * `conn` - 数据库连接或事务
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

impl From<config_entity::Model> for CrawlerConfig {
    fn from(m: config_entity::Model) -> Self {
        Self {
            id: Some(m.id),
            url: m.url,
            keywords: m.keywords,
            link_selector: m.link_selector,
            title_selector: m.title_selector,
            date_selector: m.date_selector,
            content_selector: m.content_selector,
            url_prefix: m.url_prefix,
        }
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> CrawlerConfigRepository for CrawlerConfigRepositoryImpl<'a, C> {
    async fn find_all(&self) -> Result<Vec<CrawlerConfig>, RepositoryError> {
        let models = config_entity::Entity::find()
            .order_by_asc(config_entity::Column::Id)
            .all(self.conn)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CrawlerConfig>, RepositoryError> {
        let model = config_entity::Entity::find_by_id(id).one(self.conn).await?;
        Ok(model.map(Into::into))
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = config_entity::Entity::delete_many().exec(self.conn).await?;
        Ok(result.rows_affected)
    }

    async fn save_all_and_flush(
        &self,
        configs: Vec<CrawlerConfig>,
    ) -> Result<Vec<CrawlerConfig>, RepositoryError> {
        let mut saved = Vec::with_capacity(configs.len());

        // One INSERT ... RETURNING per row keeps the generated ids in input order
        for config in configs {
            let model = config_entity::ActiveModel {
                id: NotSet,
                url: Set(config.url),
                keywords: Set(config.keywords),
                link_selector: Set(config.link_selector),
                title_selector: Set(config.title_selector),
                date_selector: Set(config.date_selector),
                content_selector: Set(config.content_selector),
                url_prefix: Set(config.url_prefix),
            };

            let inserted = model.insert(self.conn).await?;
            saved.push(inserted.into());
        }

        Ok(saved)
    }

    async fn delete(&self, config: &CrawlerConfig) -> Result<(), RepositoryError> {
        if let Some(id) = config.id {
            config_entity::Entity::delete_by_id(id)
                .exec(self.conn)
                .await?;
        }
        Ok(())
    }
}
