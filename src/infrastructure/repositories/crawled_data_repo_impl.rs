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

use crate::domain::models::crawled_data::CrawledData;
use crate::domain::repositories::crawled_data_repository::CrawledDataRepository;
use crate::domain::repositories::crawler_config_repository::RepositoryError;
use crate::infrastructure::database::entities::crawled_data as data_entity;
use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::*;

/// 单条 DELETE 语句中ID参数的上限，低于 SQLite 的绑定变量限制
const DELETE_CHUNK_SIZE: usize = 500;

/// 已爬取数据仓库实现
pub struct CrawledDataRepositoryImpl<'a, C> {
    /// 数据库连接
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CrawledDataRepositoryImpl<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// 写入一条已爬取数据
    ///
    /// 正常情况下由外部爬虫写入，这里用于初始化和测试。
    pub async fn insert(&self, data: &CrawledData) -> Result<CrawledData, RepositoryError> {
        let model = data_entity::ActiveModel {
            id: NotSet,
            link: Set(data.link.clone()),
            title: Set(data.title.clone()),
            content: Set(data.content.clone()),
            published_at: Set(data.published_at),
            created_at: Set(data.created_at),
        };

        Ok(model.insert(self.conn).await?.into())
    }

    /// 查询全部已爬取数据，按ID排序
    pub async fn find_all(&self) -> Result<Vec<CrawledData>, RepositoryError> {
        let models = data_entity::Entity::find()
            .order_by_asc(data_entity::Column::Id)
            .all(self.conn)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

impl From<data_entity::Model> for CrawledData {
    fn from(m: data_entity::Model) -> Self {
        Self {
            id: Some(m.id),
            link: m.link,
            title: m.title,
            content: m.content,
            published_at: m.published_at,
            created_at: m.created_at,
        }
    }
}

/// 转义 LIKE 模式中的通配符
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait]
impl<'a, C: ConnectionTrait> CrawledDataRepository for CrawledDataRepositoryImpl<'a, C> {
    async fn delete_by_link_starting_with(&self, prefix: &str) -> Result<u64, RepositoryError> {
        let pattern = format!("{}%", escape_like(prefix));

        // LIKE narrows the candidates; SQLite compares ASCII case-insensitively,
        // so the exact prefix check happens here.
        let candidates: Vec<(i32, String)> = data_entity::Entity::find()
            .select_only()
            .column(data_entity::Column::Id)
            .column(data_entity::Column::Link)
            .filter(data_entity::Column::Link.like(LikeExpr::new(pattern).escape('\\')))
            .into_tuple()
            .all(self.conn)
            .await?;

        let ids: Vec<i32> = candidates
            .into_iter()
            .filter(|(_, link)| link.starts_with(prefix))
            .map(|(id, _)| id)
            .collect();

        let mut removed = 0;
        for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
            let result = data_entity::Entity::delete_many()
                .filter(data_entity::Column::Id.is_in(chunk.iter().copied()))
                .exec(self.conn)
                .await?;
            removed += result.rows_affected;
        }

        Ok(removed)
    }
}
