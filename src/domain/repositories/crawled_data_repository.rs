// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::crawler_config_repository::RepositoryError;
use async_trait::async_trait;

/// 已爬取数据仓库特质
#[async_trait]
pub trait CrawledDataRepository: Send + Sync {
    /// 删除所有 `link` 以 `prefix` 开头的记录
    ///
    /// 区分大小写，从第0个字符开始精确比较，`%` 和 `_` 不作为通配符。
    /// 返回删除的记录数。
    async fn delete_by_link_starting_with(&self, prefix: &str) -> Result<u64, RepositoryError>;
}
