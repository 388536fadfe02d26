// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 已爬取的数据记录
///
/// 由外部爬虫写入。本系统只在级联删除时按 `link` 前缀匹配它们。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawledData {
    pub id: Option<i32>,
    /// 来源页面链接
    pub link: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
}

impl CrawledData {
    /// 创建只带链接的记录
    pub fn with_link(link: impl Into<String>) -> Self {
        Self {
            id: None,
            link: link.into(),
            title: None,
            content: None,
            published_at: None,
            created_at: chrono::Utc::now().fixed_offset(),
        }
    }
}
