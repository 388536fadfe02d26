// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 关键词持久化时使用的分隔符
pub const KEYWORD_SEPARATOR: &str = "\n";

/// 爬虫站点配置实体
///
/// 描述一个待爬取站点：目标URL、提取选择器、关键词过滤以及
/// 用于级联删除已爬取数据的URL前缀。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlerConfig {
    /// 存储层分配的唯一标识符，未持久化时为空
    pub id: Option<i32>,
    /// 目标站点URL
    pub url: Option<String>,
    /// 按换行符连接的关键词，顺序即下游爬虫的过滤顺序
    pub keywords: Option<String>,
    /// 列表页链接选择器
    pub link_selector: Option<String>,
    /// 标题选择器
    pub title_selector: Option<String>,
    /// 日期选择器
    pub date_selector: Option<String>,
    /// 正文选择器
    pub content_selector: Option<String>,
    /// 级联删除使用的链接前缀，存在时优先于 `url`
    pub url_prefix: Option<String>,
}

impl CrawlerConfig {
    /// 根据提交的表单构造尚未持久化的配置
    ///
    /// 除关键词外所有字段原样复制。
    pub fn from_form(form: &CrawlerConfigForm) -> Self {
        Self {
            id: None,
            url: form.url.clone(),
            keywords: serialize_keywords(form.keywords.as_deref()),
            link_selector: form.link_selector.clone(),
            title_selector: form.title_selector.clone(),
            date_selector: form.date_selector.clone(),
            content_selector: form.content_selector.clone(),
            url_prefix: form.url_prefix.clone(),
        }
    }

    /// 计算级联删除键
    ///
    /// `url_prefix` 存在时使用它，否则回退到 `url`；两者都缺失时返回 `None`。
    pub fn cascade_prefix(&self) -> Option<&str> {
        match self.url_prefix.as_deref() {
            Some(prefix) => Some(prefix),
            None => self.url.as_deref(),
        }
    }
}

/// 调用方提交的单个站点配置表单
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlerConfigForm {
    pub url: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub link_selector: Option<String>,
    pub title_selector: Option<String>,
    pub date_selector: Option<String>,
    pub content_selector: Option<String>,
    pub url_prefix: Option<String>,
}

/// 将关键词序列序列化为持久化字符串
///
/// 缺失的序列保持为 `None`，空序列得到空字符串。
pub fn serialize_keywords(keywords: Option<&[String]>) -> Option<String> {
    keywords.map(|list| list.join(KEYWORD_SEPARATOR))
}
