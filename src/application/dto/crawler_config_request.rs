// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawler_config::CrawlerConfigForm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use validator::Validate;

/// 管理界面提交的单个站点配置
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CrawlerConfigRequestDto {
    #[validate(
        required(message = "url is required"),
        url(message = "url is invalid")
    )]
    pub url: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub link_selector: Option<String>,
    pub title_selector: Option<String>,
    pub date_selector: Option<String>,
    pub content_selector: Option<String>,
    pub url_prefix: Option<String>,
}

/// 配置表单校验失败
///
/// `messages` 的键为 `<表单下标>.<字段名>`。
#[derive(Debug, Error)]
#[error("crawler config validation failed")]
pub struct ConfigValidationError {
    pub messages: BTreeMap<String, String>,
}

/// 空白字符串视为未填写
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<CrawlerConfigRequestDto> for CrawlerConfigForm {
    fn from(dto: CrawlerConfigRequestDto) -> Self {
        Self {
            url: dto.url,
            keywords: dto.keywords,
            link_selector: non_blank(dto.link_selector),
            title_selector: non_blank(dto.title_selector),
            date_selector: non_blank(dto.date_selector),
            content_selector: non_blank(dto.content_selector),
            url_prefix: non_blank(dto.url_prefix),
        }
    }
}

impl CrawlerConfigRequestDto {
    /// 校验整批表单，全部通过时转换为领域表单
    pub fn validate_all(
        dtos: Vec<CrawlerConfigRequestDto>,
    ) -> Result<Vec<CrawlerConfigForm>, ConfigValidationError> {
        let mut messages = BTreeMap::new();

        for (index, dto) in dtos.iter().enumerate() {
            if let Err(errors) = dto.validate() {
                for (field, field_errors) in errors.field_errors() {
                    if let Some(first) = field_errors.first() {
                        let message = first
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| first.code.to_string());
                        messages.insert(format!("{}.{}", index, camel_case(&field)), message);
                    }
                }
            }
        }

        if !messages.is_empty() {
            return Err(ConfigValidationError { messages });
        }

        Ok(dtos.into_iter().map(Into::into).collect())
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
