// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 爬虫配置（crawler_config）：站点爬取定义及其表单
/// - 已爬取数据（crawled_data）：外部爬虫产出的记录
pub mod crawled_data;
pub mod crawler_config;
