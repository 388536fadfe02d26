// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 爬虫配置服务（crawler_config_service）：整体替换配置集合，删除配置时级联清理已爬取数据
pub mod crawler_config_service;
