// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 爬虫配置仓库（crawler_config_repository）：管理站点配置集合
/// - 已爬取数据仓库（crawled_data_repository）：按链接前缀清理已爬取数据
/// - 工作单元（unit_of_work）：把多步写入包进同一个事务
pub mod crawled_data_repository;
pub mod crawler_config_repository;
pub mod unit_of_work;
