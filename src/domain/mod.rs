// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：爬虫配置与已爬取数据
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：配置整体替换与级联删除
///
/// 领域层不依赖任何具体的存储实现。
pub mod models;
pub mod repositories;
pub mod services;
