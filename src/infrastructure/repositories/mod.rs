// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的具体实现
/// 包括基于SeaORM的数据库实现和内存实现
pub mod crawled_data_repo_impl;
pub mod crawler_config_repo_impl;
pub mod memory_store;
