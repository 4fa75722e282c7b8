// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 测试主模块
///
/// 集成测试均运行在迁移后的内存 SQLite 数据库上
mod integration;
