// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求/响应DTO与编排仓库的应用服务
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、仓库接口以及令牌/密码协作者契约
pub mod domain;

/// 基础设施模块
///
/// 提供数据库实体、仓库实现与安全组件
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和中间件
pub mod presentation;

/// 工具模块
///
/// 提供错误类型、slug 生成与遥测初始化
pub mod utils;
