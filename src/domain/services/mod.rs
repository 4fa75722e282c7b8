// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 定义认证相关的领域契约：
/// - 令牌服务（token_service）：签发与校验 Bearer 令牌
/// - 密码服务（password_service）：密码哈希与校验
///
/// 具体实现位于基础设施层的 security 模块。
pub mod password_service;
pub mod token_service;
