// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 安全模块
///
/// 提供 JWT 令牌签发校验与 Argon2 密码哈希的实现
pub mod jwt;
pub mod password;
