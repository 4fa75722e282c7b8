// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to hash password: {0}")]
pub struct PasswordHashError(pub String);

/// 密码服务特质
pub trait PasswordService: Send + Sync {
    /// 计算密码哈希
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;
    /// 校验密码，哈希格式错误时视为不匹配
    fn verify(&self, password: &str, hash: &str) -> bool;
}
