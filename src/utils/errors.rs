// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 违反唯一约束（slug、邮箱、收藏记录等）
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
    /// 存储的值无法映射为领域类型（未知角色、状态等）
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => RepositoryError::UniqueViolation(msg),
            _ => RepositoryError::Database(err),
        }
    }
}

/// 应用服务错误类型
///
/// 每个变体对应一个HTTP状态码，由表示层统一映射
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 资源冲突（邮箱已存在、角色不符等）
    #[error("{0}")]
    Conflict(String),
    /// 资源不存在
    #[error("{0}")]
    NotFound(String),
    /// 令牌无效
    #[error("{0}")]
    Unauthorized(String),
    /// 请求参数校验失败
    #[error("{0}")]
    Validation(String),
    /// 内部错误（哈希、签名失败等）
    #[error("Internal error: {0}")]
    Internal(String),
    /// 仓库错误
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn not_found(what: &str) -> Self {
        ServiceError::NotFound(format!("{} not found", what))
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::Validation(errors.to_string())
    }
}
