// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{RoleName, User};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 令牌载荷
///
/// 访问令牌默认不带过期时间，`exp` 为空时不写入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthClaims {
    pub id: Uuid,
    pub role_name: RoleName,
    pub email: String,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// 签发的令牌对
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// 令牌错误
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token: {0}")]
    Invalid(String),
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// 令牌服务特质
///
/// 负责签发与校验无状态的 Bearer 令牌
pub trait TokenService: Send + Sync {
    /// 为用户签发访问令牌与刷新令牌
    fn issue(&self, user: &User) -> Result<TokenPair, TokenError>;
    /// 校验令牌签名与过期时间，返回载荷
    fn verify(&self, token: &str) -> Result<AuthClaims, TokenError>;
}
