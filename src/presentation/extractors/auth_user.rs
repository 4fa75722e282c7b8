// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};

use crate::domain::services::token_service::AuthClaims;
use crate::presentation::errors::AppError;

/// 从 `Authorization: Bearer <token>` 头中取出令牌
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// 已通过认证中间件的当前用户
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthClaims);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// 可选的 bearer 令牌，不做校验
#[derive(Debug, Clone, Default)]
pub struct OptionalBearer(pub Option<String>);

impl<S> FromRequestParts<S> for OptionalBearer
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalBearer(
            bearer_token(&parts.headers).map(str::to_string),
        ))
    }
}
