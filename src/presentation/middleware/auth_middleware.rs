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

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

use crate::domain::services::token_service::TokenService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::bearer_token;

/// 认证中间件
///
/// 校验 bearer 令牌并将解码后的 `AuthClaims` 注入请求扩展
///
/// # 参数
///
/// * `tokens` - 令牌服务
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err(AppError)` - 缺少或无效令牌时返回 401
pub async fn auth_middleware(
    State(tokens): State<Arc<dyn TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| AppError::unauthorized("Missing bearer token"))?;

    let claims = tokens.verify(token).map_err(|e| {
        debug!("Rejected bearer token for {}: {}", req.uri().path(), e);
        AppError::unauthorized("Invalid or expired token")
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
