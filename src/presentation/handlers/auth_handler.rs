// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::application::dto::auth_dto::{
    CheckCredsRequest, RegisterEmployerRequest, RegisterJobSeekerRequest, RevokeTokenRequest,
    TokenRequest,
};
use crate::application::services::auth_service::AuthService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::CurrentUser;
use crate::presentation::handlers::ok;

/// 注册求职者
pub async fn register_job_seeker(
    Extension(auth): Extension<Arc<AuthService>>,
    Json(payload): Json<RegisterJobSeekerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = auth.register_job_seeker(payload).await?;
    Ok((StatusCode::CREATED, ok(user)))
}

/// 注册招聘方及其公司
pub async fn register_employer(
    Extension(auth): Extension<Arc<AuthService>>,
    Json(payload): Json<RegisterEmployerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = auth.register_employer(payload).await?;
    Ok((StatusCode::CREATED, ok(user)))
}

pub async fn check_creds(
    Extension(auth): Extension<Arc<AuthService>>,
    Json(payload): Json<CheckCredsRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(auth.check_credentials(payload).await?))
}

/// 签发访问令牌与刷新令牌
pub async fn token(
    Extension(auth): Extension<Arc<AuthService>>,
    Json(payload): Json<TokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(auth.get_token(payload).await?))
}

pub async fn revoke_token(
    Extension(auth): Extension<Arc<AuthService>>,
    Json(payload): Json<RevokeTokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth.revoke_token(payload)?;
    Ok(ok(()))
}

pub async fn user_info(
    Extension(auth): Extension<Arc<AuthService>>,
    CurrentUser(claims): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(auth.get_user_info(&claims.email).await?))
}

pub async fn settings(Extension(auth): Extension<Arc<AuthService>>) -> impl IntoResponse {
    ok(auth.get_settings())
}
